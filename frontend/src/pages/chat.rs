use shared::ChatRole;
use web_sys::{Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::hooks::{use_chat, use_config, use_wallet};

#[function_component(Chat)]
pub fn chat() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let theme = wallet.theme();
    let mode = wallet.wallet.mode();
    let chat = use_chat(&config.chat, mode);
    let end_ref = use_node_ref();

    {
        let end_ref = end_ref.clone();
        let count = chat.session.messages().len();
        let loading = chat.session.is_loading();
        use_effect_with((count, loading), move |_| {
            if let Some(end) = end_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                end.scroll_into_view_with_scroll_into_view_options(&options);
            }
            || ()
        });
    }

    let oninput = {
        let on_input = chat.actions.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let onkeydown = {
        let send = chat.actions.send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };
    let onclick = chat.actions.send.reform(|_: MouseEvent| ());
    let has_text = !chat.input.trim().is_empty();

    html! {
        <div class="flex flex-col h-[calc(100vh-6rem)]">
            <div class={classes!("flex", "items-center", "justify-between", "pb-4", "border-b", theme.border)}>
                <div>
                    <h1 class={classes!("text-xl", "font-bold", "flex", "items-center", "gap-2", theme.text_primary)}>
                        {"THESTEADY Coach "}<span style={format!("color: {}", theme.accent_color)}>{"✨"}</span>
                    </h1>
                    <p class={classes!("text-xs", theme.text_secondary)}>{format!("Always online • {} Mode", mode)}</p>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto py-4 space-y-4 scrollbar-hide">
                {for chat.session.messages().iter().map(|message| {
                    let from_user = message.role == ChatRole::User;
                    html! {
                        <div key={message.id.clone()} class={classes!("flex", "items-end", "gap-2", from_user.then_some("flex-row-reverse"))}>
                            <div class={classes!(
                                "w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center", "shrink-0", "text-sm",
                                if from_user { "bg-gray-200" } else { theme.primary_button }
                            )}>
                                {if from_user { "👤" } else { "🤖" }}
                            </div>
                            <div class={classes!(
                                "max-w-[80%]", "p-3", "rounded-2xl", "text-sm", "leading-relaxed", "whitespace-pre-wrap",
                                if from_user { classes!("bg-gray-100", "text-gray-800", "rounded-br-none") } else { classes!(theme.icon_bg, "rounded-bl-none", "border", theme.border) }
                            )}>
                                {message.text.clone()}
                            </div>
                        </div>
                    }
                })}
                if chat.session.is_loading() {
                    <div class="flex items-end gap-2">
                        <div class={classes!("w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center", "text-sm", theme.primary_button)}>{"🤖"}</div>
                        <div class={classes!("p-3", "rounded-2xl", "rounded-bl-none", "text-gray-400", "text-sm", theme.bg_app)}>{"Thinking..."}</div>
                    </div>
                }
                <div ref={end_ref} />
            </div>

            <div class="py-2 flex gap-2 overflow-x-auto scrollbar-hide">
                {for chat.session.quick_prompts().iter().map(|&prompt| {
                    let onclick = chat.actions.on_input.reform(move |_: MouseEvent| prompt.to_string());
                    html! {
                        <button
                            key={prompt}
                            {onclick}
                            class={classes!("whitespace-nowrap", "px-3", "py-1.5", "border", "border-gray-200", "rounded-full", "text-xs", "text-gray-600", "hover:border-gray-400", "transition", theme.bg_panel)}
                        >
                            {prompt}
                        </button>
                    }
                })}
            </div>

            <div class="pt-2 -mx-4 px-4 pb-2">
                <div class={classes!("flex", "items-center", "gap-2", "p-2", "rounded-full", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                    <input
                        type="text"
                        value={chat.input.clone()}
                        {oninput}
                        {onkeydown}
                        placeholder="Ask anything..."
                        class="flex-1 bg-transparent border-none focus:ring-0 text-sm px-2 outline-none text-gray-800"
                    />
                    <button
                        {onclick}
                        disabled={!chat.session.can_send(&chat.input)}
                        class={classes!("p-2", "rounded-full", "transition", if has_text { theme.primary_button } else { "bg-gray-200 text-gray-400" })}
                    >
                        {"➤"}
                    </button>
                </div>
            </div>
        </div>
    }
}
