use shared::{GoalIcon, Theme};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddGoalModalProps {
    pub theme: &'static Theme,
    pub error: Option<String>,
    /// Emits (name, target input)
    pub on_create: Callback<(String, String)>,
    pub on_close: Callback<()>,
}

#[function_component(AddGoalModal)]
pub fn add_goal_modal(props: &AddGoalModalProps) -> Html {
    let name = use_state(String::new);
    let target = use_state(String::new);
    let theme = props.theme;

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_target = {
        let target = target.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            target.set(input.value());
        })
    };
    let on_submit = {
        let name = name.clone();
        let target = target.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(((*name).clone(), (*target).clone())))
    };
    let close = props.on_close.reform(|_: MouseEvent| ());
    let incomplete = name.trim().is_empty() || target.trim().is_empty();

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm">
            <div class={classes!("w-full", "max-w-sm", "rounded-2xl", "shadow-2xl", "p-6", theme.bg_panel)}>
                <div class="flex justify-between items-center mb-6">
                    <h2 class={classes!("text-xl", "font-bold", theme.text_primary)}>{"New Goal"}</h2>
                    <button onclick={close} class="text-gray-400 hover:text-gray-600">{"✕"}</button>
                </div>

                <div class="space-y-4">
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Goal Name"}</label>
                        <input
                            type="text"
                            value={(*name).clone()}
                            oninput={on_name}
                            placeholder="e.g. New Phone, Insurance"
                            class="w-full p-3 rounded-xl bg-gray-50 border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div>
                        <label class="block text-xs font-medium text-gray-500 mb-1">{"Target Amount (₹)"}</label>
                        <input
                            type="number"
                            value={(*target).clone()}
                            oninput={on_target}
                            placeholder="10000"
                            class="w-full p-3 rounded-xl bg-gray-50 border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        />
                    </div>

                    <div class="pt-2">
                        <p class="text-xs font-medium text-gray-500 mb-2">{"Select Icon"}</p>
                        <div class="flex gap-3 overflow-x-auto pb-2 scrollbar-hide">
                            {for [GoalIcon::Smartphone, GoalIcon::Bike, GoalIcon::Home, GoalIcon::Plane, GoalIcon::Trophy]
                                .iter()
                                .map(|icon| html! {
                                    <button class="p-3 rounded-xl bg-gray-50 border border-gray-100 hover:bg-gray-100 text-xl">
                                        {icon.emoji()}
                                    </button>
                                })}
                        </div>
                    </div>

                    if let Some(error) = props.error.as_ref() {
                        <div class="text-sm text-red-600 bg-red-50 border border-red-100 rounded-xl p-3">{error}</div>
                    }

                    <button
                        onclick={on_submit}
                        disabled={incomplete}
                        class={classes!("w-full", "py-3.5", "rounded-xl", "font-bold", "text-white", "shadow-lg", "mt-4", "disabled:opacity-50", "disabled:cursor-not-allowed", theme.primary_button)}
                    >
                        {"Create Goal"}
                    </button>
                </div>
            </div>
        </div>
    }
}
