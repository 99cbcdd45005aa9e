use shared::SavingsGoal;
use steady_domain::{format_rupees, SavingsService};
use yew::prelude::*;

use crate::components::{AddGoalModal, GoalCard, Header};
use crate::hooks::{use_config, use_wallet};
use crate::services::Logger;

#[derive(Properties, PartialEq)]
struct RuleToggleProps {
    title: AttrValue,
    detail: AttrValue,
    icon: AttrValue,
    icon_class: Classes,
    checked_color: &'static str,
    panel: Classes,
    text_primary: &'static str,
    #[prop_or_default]
    initially_on: bool,
}

#[function_component(RuleToggle)]
fn rule_toggle(props: &RuleToggleProps) -> Html {
    let on = use_state(|| props.initially_on);
    let onclick = {
        let on = on.clone();
        Callback::from(move |_: MouseEvent| on.set(!*on))
    };

    html! {
        <div class={classes!("p-4", "rounded-xl", "border", "flex", "items-center", "gap-4", props.panel.clone())}>
            <div class={classes!("p-2", "rounded-lg", props.icon_class.clone())}>{props.icon.clone()}</div>
            <div class="flex-1">
                <p class={classes!("font-medium", "text-sm", props.text_primary)}>{props.title.clone()}</p>
                <p class="text-[10px] text-gray-500">{props.detail.clone()}</p>
            </div>
            <button
                {onclick}
                role="switch"
                aria-checked={on.to_string()}
                class={classes!("relative", "w-9", "h-5", "rounded-full", "transition-colors", if *on { props.checked_color } else { "bg-gray-200" })}
            >
                <span class={classes!(
                    "absolute", "top-[2px]", "left-[2px]", "h-4", "w-4", "rounded-full", "bg-white", "border", "border-gray-300", "transition-all",
                    on.then_some("translate-x-full")
                )}></span>
            </button>
        </div>
    }
}

#[function_component(Savings)]
pub fn savings() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let theme = wallet.theme();
    let service = use_state(SavingsService::default);
    let show_modal = use_state(|| false);
    let error = use_state(|| None::<String>);

    let open_modal = {
        let show_modal = show_modal.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            show_modal.set(true);
        })
    };
    let on_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };
    let on_create = {
        let service = service.clone();
        let show_modal = show_modal.clone();
        let error = error.clone();
        Callback::from(move |(name, target): (String, String)| {
            let mut next = (*service).clone();
            match next.add_goal(&name, &target, SavingsGoal::generate_id()) {
                Ok(_) => {
                    service.set(next);
                    error.set(None);
                    show_modal.set(false);
                }
                Err(e) => {
                    Logger::warn_with_component("savings", &format!("Goal rejected: {}", e));
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    let panel = classes!(theme.bg_panel, theme.border);

    html! {
        <div class="space-y-6 pb-24 relative">
            <Header title="My Dreams" subtitle="Track & smash your targets" {theme}>
                <button
                    onclick={open_modal.clone()}
                    class={classes!("p-2", "w-10", "h-10", "rounded-full", "shadow-lg", "active:scale-95", "transition-transform", "text-xl", "font-bold", theme.primary_button)}
                >
                    {"+"}
                </button>
            </Header>

            <p class={classes!("text-xs", theme.text_secondary)}>
                {format!("Saved so far across goals: {}", format_rupees(&config.currency_symbol, service.total_saved()))}
            </p>

            <div class="grid gap-4">
                {for service.goals().iter().map(|goal| html! {
                    <GoalCard key={goal.id.clone()} goal={goal.clone()} {theme} currency_symbol={config.currency_symbol.clone()} />
                })}

                <button
                    onclick={open_modal}
                    class={classes!("p-6", "rounded-2xl", "border-2", "border-dashed", "flex", "flex-col", "items-center", "justify-center", "gap-2", "transition-colors", "hover:bg-gray-50", theme.border)}
                >
                    <div class={classes!("p-3", "rounded-full", "bg-gray-100", "text-xl", theme.text_secondary)}>{"+"}</div>
                    <p class={classes!("font-medium", theme.text_primary)}>{"Add New Savings Goal"}</p>
                </button>
            </div>

            <div class="pt-4">
                <h3 class={classes!("font-bold", "mb-3", theme.text_primary)}>{"Smart Saving Rules"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                    <RuleToggle
                        title="Daily Skim (5%)"
                        detail="Auto-save from daily earnings"
                        icon="🎯"
                        icon_class={classes!(theme.icon_bg)}
                        checked_color="bg-green-600"
                        panel={panel.clone()}
                        text_primary={theme.text_primary}
                        initially_on={true}
                    />
                    <RuleToggle
                        title="Windfall (50%)"
                        detail={format!("If earnings > {}/day", format_rupees(&config.currency_symbol, config.daily_target))}
                        icon="🎁"
                        icon_class={classes!("bg-purple-100", "text-purple-600")}
                        checked_color="bg-purple-600"
                        {panel}
                        text_primary={theme.text_primary}
                    />
                </div>
            </div>

            if *show_modal {
                <AddGoalModal {theme} error={(*error).clone()} {on_create} {on_close} />
            }
        </div>
    }
}
