use steady_domain::mock_data::{mock_earnings, savings_goals};
use steady_domain::{format_rupees, progress_percent, ExpenseLedger, Route};
use yew::prelude::*;

use crate::components::{EarningsChart, EarningsStyle};
use crate::hooks::{use_config, use_wallet};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let snapshot = wallet.snapshot();
    let theme = wallet.theme();
    let money = |amount: f64| format_rupees(&config.currency_symbol, amount);

    let go = |route: Route| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(route))
    };

    let glow = if snapshot.is_unlocked { "#ef4444" } else { theme.accent_color };
    let today_income = ExpenseLedger::default().total_income();
    let bike_goal = savings_goals().into_iter().next();

    html! {
        <div class="space-y-6 pb-20">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class={classes!("text-2xl", "font-bold", theme.text_primary)}>{"Hello, Rahul 👋"}</h1>
                    <p class={classes!("text-sm", theme.text_secondary)}>{"Ready for today's shift?"}</p>
                </div>
                <div
                    onclick={go(Route::Modes)}
                    class={classes!("flex", "items-center", "gap-2", "px-3", "py-1", "rounded-full", "cursor-pointer", "border", theme.secondary_button, theme.border)}
                >
                    <div class="w-2 h-2 rounded-full animate-pulse" style={format!("background-color: {}", theme.accent_color)} />
                    <span class="text-xs font-semibold uppercase">{format!("{} MODE", snapshot.mode)}</span>
                </div>
            </div>

            // Shadow wallet overview
            <div
                onclick={go(Route::ShadowWallet)}
                class={classes!(
                    "bg-gray-900", "text-white", "p-6", "rounded-2xl", "shadow-xl", "relative", "overflow-hidden", "cursor-pointer", "transition-all",
                    snapshot.is_unlocked.then_some("ring-4 ring-red-500/50")
                )}
            >
                <div
                    class="absolute top-0 right-0 w-64 h-64 rounded-full blur-[80px] opacity-20 -mr-16 -mt-16 animate-pulse"
                    style={format!("background-color: {}", glow)}
                ></div>
                <div class="relative z-10">
                    <p class="text-gray-400 text-sm mb-1">
                        if snapshot.is_unlocked {
                            <span class="text-red-400 font-bold">{"⚠️ WALLET UNLOCKED (UNSAFE)"}</span>
                        } else {
                            {"Spendable Balance (Visible)"}
                        }
                    </p>
                    <span class={classes!("text-4xl", "font-bold", snapshot.is_unlocked.then_some("text-red-100"))}>
                        {money(snapshot.visible_balance)}
                    </span>

                    <div class="mt-6 flex items-center gap-3">
                        <div class={classes!(
                            "bg-gray-800/50", "rounded-lg", "p-2", "flex", "items-center", "gap-2", "border",
                            if snapshot.is_unlocked { "border-red-900/50" } else { "border-gray-700" }
                        )}>
                            <div class="p-1 rounded-full text-xs" style={format!("background-color: {}", glow)}>{"👛"}</div>
                            <div>
                                <p class="text-[10px] text-gray-400">{"Shadow (Locked)"}</p>
                                <p class="text-sm font-semibold">{money(snapshot.shadow_balance)}</p>
                            </div>
                        </div>
                        if !snapshot.is_unlocked {
                            <div class="text-xs text-green-400 flex items-center bg-green-900/30 px-2 py-1 rounded">
                                {format!("+ {} Today", money(today_income))}
                            </div>
                        }
                    </div>
                </div>
            </div>

            // Weekly flow
            <div class={classes!("p-5", "rounded-xl", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                <div class="flex justify-between items-center mb-4">
                    <h3 class={classes!("font-semibold", theme.text_primary)}>{"Weekly Flow"}</h3>
                    <button onclick={go(Route::Gigs)} class={classes!("text-xs", "font-medium", theme.text_secondary)}>
                        {"Details →"}
                    </button>
                </div>
                <EarningsChart earnings={mock_earnings()} style={EarningsStyle::Area} accent={theme.accent_color} height={160} />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div onclick={go(Route::Predictions)} class={classes!("p-4", "rounded-xl", "border", "cursor-pointer", "transition", "hover:shadow-md", theme.bg_panel, theme.border)}>
                    <p class="mb-2 text-2xl">{"📈"}</p>
                    <p class={classes!("text-xs", "font-semibold", theme.text_secondary)}>{"Prediction"}</p>
                    <p class={classes!("text-sm", "font-bold", theme.text_primary)}>{"Good Day Tmrw"}</p>
                </div>
                <div onclick={go(Route::Savings)} class={classes!("p-4", "rounded-xl", "border", "cursor-pointer", "transition", "hover:shadow-md", theme.bg_panel, theme.border)}>
                    <p class="mb-2 text-2xl">{"₹"}</p>
                    <p class={classes!("text-xs", "font-semibold", theme.text_secondary)}>{"Goal: Bike"}</p>
                    <p class={classes!("text-sm", "font-bold", theme.text_primary)}>
                        {format!("{}% Done", bike_goal.as_ref().map(progress_percent).unwrap_or(0))}
                    </p>
                </div>
            </div>

            <div class="fixed bottom-24 right-6 md:right-72">
                <button
                    onclick={go(Route::Expenses)}
                    class={classes!("w-14", "h-14", "rounded-full", "shadow-lg", "transition", "active:scale-95", "flex", "items-center", "justify-center", theme.primary_button)}
                >
                    <span class="text-xl font-bold">{"+"}</span>
                </button>
            </div>
        </div>
    }
}
