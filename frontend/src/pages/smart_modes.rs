use shared::AppMode;
use steady_domain::{format_rupees, ThemeService};
use yew::prelude::*;

use crate::hooks::{use_config, use_wallet, WalletAction};

fn mode_icon(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Survival => "🛡️",
        AppMode::Stability => "⚡",
        AppMode::Growth => "📈",
        AppMode::Joy => "😊",
    }
}

#[function_component(SmartModes)]
pub fn smart_modes() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let snapshot = wallet.snapshot();
    let theme = wallet.theme();

    html! {
        <div class="space-y-6 pb-20">
            <div class="text-center">
                <h1 class={classes!("text-2xl", "font-bold", theme.text_primary)}>{"Smart Modes"}</h1>
                <p class={classes!("text-sm", theme.text_secondary)}>
                    {"Current System Theme: "}<span class="font-bold">{snapshot.mode.to_string()}</span>
                </p>
            </div>

            <div class="grid gap-4">
                {for ThemeService::mode_cards(snapshot.mode).into_iter().map(|card| {
                    let onclick = {
                        let wallet = wallet.clone();
                        let mode = card.mode;
                        Callback::from(move |_: MouseEvent| wallet.dispatch(WalletAction::SetMode(mode)))
                    };
                    let active = card.is_active;
                    let mode_theme = card.theme;
                    html! {
                        <div
                            key={card.mode.name()}
                            {onclick}
                            class={classes!(
                                "relative", "p-5", "rounded-2xl", "border-2", "transition-all", "cursor-pointer", "shadow-sm",
                                if active { classes!(mode_theme.border, mode_theme.bg_app) } else { classes!("border-white", "bg-white", "hover:border-gray-100") }
                            )}
                        >
                            if active {
                                <div class={classes!("absolute", "-top-3", "left-4", "text-[10px]", "px-2", "py-0.5", "rounded-full", "uppercase", "font-bold", "tracking-wider", "shadow-md", mode_theme.primary_button)}>
                                    {"✓ Active"}
                                </div>
                            }

                            <div class="flex justify-between items-start">
                                <div class="flex items-center gap-4">
                                    <div class={classes!("p-3", "rounded-xl", "text-xl", if active { mode_theme.primary_button } else { mode_theme.icon_bg })}>
                                        {mode_icon(card.mode)}
                                    </div>
                                    <div>
                                        <h3 class={classes!("font-bold", "text-lg", if active { mode_theme.text_primary } else { "text-gray-700" })}>
                                            {card.mode.name()}
                                        </h3>
                                        <p class="text-xs text-gray-500">{card.profile.description}</p>
                                    </div>
                                </div>
                                <div class="text-right">
                                    <p class="text-[10px] text-gray-400 uppercase">{"Daily Limit"}</p>
                                    <p class={classes!("font-bold", if active { mode_theme.text_primary } else { "text-gray-900" })}>
                                        {format_rupees(&config.currency_symbol, card.profile.daily_limit)}
                                    </p>
                                </div>
                            </div>

                            <div class={classes!("mt-4", "pt-3", "border-t", "flex", "justify-between", "items-center", "text-sm", if active { mode_theme.border } else { "border-gray-100" })}>
                                <span class="text-gray-500 text-xs">{"Shadow Lock Rate"}</span>
                                <div class="flex items-center gap-2">
                                    <div class="w-24 h-2 bg-gray-100 rounded-full overflow-hidden">
                                        <div
                                            class={classes!("h-full", "rounded-full", if active { mode_theme.primary_button } else { "bg-gray-300" })}
                                            style={format!("width: {}%", card.profile.lock_rate_percent)}
                                        />
                                    </div>
                                    <span class={classes!("font-bold", "text-xs", if active { mode_theme.text_secondary } else { "text-gray-400" })}>
                                        {format!("{}%", card.profile.lock_rate_percent)}
                                    </span>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>

            <div class={classes!("p-4", "rounded-xl", "text-center", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                <p class="text-xs text-gray-400 mb-2 uppercase tracking-wide">{"AI Insight"}</p>
                <p class={classes!("text-sm", "font-medium", theme.text_primary)}>
                    {"Switching to "}<span class="font-bold text-emerald-600">{"Growth Mode"}</span>
                    {format!("? Great! You have a surplus of {} this week.", format_rupees(&config.currency_symbol, 1200.0))}
                </p>
            </div>
        </div>
    }
}
