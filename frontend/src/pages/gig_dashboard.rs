use shared::{GigKind, PlatformStatus};
use steady_domain::mock_data::mock_earnings;
use steady_domain::{best_platform, format_rupees, platform_color, weekly_total};
use yew::prelude::*;

use crate::components::{EarningsChart, EarningsStyle, Header};
use crate::hooks::{use_config, use_gig_board, use_wallet};

fn status_button_class(status: PlatformStatus) -> &'static str {
    match status {
        PlatformStatus::Active => "bg-green-50 text-green-700 border-green-200 hover:bg-green-100 cursor-default shadow-sm",
        PlatformStatus::Error => "bg-red-50 text-red-700 border-red-200 hover:bg-red-100 shadow-sm animate-pulse",
        PlatformStatus::Connecting => "bg-blue-50 text-blue-700 border-blue-200 cursor-wait",
        PlatformStatus::Inactive => "bg-white text-gray-600 border-gray-300 hover:bg-gray-50 border-dashed",
    }
}

fn status_label(status: PlatformStatus) -> (&'static str, &'static str) {
    match status {
        PlatformStatus::Active => ("✅", "Connected"),
        PlatformStatus::Error => ("⚠️", "Fix Issue"),
        PlatformStatus::Connecting => ("⏳", "Linking..."),
        PlatformStatus::Inactive => ("📴", "Connect"),
    }
}

fn status_dot(status: PlatformStatus) -> &'static str {
    match status {
        PlatformStatus::Active => "bg-green-500",
        PlatformStatus::Error => "bg-red-500",
        PlatformStatus::Connecting => "bg-blue-500",
        PlatformStatus::Inactive => "bg-gray-300",
    }
}

fn sync_text_class(status: PlatformStatus) -> &'static str {
    match status {
        PlatformStatus::Error => "text-red-500 font-semibold",
        PlatformStatus::Connecting => "text-blue-500",
        _ => "text-gray-400",
    }
}

fn kind_icon(kind: GigKind) -> &'static str {
    match kind {
        GigKind::Ride => "🏍️",
        GigKind::Grocery => "🛍️",
        GigKind::Delivery => "📍",
    }
}

#[function_component(GigDashboard)]
pub fn gig_dashboard() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let gigs = use_gig_board(&wallet, config.platform_connect_delay_ms);
    let theme = wallet.theme();
    let money = |amount: f64| format_rupees(&config.currency_symbol, amount);

    let earnings = mock_earnings();
    let best = best_platform(&earnings);
    let simulate = gigs.actions.simulate_order.reform(|_: MouseEvent| ());

    html! {
        <div class="space-y-6 pb-20">
            <Header title="Unified Earnings" subtitle="Swiggy • Zomato • Uber • Rapido" {theme}>
                <button
                    onclick={simulate}
                    class={classes!("text-xs", "px-3", "py-2", "rounded-lg", "shadow-md", "active:scale-95", "transition-all", theme.primary_button)}
                >
                    {"＋ Test: Add Order"}
                </button>
            </Header>

            <div class="grid grid-cols-2 gap-3">
                <div class={classes!("p-4", "rounded-xl", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                    <p class="text-xs text-gray-400">{"Total Today"}</p>
                    <p class="text-2xl font-bold" style={format!("color: {}", theme.accent_color)}>
                        {money(gigs.board.todays_earnings())}
                    </p>
                    <p class="text-[10px] text-gray-400">{format!("{} orders • {} this week", gigs.board.orders().len(), money(weekly_total(&earnings)))}</p>
                </div>
                <div class={classes!("p-4", "rounded-xl", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                    <p class="text-xs text-gray-400">{"Best Platform"}</p>
                    <p class="text-lg font-bold text-orange-500">{best.map(|(name, _)| name).unwrap_or("-")}</p>
                    <p class="text-[10px] text-gray-400">{format!("{}% of income", best.map(|(_, share)| share).unwrap_or(0))}</p>
                </div>
            </div>

            <div class={classes!("p-4", "rounded-xl", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                <h3 class={classes!("font-semibold", "mb-3", "text-sm", "uppercase", "tracking-wide", theme.text_primary)}>
                    {"Platform Connections"}
                </h3>
                <div class="space-y-3">
                    {for gigs.board.platforms().iter().enumerate().map(|(index, platform)| {
                        let onclick = gigs.actions.connect.reform(move |_: MouseEvent| index);
                        let (icon, label) = status_label(platform.status);
                        let busy = matches!(platform.status, PlatformStatus::Active | PlatformStatus::Connecting);
                        html! {
                            <div key={platform.name.clone()} class="flex items-center justify-between p-3 rounded-lg border border-gray-100 bg-gray-50/50">
                                <div class="flex items-center gap-3">
                                    <div class={classes!("relative", "w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "text-white", "text-sm", "font-bold", "shadow-md", platform.color.clone())}>
                                        {platform.name.chars().next().map(String::from).unwrap_or_default()}
                                        <div class={classes!("absolute", "-bottom-0.5", "-right-0.5", "w-3.5", "h-3.5", "rounded-full", "border-2", "border-white", status_dot(platform.status))}></div>
                                    </div>
                                    <div>
                                        <p class={classes!("font-bold", "text-sm", theme.text_primary)}>{platform.name.clone()}</p>
                                        <p class={classes!("text-[10px]", sync_text_class(platform.status))}>{platform.last_sync.clone()}</p>
                                    </div>
                                </div>
                                <button
                                    {onclick}
                                    disabled={busy}
                                    class={classes!("flex", "items-center", "gap-2", "px-4", "py-2", "rounded-lg", "text-xs", "font-bold", "border", "transition-all", "active:scale-95", status_button_class(platform.status))}
                                >
                                    <span>{icon}</span>
                                    <span>{label}</span>
                                </button>
                            </div>
                        }
                    })}
                </div>
            </div>

            <div class={classes!("p-5", "rounded-xl", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                <h3 class={classes!("font-semibold", "mb-4", theme.text_primary)}>{"Earnings Breakdown"}</h3>
                <EarningsChart earnings={earnings.clone()} style={EarningsStyle::StackedBars} accent={theme.accent_color} />
            </div>

            <div class="space-y-4">
                <h3 class={classes!("font-semibold", "px-1", theme.text_primary)}>{"Recent Activity"}</h3>
                {for gigs.board.orders().iter().map(|order| html! {
                    <div key={order.id.to_string()} class={classes!("flex", "items-center", "justify-between", "p-4", "rounded-xl", "border", "shadow-sm", theme.bg_panel, theme.border)}>
                        <div class="flex items-center gap-4">
                            <div class={classes!("w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "shadow-sm", platform_color(&order.platform))}>
                                {kind_icon(order.kind)}
                            </div>
                            <div>
                                <p class={classes!("font-bold", "text-sm", theme.text_primary)}>{order.platform.clone()}</p>
                                <p class="text-xs text-gray-500">{order.description.clone()}</p>
                            </div>
                        </div>
                        <div class="text-right">
                            <p class={classes!("font-bold", "text-lg", theme.text_primary)}>{format!("+ {}", money(order.amount))}</p>
                            <p class="text-[10px] text-gray-400">{format!("🕒 {}", order.time)}</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
