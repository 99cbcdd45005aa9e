use steady_domain::mock_data::prediction_data;
use steady_domain::{format_rupees, PredictionService};
use yew::prelude::*;

use crate::components::{ForecastChart, Header};
use crate::hooks::{use_config, use_wallet};

#[function_component(Predictions)]
pub fn predictions() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let theme = wallet.theme();
    let money = |amount: f64| format_rupees(&config.currency_symbol, amount);

    let service = PredictionService::new(config.daily_target);
    let points = prediction_data();
    let plan = service.next_day_plan(&points).filter(|plan| plan.is_shortfall);
    let on_target = service.days_on_target(&points);

    html! {
        <div class="space-y-6 pb-20">
            <Header title="Income Forecast" subtitle="AI-powered earning predictions" {theme}>
                <div class={classes!("px-3", "py-1", "rounded-lg", "border", "bg-white", "text-xs", "font-semibold", theme.border)}>
                    {format!("🎯 Goal: {}/day", money(service.daily_target()))}
                </div>
            </Header>

            <div class={classes!("p-5", "rounded-xl", "shadow-sm", "border", theme.bg_panel, theme.border)}>
                <div class="flex justify-between items-center mb-4">
                    <h3 class={classes!("font-semibold", theme.text_primary)}>{"7-Day Trend"}</h3>
                    <div class="flex items-center gap-3 text-[10px] font-medium text-gray-400">
                        <span class="flex items-center gap-1"><div class="w-2 h-2 rounded-full bg-gray-300"></div>{"Actual"}</span>
                        <span class="flex items-center gap-1">
                            <div class="w-2 h-2 rounded-full" style={format!("background: {}", theme.accent_color)}></div>{"Predicted"}
                        </span>
                    </div>
                </div>
                <ForecastChart points={points.clone()} daily_target={service.daily_target()} accent={theme.accent_color} />

                <div class="mt-4 grid grid-cols-7 gap-1 text-center">
                    {for points.iter().map(|point| {
                        let day = service.compare(point);
                        html! {
                            <div key={day.day.clone()} class="text-[10px]">
                                <p class="text-gray-400">{day.day.clone()}</p>
                                <p class={if day.is_above { "font-bold text-green-600" } else { "font-bold text-red-500" }}>
                                    {format!("{}{}", if day.is_above { "+" } else { "" }, day.diff)}
                                </p>
                            </div>
                        }
                    })}
                </div>
                <p class="mt-2 text-[10px] text-gray-400">{format!("Target met on {} of the last {} days", on_target, points.len().saturating_sub(1))}</p>
            </div>

            if let Some(plan) = plan {
                <div class="space-y-3">
                    <h3 class={classes!("font-bold", "pl-1", theme.text_primary)}>{format!("Bridge the Gap ({})", plan.day)}</h3>
                    <div class={classes!("p-5", "rounded-2xl", "border-l-4", "border-l-orange-500", "shadow-sm", theme.bg_panel, theme.border)}>
                        <div class="flex justify-between items-start mb-4">
                            <div>
                                <p class="text-xs text-gray-500 font-medium uppercase tracking-wide">{"Shortfall Predicted"}</p>
                                <p class="text-2xl font-bold text-orange-500">{money(plan.gap)}</p>
                            </div>
                            <div class="p-2 bg-orange-100 text-orange-600 rounded-lg">{"📈"}</div>
                        </div>

                        <p class="text-sm text-gray-700 font-medium mb-3">
                            {format!("To hit your {} goal, choose one:", money(service.daily_target()))}
                        </p>

                        <div class="grid grid-cols-2 gap-3">
                            <div class="bg-orange-50 p-3 rounded-xl border border-orange-100 flex items-center gap-3">
                                <div class="bg-white p-2 rounded-full shadow-sm text-orange-500">{"🏍️"}</div>
                                <div>
                                    <p class="font-bold text-gray-800 text-lg">{plan.extra_deliveries}</p>
                                    <p class="text-[10px] text-gray-500 leading-tight">{"Extra"}<br/>{"Deliveries"}</p>
                                </div>
                            </div>
                            <div class="bg-gray-50 p-3 rounded-xl border border-gray-100 flex items-center gap-3">
                                <div class="bg-white p-2 rounded-full shadow-sm text-gray-600">{"🚗"}</div>
                                <div>
                                    <p class="font-bold text-gray-800 text-lg">{plan.extra_rides}</p>
                                    <p class="text-[10px] text-gray-500 leading-tight">{"Extra Rides"}<br/>{"(Peak)"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                <div class="bg-red-50 p-4 rounded-xl border border-red-100 flex items-start gap-3">
                    <div class="bg-white p-1.5 rounded-lg shadow-sm text-red-500 mt-1">{"⚠️"}</div>
                    <div>
                        <p class="font-bold text-gray-800 text-sm">{"Low Demand Warning"}</p>
                        <p class="text-xs text-gray-600 mt-1">{"Wednesdays are typically slow. Expect 20% less orders between 2PM - 5PM."}</p>
                    </div>
                </div>
                <div class="bg-green-50 p-4 rounded-xl border border-green-100 flex items-start gap-3">
                    <div class="bg-white p-1.5 rounded-lg shadow-sm text-green-500 mt-1">{"↗️"}</div>
                    <div>
                        <p class="font-bold text-gray-800 text-sm">{"Surge Opportunity"}</p>
                        <p class="text-xs text-gray-600 mt-1">{"Heavy rain predicted for Friday evening. Uber surge pricing likely 1.5x."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
