use shared::ExpenseSlice;
use steady_domain::mock_data::{expense_breakdown, QUICK_EXPENSES};
use steady_domain::{category_icon, format_rupees, slice_percentages, ExpenseLedger, ThemeService};
use yew::prelude::*;

use crate::components::ExpenseForm;
use crate::hooks::{use_config, use_wallet, WalletAction};
use crate::services::date_utils::now_millis;

/// `conic-gradient` stops for the spending donut
fn donut_gradient(slices: &[ExpenseSlice]) -> String {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return "conic-gradient(#e5e7eb 0 100%)".to_string();
    }

    let mut start = 0.0;
    let stops: Vec<String> = slices
        .iter()
        .map(|slice| {
            let end = start + slice.value / total * 100.0;
            let stop = format!("{} {:.1}% {:.1}%", slice.color, start, end);
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

fn quick_hover(category: &str) -> &'static str {
    match category {
        "Fuel" => "hover:bg-red-50 hover:border-red-100",
        "Food" => "hover:bg-orange-50 hover:border-orange-100",
        _ => "hover:bg-gray-50 hover:border-gray-200",
    }
}

#[function_component(Expenses)]
pub fn expenses() -> Html {
    let wallet = use_wallet();
    let config = use_config();
    let ledger = use_state(ExpenseLedger::default);
    let theme = wallet.theme();
    let money = |amount: f64| format_rupees(&config.currency_symbol, amount);

    let add_expense = {
        let ledger = ledger.clone();
        let wallet = wallet.clone();
        Callback::from(move |(category, amount): (String, f64)| {
            let mut next = (*ledger).clone();
            next.add_expense(&category, amount, now_millis());
            ledger.set(next);
            wallet.dispatch(WalletAction::RecordExpense(amount));
        })
    };

    let breakdown = expense_breakdown();
    let shares = slice_percentages(&breakdown);
    let daily_limit = ThemeService::profile_for(wallet.wallet.mode()).daily_limit;

    html! {
        <div class="space-y-6 pb-20">
            <div class="flex justify-between items-center">
                <h1 class={classes!("text-2xl", "font-bold", theme.text_primary)}>{"Spending"}</h1>
                <p class={classes!("text-xs", theme.text_secondary)}>{format!("Today's Limit: {}", money(daily_limit))}</p>
            </div>

            <div class="flex gap-4">
                <div class={classes!("w-1/2", "h-40", "p-2", "rounded-xl", "shadow-sm", "border", "flex", "items-center", "justify-center", theme.bg_panel, theme.border)}>
                    <div class="relative w-28 h-28 rounded-full" style={format!("background: {}", donut_gradient(&breakdown))}>
                        <div class="absolute inset-[18px] rounded-full bg-white flex items-center justify-center">
                            <span class="text-xs font-bold text-gray-600">{money(ledger.total_spent())}</span>
                        </div>
                    </div>
                </div>
                <div class="w-1/2 space-y-2 py-2">
                    {for breakdown.iter().zip(shares.iter()).map(|(slice, (_, percent))| html! {
                        <div key={slice.name.clone()} class="flex items-center gap-2 text-sm">
                            <div class="w-3 h-3 rounded-full" style={format!("background-color: {}", slice.color)} />
                            <span class="text-gray-600">{slice.name.clone()}</span>
                            <span class="text-[10px] text-gray-400">{format!("{}%", percent)}</span>
                            <span class={classes!("font-bold", "ml-auto", theme.text_primary)}>{money(slice.value)}</span>
                        </div>
                    })}
                </div>
            </div>

            <div class="space-y-2">
                <h3 class={classes!("font-bold", "text-sm", "px-1", theme.text_primary)}>{"Quick Add (Test)"}</h3>
                <div class="flex gap-3 overflow-x-auto pb-2 scrollbar-hide">
                    {for QUICK_EXPENSES.iter().map(|&(category, amount)| {
                        let onclick = add_expense.reform(move |_: MouseEvent| (category.to_string(), amount));
                        html! {
                            <button
                                key={category}
                                {onclick}
                                class={classes!(
                                    "flex", "flex-col", "items-center", "gap-1", "p-3", "min-w-[80px]", "rounded-xl", "border", "border-gray-200",
                                    "bg-white", "shadow-sm", "active:scale-95", "transition-all", quick_hover(category)
                                )}
                            >
                                <span class="text-xl">{category_icon(category)}</span>
                                <span class="text-xs font-medium text-gray-700">{format!("{} {}", category, money(amount))}</span>
                            </button>
                        }
                    })}
                </div>
            </div>

            <ExpenseForm {theme} config={config.money.clone()} on_add={add_expense.clone()} />

            <h3 class={classes!("font-bold", "mt-4", theme.text_primary)}>{"Recent Transactions"}</h3>
            <div class="space-y-3">
                {for ledger.expenses().map(|tx| html! {
                    <div key={tx.id.clone()} class={classes!("p-4", "rounded-xl", "border", "flex", "justify-between", "items-center", theme.bg_panel, theme.border)}>
                        <div class="flex items-center gap-3">
                            <div class="p-2 bg-red-50 rounded-lg text-red-500">{category_icon(&tx.category)}</div>
                            <div>
                                <p class={classes!("font-semibold", theme.text_primary)}>{tx.category.clone()}</p>
                                <p class="text-xs text-gray-400">{tx.date.clone()}</p>
                            </div>
                        </div>
                        <p class="font-bold text-red-600">{format!("- {}", money(tx.amount))}</p>
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donut_gradient_covers_full_circle() {
        let gradient = donut_gradient(&expense_breakdown());

        assert!(gradient.starts_with("conic-gradient(#ef4444 0.0% "));
        assert!(gradient.ends_with("#94a3b8 89.4% 100.0%)"));
    }

    #[test]
    fn test_donut_gradient_empty_breakdown() {
        assert_eq!(donut_gradient(&[]), "conic-gradient(#e5e7eb 0 100%)");
    }
}
