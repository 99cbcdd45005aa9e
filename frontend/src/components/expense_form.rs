use shared::{MoneyManagementConfig, Theme};
use steady_domain::MoneyManagementService;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::services::Logger;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub theme: &'static Theme,
    pub config: MoneyManagementConfig,
    /// Emits (category, amount) once the entry passes validation
    pub on_add: Callback<(String, f64)>,
}

#[derive(Clone, Default, PartialEq)]
struct FormFeedback {
    error: Option<String>,
    suggestions: Vec<String>,
    success: bool,
}

/// Custom expense entry validated with the money form rules
#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let feedback = use_state(FormFeedback::default);
    let theme = props.theme;

    let onsubmit = {
        let feedback = feedback.clone();
        let on_add = props.on_add.clone();
        let service = MoneyManagementService::with_config(props.config.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let form_data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(_) => {
                    Logger::error_with_component("expense-form", "Could not read form data");
                    return;
                }
            };
            let category = form_data.get("expense-category").as_string().unwrap_or_default();
            let amount_input = form_data.get("expense-amount").as_string().unwrap_or_default();

            let validation = service.validate_expense_form(&category, &amount_input);
            match validation.cleaned_amount.filter(|_| validation.is_valid) {
                Some(amount) => {
                    Logger::info_with_component(
                        "expense-form",
                        &format!("Adding expense {} for {}", category.trim(), service.format_amount(amount)),
                    );
                    on_add.emit((category.trim().to_string(), amount));
                    form.reset();
                    feedback.set(FormFeedback {
                        success: true,
                        ..FormFeedback::default()
                    });
                }
                None => {
                    Logger::debug_with_component("expense-form", "Expense entry failed validation");
                    feedback.set(FormFeedback {
                        error: service.get_first_error_message(&validation.errors),
                        suggestions: validation.suggestions,
                        success: false,
                    });
                }
            }
        })
    };

    html! {
        <section class={classes!("p-4", "rounded-xl", "border", "space-y-3", theme.bg_panel, theme.border)}>
            <h3 class={classes!("font-bold", "text-sm", theme.text_primary)}>{"Add Expense"}</h3>

            if let Some(error) = feedback.error.as_ref() {
                <div class="text-xs text-red-600 bg-red-50 rounded-lg p-2">{error}</div>
            }
            if !feedback.suggestions.is_empty() {
                <ul class="text-[11px] text-gray-500 list-disc pl-4">
                    {for feedback.suggestions.iter().map(|suggestion| html! { <li>{suggestion}</li> })}
                </ul>
            }
            if feedback.success {
                <div class="text-xs text-green-700 bg-green-50 rounded-lg p-2">{"Expense recorded"}</div>
            }

            <form class="flex gap-2" {onsubmit}>
                <input
                    name="expense-category"
                    type="text"
                    placeholder="What for?"
                    class="flex-1 min-w-0 p-2 rounded-lg bg-gray-50 border border-gray-200 text-sm"
                />
                <input
                    name="expense-amount"
                    type="text"
                    inputmode="decimal"
                    placeholder={format!("{}0", props.config.currency_symbol)}
                    class="w-24 p-2 rounded-lg bg-gray-50 border border-gray-200 text-sm"
                />
                <button type="submit" class={classes!("px-3", "rounded-lg", "text-sm", "font-semibold", theme.primary_button)}>
                    {"Add"}
                </button>
            </form>
        </section>
    }
}
