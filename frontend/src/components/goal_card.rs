use shared::{SavingsGoal, Theme};
use steady_domain::{format_rupees, progress_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
    pub goal: SavingsGoal,
    pub theme: &'static Theme,
    pub currency_symbol: String,
}

/// Progress card for one savings goal
#[function_component(GoalCard)]
pub fn goal_card(props: &GoalCardProps) -> Html {
    let goal = &props.goal;
    let theme = props.theme;
    let progress = progress_percent(goal);
    // First class of the primary button is its background colour
    let bar_class = theme.primary_button.split_whitespace().next().unwrap_or("bg-gray-400");

    html! {
        <div class={classes!("p-5", "rounded-2xl", "shadow-sm", "border", "transition-all", "hover:shadow-md", theme.bg_panel, theme.border)}>
            <div class="flex justify-between items-start mb-4">
                <div class="flex items-center gap-3">
                    <div class={classes!("p-3", "rounded-xl", "bg-gray-50", "text-2xl", goal.color.clone())}>
                        {goal.icon.emoji()}
                    </div>
                    <div>
                        <h3 class={classes!("font-bold", theme.text_primary)}>{goal.name.clone()}</h3>
                        <p class="text-xs text-gray-400">{goal.deadline.clone().unwrap_or_default()}</p>
                    </div>
                </div>
                <span class={classes!("text-xl", "font-bold", theme.text_primary)}>{format!("{}%", progress)}</span>
            </div>

            <div class="w-full bg-gray-100 h-3 rounded-full overflow-hidden mb-2">
                <div
                    class={classes!("h-full", "rounded-full", "transition-all", "duration-1000", bar_class)}
                    style={format!("width: {}%", progress)}
                ></div>
            </div>

            <div class="flex justify-between text-xs font-medium">
                <span class={theme.text_secondary}>{format!("Saved: {}", format_rupees(&props.currency_symbol, goal.current))}</span>
                <span class="text-gray-400">{format!("Target: {}", format_rupees(&props.currency_symbol, goal.target))}</span>
            </div>
        </div>
    }
}
