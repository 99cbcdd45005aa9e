pub mod add_goal_modal;
pub mod charts;
pub mod expense_form;
pub mod goal_card;
pub mod header;
pub mod navigation;
pub mod unlock_modal;

pub use add_goal_modal::AddGoalModal;
pub use charts::{EarningsChart, EarningsStyle, ForecastChart};
pub use expense_form::ExpenseForm;
pub use goal_card::GoalCard;
pub use header::Header;
pub use navigation::Navigation;
pub use unlock_modal::UnlockModal;
