pub mod chat;
pub mod dashboard;
pub mod expenses;
pub mod gig_dashboard;
pub mod predictions;
pub mod savings;
pub mod shadow_wallet;
pub mod smart_modes;

pub use chat::Chat;
pub use dashboard::Dashboard;
pub use expenses::Expenses;
pub use gig_dashboard::GigDashboard;
pub use predictions::Predictions;
pub use savings::Savings;
pub use shadow_wallet::ShadowWallet;
pub use smart_modes::SmartModes;
