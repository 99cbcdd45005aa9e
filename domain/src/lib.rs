//! # Domain
//!
//! Business rules for the THESTEADY gig-worker dashboard.
//!
//! Everything here is plain Rust with no browser dependencies, so the rules
//! can be exercised natively while the Yew frontend only handles
//! presentation and event wiring.
//!
//! ## Module Organization
//!
//! - **wallet_service**: total/shadow balances, the 30% auto-lock rule and the lock flag
//! - **theme_service**: static mode to theme/limit lookup
//! - **money_management**: amount parsing and form validation
//! - **prediction_service**: next-day income forecast and shortfall plan
//! - **gig_service**: platform connections and simulated orders
//! - **vault_service**: emergency unlock confirmation flow and vault compartments
//! - **savings_service**: local savings goals
//! - **expense_service**: local expense ledger and spending breakdown
//! - **chat_service** / **gemini**: the coach chat session and its text-generation bridge
//! - **navigation**: view routes with catch-all fallback
//! - **config**: dashboard configuration loaded from YAML
//! - **mock_data**: seed data the dashboard starts from
//!
//! ## Business Rules
//!
//! - New income locks 30% of its amount into the shadow balance
//! - Expenses reduce the total balance only; balances may go negative
//! - Locking never changes balances, only what is displayed as spendable
//! - Modes are presentation presets; their limits are shown, never enforced
//! - Amounts must be finite and positive

pub mod chat_service;
pub mod config;
pub mod expense_service;
pub mod gemini;
pub mod gig_service;
pub mod mock_data;
pub mod money_management;
pub mod navigation;
pub mod prediction_service;
pub mod savings_service;
pub mod theme_service;
pub mod vault_service;
pub mod wallet_service;

pub use chat_service::*;
pub use config::*;
pub use expense_service::*;
pub use gig_service::*;
pub use money_management::*;
pub use navigation::*;
pub use prediction_service::*;
pub use savings_service::*;
pub use theme_service::*;
pub use vault_service::*;
pub use wallet_service::*;
