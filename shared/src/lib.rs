use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Spending preset selected by the worker. Drives theming and the displayed
/// daily limit; it never changes balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppMode {
    Survival,
    Stability,
    Growth,
    Joy,
}

impl AppMode {
    /// All modes in display order
    pub const ALL: [AppMode; 4] = [
        AppMode::Survival,
        AppMode::Stability,
        AppMode::Growth,
        AppMode::Joy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AppMode::Survival => "Survival",
            AppMode::Stability => "Stability",
            AppMode::Growth => "Growth",
            AppMode::Joy => "Joy",
        }
    }
}

impl Default for AppMode {
    fn default() -> Self {
        AppMode::Stability
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AppMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AppMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModeParseError(wanted.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModeParseError(pub String);

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown mode: {}", self.0)
    }
}

impl std::error::Error for ModeParseError {}

/// Visual tokens for a mode. Values are utility class names, except
/// `accent_color` which is a hex colour used by the canvas charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub base_color: &'static str,
    pub bg_app: &'static str,
    pub bg_panel: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub accent_color: &'static str,
    pub primary_button: &'static str,
    pub secondary_button: &'static str,
    pub border: &'static str,
    pub icon_bg: &'static str,
    pub nav_active: &'static str,
    pub nav_inactive: &'static str,
}

/// Limits and copy shown for a mode on the Smart Modes screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeProfile {
    pub color: &'static str,
    pub description: &'static str,
    /// Daily spending limit in rupees (displayed, never enforced)
    pub daily_limit: f64,
    /// Shadow lock rate shown on the mode card, in percent
    pub lock_rate_percent: u8,
}

/// Derived view of the wallet handed to the UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub total_balance: f64,
    /// Shadow balance as displayed: zero while the wallet is unlocked
    pub shadow_balance: f64,
    pub visible_balance: f64,
    pub is_unlocked: bool,
    pub mode: AppMode,
}

/// Transaction ID in format: "transaction::<income|expense>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Always positive; direction comes from `transaction_type`
    pub amount: f64,
    /// e.g. "Fuel", "Food", "Swiggy Pay"
    pub category: String,
    /// Human label such as "Today" or "Just Now"
    pub date: String,
    pub transaction_type: TransactionType,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    fn as_id_segment(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Transaction {
    /// Generate transaction ID from type and timestamp
    pub fn generate_id(transaction_type: TransactionType, epoch_millis: u64) -> String {
        format!("transaction::{}::{}", transaction_type.as_id_segment(), epoch_millis)
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// One day of earnings split by platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEarning {
    pub day: String,
    pub swiggy: f64,
    pub zomato: f64,
    pub uber: f64,
    pub rapido: f64,
    pub total: f64,
}

/// A point on the income forecast chart. `actual` is empty for forecast-only days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub day: String,
    pub actual: Option<f64>,
    pub predicted: f64,
}

impl PredictionPoint {
    /// The value shown for this day: the actual figure when known
    pub fn value(&self) -> f64 {
        self.actual.unwrap_or(self.predicted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GigKind {
    Delivery,
    Ride,
    Grocery,
}

impl GigKind {
    pub const ALL: [GigKind; 3] = [GigKind::Delivery, GigKind::Ride, GigKind::Grocery];

    pub fn label(&self) -> &'static str {
        match self {
            GigKind::Delivery => "delivery",
            GigKind::Ride => "ride",
            GigKind::Grocery => "grocery",
        }
    }
}

/// A completed gig shown in the activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigOrder {
    pub id: u64,
    pub platform: String,
    pub kind: GigKind,
    pub description: String,
    pub time: String,
    pub amount: f64,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformStatus {
    Active,
    Inactive,
    Error,
    Connecting,
}

/// Connection card for a gig platform account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigPlatform {
    pub name: String,
    pub status: PlatformStatus,
    pub last_sync: String,
    pub color: String,
}

/// A compartment of the shadow vault (rent, EMI, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultBucket {
    pub label: String,
    pub amount: f64,
    pub target: f64,
    pub icon: String,
    pub color_class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalIcon {
    Bike,
    Target,
    Trophy,
    Smartphone,
    Home,
    Plane,
}

impl GoalIcon {
    pub fn emoji(&self) -> &'static str {
        match self {
            GoalIcon::Bike => "🏍️",
            GoalIcon::Target => "🎯",
            GoalIcon::Trophy => "🏆",
            GoalIcon::Smartphone => "📱",
            GoalIcon::Home => "🏠",
            GoalIcon::Plane => "✈️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub icon: GoalIcon,
    pub deadline: Option<String>,
    pub color: String,
}

impl SavingsGoal {
    pub fn generate_id() -> String {
        format!("goal::{}", Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp,
        }
    }
}

/// Slice of the spending breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Form validation result specific to money management
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoneyFormValidation {
    pub is_valid: bool,
    pub errors: Vec<MoneyValidationError>,
    pub cleaned_amount: Option<f64>,
    pub suggestions: Vec<String>,
}

/// Specific validation errors for money forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MoneyValidationError {
    EmptyDescription,
    DescriptionTooLong(usize),
    EmptyAmount,
    InvalidAmountFormat(String),
    AmountNotPositive,
    AmountTooSmall(f64),
    AmountTooLarge(f64),
    AmountPrecisionTooHigh,
}

/// Configuration for money management forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MoneyManagementConfig {
    pub max_description_length: usize,
    pub min_amount: f64,
    pub max_amount: f64,
    pub currency_symbol: String,
}

impl Default for MoneyManagementConfig {
    fn default() -> Self {
        Self {
            max_description_length: 64,
            min_amount: 1.0,
            max_amount: 100_000.0,
            currency_symbol: "₹".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_transaction_id() {
        let income_id = Transaction::generate_id(TransactionType::Income, 1702516122000);
        assert_eq!(income_id, "transaction::income::1702516122000");

        let expense_id = Transaction::generate_id(TransactionType::Expense, 1702516125000);
        assert_eq!(expense_id, "transaction::expense::1702516125000");
    }

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        assert_eq!("joy".parse::<AppMode>().unwrap(), AppMode::Joy);
        assert_eq!(" SURVIVAL ".parse::<AppMode>().unwrap(), AppMode::Survival);
        assert!("Chaos".parse::<AppMode>().is_err());
    }

    #[test]
    fn test_mode_display_matches_name() {
        for mode in AppMode::ALL {
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(AppMode::default(), AppMode::Stability);
    }

    #[test]
    fn test_prediction_point_value_prefers_actual() {
        let historic = PredictionPoint { day: "Tue".into(), actual: Some(1100.0), predicted: 1150.0 };
        let forecast = PredictionPoint { day: "Mon".into(), actual: None, predicted: 1200.0 };
        assert_eq!(historic.value(), 1100.0);
        assert_eq!(forecast.value(), 1200.0);
    }

    #[test]
    fn test_chat_messages_get_unique_ids() {
        let now = Utc::now();
        let a = ChatMessage::new(ChatRole::User, "hi", now);
        let b = ChatMessage::new(ChatRole::User, "hi", now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, "hi");
    }

    #[test]
    fn test_wallet_snapshot_serializes_mode_by_name() {
        let snapshot = WalletSnapshot {
            total_balance: 12450.0,
            shadow_balance: 8200.0,
            visible_balance: 4250.0,
            is_unlocked: false,
            mode: AppMode::Growth,
        };
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["mode"], "Growth");
        assert_eq!(json["visible_balance"], 4250.0);
    }
}
