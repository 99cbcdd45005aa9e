//! Seed data the dashboard starts from. Nothing is persisted, so every
//! reload begins from these values.

use shared::{
    DailyEarning, ExpenseSlice, GigKind, GigOrder, GigPlatform, GoalIcon, PlatformStatus,
    PredictionPoint, SavingsGoal, Transaction, TransactionType, VaultBucket,
};

pub const INITIAL_TOTAL_BALANCE: f64 = 12450.0;
/// Locked for rent and bills
pub const INITIAL_SHADOW_BALANCE: f64 = 8200.0;

pub const SYSTEM_INSTRUCTION: &str = "You are THESTEADY, an empathetic, smart AI financial coach for gig economy workers (Swiggy, Zomato, Uber drivers) in India.
Your goal is to help them manage volatile daily income.
Core Concept: \"Shadow Wallet\". You encourage users to \"lock\" money for rent/bills so they only see \"spendable\" money.
Modes:
1. Survival Mode: Cash is tight. Strict limits.
2. Stability Mode: Normal operations.
3. Growth Mode: High earnings, aggressive saving.
4. Joy Mode: Surplus available, user can enjoy.

Keep answers short, encouraging, and actionable. Use emojis. If asked about earnings, refer to the data provided in context.";

pub const WELCOME_MESSAGE: &str =
    "Hey! I'm THESTEADY. I noticed your earnings were great yesterday! Should we move ₹500 to your Shadow Wallet?";

pub const QUICK_PROMPTS: [&str; 4] = [
    "Switch to Joy Mode?",
    "Can I spend ₹200?",
    "Show predictions",
    "Why is money locked?",
];

/// One-tap expense buttons: (category, amount)
pub const QUICK_EXPENSES: [(&str, f64); 3] = [("Fuel", 100.0), ("Food", 80.0), ("Repair", 250.0)];

pub fn mock_earnings() -> Vec<DailyEarning> {
    [
        ("Mon", 450.0, 300.0, 200.0, 100.0),
        ("Tue", 500.0, 400.0, 150.0, 50.0),
        ("Wed", 300.0, 350.0, 300.0, 100.0),
        ("Thu", 600.0, 500.0, 100.0, 150.0),
        ("Fri", 800.0, 700.0, 200.0, 200.0),
        ("Sat", 1200.0, 900.0, 300.0, 300.0),
        ("Sun", 1100.0, 850.0, 400.0, 250.0),
    ]
    .into_iter()
    .map(|(day, swiggy, zomato, uber, rapido)| DailyEarning {
        day: day.to_string(),
        swiggy,
        zomato,
        uber,
        rapido,
        total: swiggy + zomato + uber + rapido,
    })
    .collect()
}

pub fn recent_transactions() -> Vec<Transaction> {
    let tx = |id: &str, amount: f64, category: &str, transaction_type, platform: Option<&str>| Transaction {
        id: id.to_string(),
        amount,
        category: category.to_string(),
        date: "Today".to_string(),
        transaction_type,
        platform: platform.map(str::to_string),
    };

    vec![
        tx("1", 250.0, "Fuel", TransactionType::Expense, None),
        tx("2", 850.0, "Swiggy Pay", TransactionType::Income, Some("Swiggy")),
        tx("3", 120.0, "Lunch", TransactionType::Expense, None),
        tx("4", 50.0, "Tea/Snacks", TransactionType::Expense, None),
    ]
}

pub fn prediction_data() -> Vec<PredictionPoint> {
    [
        ("Tue", Some(1100.0), 1150.0),
        ("Wed", Some(1050.0), 1000.0),
        ("Thu", Some(1350.0), 1400.0),
        ("Fri", Some(1900.0), 2100.0),
        ("Sat", Some(2700.0), 2900.0),
        ("Sun", Some(2600.0), 2500.0),
        ("Mon", None, 1200.0),
    ]
    .into_iter()
    .map(|(day, actual, predicted)| PredictionPoint {
        day: day.to_string(),
        actual,
        predicted,
    })
    .collect()
}

pub fn gig_history() -> Vec<GigOrder> {
    [
        (101, "Swiggy", GigKind::Delivery, "Lunch Delivery • 4.2 km", "2:30 PM", 85.0),
        (102, "Uber", GigKind::Ride, "Airport Drop • 18 km", "1:15 PM", 420.0),
        (103, "Zomato", GigKind::Delivery, "Snack Order • 2.1 km", "12:45 PM", 65.0),
        (104, "Rapido", GigKind::Ride, "Metro Drop • 3.5 km", "12:10 PM", 45.0),
        (105, "Swiggy", GigKind::Grocery, "Instamart • 12 items", "11:30 AM", 120.0),
    ]
    .into_iter()
    .map(|(id, platform, kind, description, time, amount)| GigOrder {
        id,
        platform: platform.to_string(),
        kind,
        description: description.to_string(),
        time: time.to_string(),
        amount,
        status: "Completed".to_string(),
    })
    .collect()
}

pub fn gig_platforms() -> Vec<GigPlatform> {
    [
        ("Swiggy", PlatformStatus::Active, "Synced 1 min ago", "bg-orange-500"),
        ("Zomato", PlatformStatus::Active, "Synced 5 mins ago", "bg-red-500"),
        ("Uber", PlatformStatus::Error, "Login Expired", "bg-black"),
        ("Rapido", PlatformStatus::Inactive, "Not Connected", "bg-yellow-400"),
    ]
    .into_iter()
    .map(|(name, status, last_sync, color)| GigPlatform {
        name: name.to_string(),
        status,
        last_sync: last_sync.to_string(),
        color: color.to_string(),
    })
    .collect()
}

pub fn vault_buckets() -> Vec<VaultBucket> {
    [
        ("Rent", 6000.0, 8000.0, "🏠", "bg-blue-500"),
        ("Bike EMI", 2200.0, 2200.0, "🏍️", "bg-purple-500"),
        ("Grocery", 1500.0, 3000.0, "🛒", "bg-orange-500"),
        ("Emergency", 500.0, 5000.0, "💊", "bg-red-500"),
    ]
    .into_iter()
    .map(|(label, amount, target, icon, color_class)| VaultBucket {
        label: label.to_string(),
        amount,
        target,
        icon: icon.to_string(),
        color_class: color_class.to_string(),
    })
    .collect()
}

pub fn savings_goals() -> Vec<SavingsGoal> {
    vec![
        SavingsGoal {
            id: "1".to_string(),
            name: "New Bike".to_string(),
            target: 85000.0,
            current: 28500.0,
            icon: GoalIcon::Bike,
            deadline: Some("45 days left".to_string()),
            color: "text-blue-500".to_string(),
        },
        SavingsGoal {
            id: "2".to_string(),
            name: "Emergency Fund".to_string(),
            target: 10000.0,
            current: 8200.0,
            icon: GoalIcon::Target,
            deadline: Some("Always Active".to_string()),
            color: "text-red-500".to_string(),
        },
    ]
}

pub fn expense_breakdown() -> Vec<ExpenseSlice> {
    [("Fuel", 250.0, "#ef4444"), ("Food", 170.0, "#f59e0b"), ("Other", 50.0, "#94a3b8")]
        .into_iter()
        .map(|(name, value, color)| ExpenseSlice {
            name: name.to_string(),
            value,
            color: color.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_visible_balance_matches_seed() {
        assert_eq!(INITIAL_TOTAL_BALANCE - INITIAL_SHADOW_BALANCE, 4250.0);
    }

    #[test]
    fn test_earning_totals_match_published_figures() {
        let totals: Vec<f64> = mock_earnings().iter().map(|day| day.total).collect();
        assert_eq!(totals, vec![1050.0, 1100.0, 1050.0, 1350.0, 1900.0, 2700.0, 2600.0]);
    }

    #[test]
    fn test_only_last_prediction_is_forecast_only() {
        let data = prediction_data();
        let (last, history) = data.split_last().unwrap();
        assert!(last.actual.is_none());
        assert_eq!(last.day, "Mon");
        assert!(history.iter().all(|point| point.actual.is_some()));
    }

    #[test]
    fn test_recent_transactions_mix_income_and_expense() {
        let transactions = recent_transactions();
        assert_eq!(transactions.iter().filter(|tx| tx.is_expense()).count(), 3);
        assert_eq!(transactions[1].platform.as_deref(), Some("Swiggy"));
    }
}
