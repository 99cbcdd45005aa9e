//! Local expense ledger for the Expenses view.
//!
//! The ledger only keeps the list the view renders. Debiting the wallet is
//! done by the caller with the returned transaction's amount.

use log::info;
use shared::{ExpenseSlice, Transaction, TransactionType};

use crate::mock_data::recent_transactions;

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLedger {
    transactions: Vec<Transaction>,
}

impl ExpenseLedger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Record a new expense at the top of the list. Two expenses added in the
    /// same millisecond get consecutive stamps so ids stay unique.
    pub fn add_expense(&mut self, category: &str, amount: f64, epoch_millis: u64) -> Transaction {
        let mut stamp = epoch_millis;
        let mut id = Transaction::generate_id(TransactionType::Expense, stamp);
        while self.transactions.iter().any(|tx| tx.id == id) {
            stamp += 1;
            id = Transaction::generate_id(TransactionType::Expense, stamp);
        }

        let transaction = Transaction {
            id,
            amount,
            category: category.trim().to_string(),
            date: "Just Now".to_string(),
            transaction_type: TransactionType::Expense,
            platform: None,
        };

        info!("Ledger expense {} for {:.2}", transaction.category, amount);
        self.transactions.insert(0, transaction.clone());
        transaction
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Expense transactions only, newest first
    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|tx| tx.is_expense())
    }

    pub fn total_spent(&self) -> f64 {
        self.expenses().map(|tx| tx.amount).sum()
    }

    pub fn total_income(&self) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| !tx.is_expense())
            .map(|tx| tx.amount)
            .sum()
    }
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new(recent_transactions())
    }
}

/// Icon shown next to an expense row
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Fuel" => "⛽",
        "Food" | "Lunch" | "Tea/Snacks" => "☕",
        "Repair" => "🔧",
        _ => "🛍️",
    }
}

/// Share of each slice in whole percent, in input order
pub fn slice_percentages(slices: &[ExpenseSlice]) -> Vec<(String, u32)> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    slices
        .iter()
        .map(|slice| {
            let percent = if total > 0.0 {
                (slice.value / total * 100.0).round() as u32
            } else {
                0
            };
            (slice.name.clone(), percent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::expense_breakdown;

    #[test]
    fn test_seed_ledger_filters_expenses() {
        let ledger = ExpenseLedger::default();

        let categories: Vec<&str> = ledger.expenses().map(|tx| tx.category.as_str()).collect();

        assert_eq!(categories, vec!["Fuel", "Lunch", "Tea/Snacks"]);
        assert_eq!(ledger.total_spent(), 420.0);
        assert_eq!(ledger.total_income(), 850.0);
    }

    #[test]
    fn test_add_expense_prepends() {
        let mut ledger = ExpenseLedger::default();

        let tx = ledger.add_expense("Repair", 250.0, 1702516122000);

        assert_eq!(tx.id, "transaction::expense::1702516122000");
        assert_eq!(tx.date, "Just Now");
        assert_eq!(ledger.transactions()[0], tx);
        assert_eq!(ledger.total_spent(), 670.0);
    }

    #[test]
    fn test_same_millisecond_expenses_get_distinct_ids() {
        let mut ledger = ExpenseLedger::default();

        let first = ledger.add_expense("Fuel", 100.0, 1702516122000);
        let second = ledger.add_expense("Food", 60.0, 1702516122000);
        let third = ledger.add_expense("Food", 20.0, 1702516122000);

        assert_eq!(first.id, "transaction::expense::1702516122000");
        assert_eq!(second.id, "transaction::expense::1702516122001");
        assert_eq!(third.id, "transaction::expense::1702516122002");
        assert_eq!(ledger.expenses().count(), 6);
    }

    #[test]
    fn test_category_icons() {
        assert_eq!(category_icon("Fuel"), "⛽");
        assert_eq!(category_icon("Food"), "☕");
        assert_eq!(category_icon("Gift"), "🛍️");
    }

    #[test]
    fn test_slice_percentages() {
        let percents = slice_percentages(&expense_breakdown());
        assert_eq!(
            percents,
            vec![("Fuel".to_string(), 53), ("Food".to_string(), 36), ("Other".to_string(), 11)]
        );
        assert!(slice_percentages(&[]).is_empty());
    }
}
