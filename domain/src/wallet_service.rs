//! Shadow wallet state for the dashboard.
//!
//! The wallet keeps two stored numbers, the total balance and the shadow
//! (locked) balance. Everything the UI shows as "spendable" is derived from
//! those two plus the lock flag:
//!
//! - locked: visible = total - shadow, shadow shown as-is
//! - unlocked: visible = total, shadow shown as 0
//!
//! Income automatically moves 30% of its amount into the shadow balance.

use log::{debug, info, warn};
use shared::{AppMode, Theme, TransactionType, WalletSnapshot};
use thiserror::Error;

use crate::mock_data::{INITIAL_SHADOW_BALANCE, INITIAL_TOTAL_BALANCE};
use crate::theme_service::ThemeService;

/// Share of every income event that is locked into the shadow balance
pub const SHADOW_LOCK_RATE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    #[error("Amount must be a finite number greater than zero (got {0})")]
    InvalidAmount(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalletState {
    total_balance: f64,
    shadow_balance: f64,
    is_unlocked: bool,
    mode: AppMode,
}

impl WalletState {
    /// Wallet with the given balances, locked, in the default mode
    pub fn new(total_balance: f64, shadow_balance: f64) -> Self {
        Self {
            total_balance,
            shadow_balance,
            is_unlocked: false,
            mode: AppMode::default(),
        }
    }

    pub fn total_balance(&self) -> f64 {
        self.total_balance
    }

    /// Stored shadow balance, regardless of the lock flag
    pub fn shadow_balance(&self) -> f64 {
        self.shadow_balance
    }

    pub fn is_unlocked(&self) -> bool {
        self.is_unlocked
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn theme(&self) -> &'static Theme {
        ThemeService::theme_for(self.mode)
    }

    pub fn visible_balance(&self) -> f64 {
        if self.is_unlocked {
            self.total_balance
        } else {
            self.total_balance - self.shadow_balance
        }
    }

    /// Shadow balance as the UI shows it: hidden (zero) while unlocked
    pub fn display_shadow_balance(&self) -> f64 {
        if self.is_unlocked {
            0.0
        } else {
            self.shadow_balance
        }
    }

    /// Percentage of the total currently shown as locked, rounded
    pub fn locked_share_percent(&self) -> u32 {
        if self.total_balance <= 0.0 {
            return 0;
        }
        let share = self.display_shadow_balance() / self.total_balance * 100.0;
        share.round().clamp(0.0, 100.0) as u32
    }

    pub fn snapshot(&self) -> WalletSnapshot {
        WalletSnapshot {
            total_balance: self.total_balance,
            shadow_balance: self.display_shadow_balance(),
            visible_balance: self.visible_balance(),
            is_unlocked: self.is_unlocked,
            mode: self.mode,
        }
    }

    /// Credit income and lock 30% of it into the shadow balance
    pub fn record_income(&mut self, amount: f64) -> Result<(), WalletError> {
        Self::validate_amount(amount)?;

        let locked = amount * SHADOW_LOCK_RATE;
        self.total_balance += amount;
        self.shadow_balance += locked;

        info!(
            "Recorded income {:.2}: locked {:.2}, total {:.2}, shadow {:.2}",
            amount, locked, self.total_balance, self.shadow_balance
        );
        Ok(())
    }

    /// Debit an expense from the total balance. No floor is applied.
    pub fn record_expense(&mut self, amount: f64) -> Result<(), WalletError> {
        Self::validate_amount(amount)?;

        self.total_balance -= amount;
        info!("Recorded expense {:.2}: total {:.2}", amount, self.total_balance);

        if self.total_balance < 0.0 {
            warn!("Total balance is negative after expense: {:.2}", self.total_balance);
        } else if self.total_balance < self.shadow_balance {
            warn!(
                "Total balance {:.2} dipped below shadow balance {:.2}",
                self.total_balance, self.shadow_balance
            );
        }
        Ok(())
    }

    pub fn add_transaction(&mut self, amount: f64, transaction_type: TransactionType) -> Result<(), WalletError> {
        match transaction_type {
            TransactionType::Income => self.record_income(amount),
            TransactionType::Expense => self.record_expense(amount),
        }
    }

    pub fn set_unlocked(&mut self, unlocked: bool) {
        if self.is_unlocked != unlocked {
            info!("Shadow wallet {}", if unlocked { "unlocked" } else { "locked" });
        }
        self.is_unlocked = unlocked;
    }

    pub fn unlock(&mut self) {
        self.set_unlocked(true);
    }

    pub fn lock(&mut self) {
        self.set_unlocked(false);
    }

    pub fn set_mode(&mut self, mode: AppMode) {
        debug!("Switching mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    fn validate_amount(amount: f64) -> Result<(), WalletError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(())
        } else {
            warn!("Rejected wallet amount {}", amount);
            Err(WalletError::InvalidAmount(amount))
        }
    }
}

impl Default for WalletState {
    fn default() -> Self {
        Self::new(INITIAL_TOTAL_BALANCE, INITIAL_SHADOW_BALANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_initial_state() {
        let wallet = WalletState::default();

        assert_eq!(wallet.total_balance(), 12450.0);
        assert_eq!(wallet.shadow_balance(), 8200.0);
        assert!(!wallet.is_unlocked());
        assert_eq!(wallet.mode(), AppMode::Stability);
        assert_eq!(wallet.visible_balance(), 4250.0);
    }

    #[test]
    fn test_income_locks_thirty_percent() {
        let mut wallet = WalletState::default();

        wallet.record_income(1000.0).unwrap();

        assert_close(wallet.total_balance(), 13450.0);
        assert_close(wallet.shadow_balance(), 8500.0);
        assert_close(wallet.visible_balance(), 4950.0);
    }

    #[test]
    fn test_income_property_over_many_amounts() {
        for amount in [0.01, 1.0, 40.0, 139.0, 850.0, 12345.67] {
            let mut wallet = WalletState::default();
            let (total, shadow) = (wallet.total_balance(), wallet.shadow_balance());

            wallet.record_income(amount).unwrap();

            assert_close(wallet.total_balance() - total, amount);
            assert_close(wallet.shadow_balance() - shadow, amount * 0.3);
        }
    }

    #[test]
    fn test_expense_reduces_total_only() {
        for amount in [0.5, 80.0, 250.0, 9999.0] {
            let mut wallet = WalletState::default();

            wallet.record_expense(amount).unwrap();

            assert_close(wallet.total_balance(), 12450.0 - amount);
            assert_eq!(wallet.shadow_balance(), 8200.0);
        }
    }

    #[test]
    fn test_expense_may_drive_balance_negative() {
        let mut wallet = WalletState::new(100.0, 0.0);

        wallet.record_expense(250.0).unwrap();

        assert_eq!(wallet.total_balance(), -150.0);
        assert_eq!(wallet.visible_balance(), -150.0);
    }

    #[test]
    fn test_invalid_amounts_are_rejected_without_mutation() {
        let mut wallet = WalletState::default();
        let before = wallet.clone();

        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(wallet.record_income(amount).is_err());
            assert!(wallet.record_expense(amount).is_err());
        }

        assert_eq!(wallet, before);
    }

    #[test]
    fn test_add_transaction_dispatches_by_type() {
        let mut wallet = WalletState::default();

        wallet.add_transaction(100.0, TransactionType::Income).unwrap();
        wallet.add_transaction(50.0, TransactionType::Expense).unwrap();

        assert_close(wallet.total_balance(), 12500.0);
        assert_close(wallet.shadow_balance(), 8230.0);
    }

    #[test]
    fn test_unlock_changes_display_not_balances() {
        let mut wallet = WalletState::default();

        wallet.unlock();
        assert!(wallet.is_unlocked());
        assert_eq!(wallet.visible_balance(), 12450.0);
        assert_eq!(wallet.display_shadow_balance(), 0.0);
        assert_eq!(wallet.shadow_balance(), 8200.0);
        assert_eq!(wallet.total_balance(), 12450.0);

        wallet.lock();
        assert_eq!(wallet.visible_balance(), 4250.0);
        assert_eq!(wallet.display_shadow_balance(), 8200.0);
    }

    #[test]
    fn test_income_while_unlocked_still_accrues_shadow() {
        let mut wallet = WalletState::default();
        wallet.unlock();

        wallet.record_income(100.0).unwrap();
        wallet.lock();

        assert_close(wallet.shadow_balance(), 8230.0);
        assert_close(wallet.visible_balance(), 12550.0 - 8230.0);
    }

    #[test]
    fn test_mode_selection_never_touches_balances() {
        let mut wallet = WalletState::default();
        wallet.record_income(500.0).unwrap();
        let (total, shadow, visible) = (wallet.total_balance(), wallet.shadow_balance(), wallet.visible_balance());

        for mode in AppMode::ALL {
            wallet.set_mode(mode);
            assert_eq!(wallet.mode(), mode);
            assert_eq!(wallet.theme().name, mode.name());
            assert_eq!(wallet.total_balance(), total);
            assert_eq!(wallet.shadow_balance(), shadow);
            assert_eq!(wallet.visible_balance(), visible);
        }
    }

    #[test]
    fn test_snapshot_reflects_lock_state() {
        let mut wallet = WalletState::default();

        let locked = wallet.snapshot();
        assert_eq!(locked.shadow_balance, 8200.0);
        assert_eq!(locked.visible_balance, 4250.0);

        wallet.unlock();
        let unlocked = wallet.snapshot();
        assert!(unlocked.is_unlocked);
        assert_eq!(unlocked.shadow_balance, 0.0);
        assert_eq!(unlocked.visible_balance, 12450.0);
    }

    #[test]
    fn test_locked_share_percent() {
        let mut wallet = WalletState::default();
        // 8200 / 12450 = 65.86%
        assert_eq!(wallet.locked_share_percent(), 66);

        wallet.unlock();
        assert_eq!(wallet.locked_share_percent(), 0);

        let empty = WalletState::new(0.0, 0.0);
        assert_eq!(empty.locked_share_percent(), 0);
    }
}
