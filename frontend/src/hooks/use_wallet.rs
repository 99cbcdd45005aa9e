use std::rc::Rc;

use shared::{AppMode, Theme, WalletSnapshot};
use steady_domain::WalletState;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum WalletAction {
    RecordIncome(f64),
    RecordExpense(f64),
    Lock,
    Unlock,
    SetMode(AppMode),
}

/// Shared wallet state for every view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletStore {
    pub wallet: WalletState,
}

impl WalletStore {
    pub fn snapshot(&self) -> WalletSnapshot {
        self.wallet.snapshot()
    }

    pub fn theme(&self) -> &'static Theme {
        self.wallet.theme()
    }
}

impl Reducible for WalletStore {
    type Action = WalletAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut wallet = self.wallet.clone();

        let result = match action {
            WalletAction::RecordIncome(amount) => wallet.record_income(amount),
            WalletAction::RecordExpense(amount) => wallet.record_expense(amount),
            WalletAction::Lock => {
                wallet.lock();
                Ok(())
            }
            WalletAction::Unlock => {
                wallet.unlock();
                Ok(())
            }
            WalletAction::SetMode(mode) => {
                wallet.set_mode(mode);
                Ok(())
            }
        };

        match result {
            Ok(()) => Rc::new(WalletStore { wallet }),
            Err(e) => {
                log::warn!("Wallet update rejected: {}", e);
                self
            }
        }
    }
}

pub type WalletHandle = UseReducerHandle<WalletStore>;

/// Wallet from the surrounding provider. Outside a provider a fresh wallet
/// is used so components still render in isolation.
#[hook]
pub fn use_wallet() -> WalletHandle {
    let fallback = use_reducer(WalletStore::default);
    use_context::<WalletHandle>().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_action_applies_lock_rule() {
        let store = Rc::new(WalletStore::default());

        let store = store.reduce(WalletAction::RecordIncome(1000.0));

        assert_eq!(store.wallet.total_balance(), 13450.0);
        assert_eq!(store.wallet.shadow_balance(), 8500.0);
        assert_eq!(store.snapshot().visible_balance, 4950.0);
    }

    #[test]
    fn test_rejected_amount_keeps_state() {
        let store = Rc::new(WalletStore::default());

        let next = store.clone().reduce(WalletAction::RecordExpense(-5.0));

        assert!(Rc::ptr_eq(&store, &next));
    }

    #[test]
    fn test_mode_and_lock_actions() {
        let store = Rc::new(WalletStore::default());

        let store = store.reduce(WalletAction::SetMode(AppMode::Joy));
        let store = store.reduce(WalletAction::Unlock);

        assert_eq!(store.theme().name, "Joy");
        assert!(store.snapshot().is_unlocked);
        assert_eq!(store.snapshot().shadow_balance, 0.0);

        let store = store.reduce(WalletAction::Lock);
        assert!(!store.snapshot().is_unlocked);
    }
}
