//! Shadow vault screen: the two-step emergency unlock and the vault compartments.

use log::{info, warn};
use shared::VaultBucket;

use crate::wallet_service::WalletState;

/// Change to the wallet's lock flag requested by the unlock flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockCommand {
    Lock,
    Unlock,
}

impl LockCommand {
    pub fn apply(self, wallet: &mut WalletState) {
        match self {
            LockCommand::Lock => wallet.lock(),
            LockCommand::Unlock => wallet.unlock(),
        }
    }
}

/// Progress of the emergency unlock confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnlockFlow {
    #[default]
    Idle,
    FirstWarning,
    FinalWarning,
}

impl UnlockFlow {
    pub fn is_open(&self) -> bool {
        !matches!(self, UnlockFlow::Idle)
    }

    /// The vault button. Locks immediately when already unlocked, otherwise
    /// opens the first warning.
    pub fn press_button(self, is_unlocked: bool) -> (UnlockFlow, Option<LockCommand>) {
        if is_unlocked {
            info!("Vault re-locked");
            (UnlockFlow::Idle, Some(LockCommand::Lock))
        } else {
            (UnlockFlow::FirstWarning, None)
        }
    }

    /// "I Understand, Proceed" on the first warning
    pub fn acknowledge(self) -> UnlockFlow {
        match self {
            UnlockFlow::FirstWarning => UnlockFlow::FinalWarning,
            other => other,
        }
    }

    /// "CONFIRM UNLOCK" on the final warning. Only unlocks from that step.
    pub fn confirm(self) -> (UnlockFlow, Option<LockCommand>) {
        match self {
            UnlockFlow::FinalWarning => {
                warn!("Emergency unlock confirmed, shadow funds exposed");
                (UnlockFlow::Idle, Some(LockCommand::Unlock))
            }
            other => {
                info!("Ignoring unlock confirmation from {:?}", other);
                (other, None)
            }
        }
    }

    pub fn cancel(self) -> UnlockFlow {
        UnlockFlow::Idle
    }
}

/// Filled share of a compartment, rounded to whole percent
pub fn bucket_percent(bucket: &VaultBucket) -> u32 {
    if bucket.target <= 0.0 {
        return 0;
    }
    (bucket.amount / bucket.target * 100.0).round().max(0.0) as u32
}

/// Bar width for a compartment, capped at 100
pub fn bucket_fill_width(bucket: &VaultBucket) -> u32 {
    bucket_percent(bucket).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::vault_buckets;

    fn run(flow_step: (UnlockFlow, Option<LockCommand>), wallet: &mut WalletState) -> UnlockFlow {
        let (flow, command) = flow_step;
        if let Some(command) = command {
            command.apply(wallet);
        }
        flow
    }

    #[test]
    fn test_full_unlock_requires_two_confirmations() {
        let mut wallet = WalletState::default();

        let flow = run(UnlockFlow::Idle.press_button(wallet.is_unlocked()), &mut wallet);
        assert_eq!(flow, UnlockFlow::FirstWarning);
        assert!(!wallet.is_unlocked());

        let flow = flow.acknowledge();
        assert_eq!(flow, UnlockFlow::FinalWarning);
        assert!(!wallet.is_unlocked());

        let flow = run(flow.confirm(), &mut wallet);
        assert_eq!(flow, UnlockFlow::Idle);
        assert!(wallet.is_unlocked());
        assert_eq!(wallet.total_balance(), 12450.0);
    }

    #[test]
    fn test_confirm_from_first_warning_does_nothing() {
        assert_eq!(UnlockFlow::FirstWarning.confirm(), (UnlockFlow::FirstWarning, None));
        assert_eq!(UnlockFlow::Idle.confirm(), (UnlockFlow::Idle, None));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        assert_eq!(UnlockFlow::FirstWarning.cancel(), UnlockFlow::Idle);
        assert_eq!(UnlockFlow::FinalWarning.cancel(), UnlockFlow::Idle);
        assert!(!UnlockFlow::Idle.is_open());
        assert!(UnlockFlow::FinalWarning.is_open());
    }

    #[test]
    fn test_button_relocks_unlocked_wallet() {
        let mut wallet = WalletState::default();
        wallet.unlock();

        let flow = run(UnlockFlow::Idle.press_button(wallet.is_unlocked()), &mut wallet);

        assert_eq!(flow, UnlockFlow::Idle);
        assert!(!wallet.is_unlocked());
    }

    #[test]
    fn test_bucket_percentages() {
        let percents: Vec<u32> = vault_buckets().iter().map(bucket_percent).collect();
        assert_eq!(percents, vec![75, 100, 50, 10]);
    }

    #[test]
    fn test_bucket_with_zero_target() {
        let bucket = VaultBucket {
            label: "Misc".into(),
            amount: 10.0,
            target: 0.0,
            icon: "📦".into(),
            color_class: "bg-gray-500".into(),
        };
        assert_eq!(bucket_percent(&bucket), 0);
    }
}
