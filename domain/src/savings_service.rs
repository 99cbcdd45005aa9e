//! Savings goals kept in memory for the Savings view.
//!
//! Goals are additive only: nothing moves money from the wallet into a
//! goal, and new goals start at zero.

use log::info;
use shared::{GoalIcon, SavingsGoal};
use thiserror::Error;

use crate::mock_data::savings_goals;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SavingsError {
    #[error("Goal name cannot be empty")]
    EmptyName,
    #[error("Target must be a whole number of rupees greater than zero: {0}")]
    InvalidTarget(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsService {
    goals: Vec<SavingsGoal>,
}

impl SavingsService {
    pub fn new(goals: Vec<SavingsGoal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    /// Add a goal from the form inputs. The target must parse as a positive
    /// whole number of rupees.
    pub fn add_goal(&mut self, name: &str, target_input: &str, id: String) -> Result<&SavingsGoal, SavingsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SavingsError::EmptyName);
        }

        let target = target_input
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|target| *target > 0)
            .ok_or_else(|| SavingsError::InvalidTarget(target_input.trim().to_string()))?;

        info!("Adding savings goal '{}' with target {}", name, target);
        self.goals.push(SavingsGoal {
            id,
            name: name.to_string(),
            target: target as f64,
            current: 0.0,
            icon: GoalIcon::Trophy,
            deadline: Some("Just started".to_string()),
            color: "text-emerald-500".to_string(),
        });

        Ok(&self.goals[self.goals.len() - 1])
    }

    pub fn total_saved(&self) -> f64 {
        self.goals.iter().map(|goal| goal.current).sum()
    }
}

impl Default for SavingsService {
    fn default() -> Self {
        Self::new(savings_goals())
    }
}

/// Progress towards a goal in whole percent, capped at 100
pub fn progress_percent(goal: &SavingsGoal) -> u32 {
    if goal.target <= 0.0 {
        return 0;
    }
    (goal.current / goal.target * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_goal_progress() {
        let service = SavingsService::default();

        let progress: Vec<u32> = service.goals().iter().map(progress_percent).collect();

        // 28500 / 85000 = 33.5% and 8200 / 10000 = 82%
        assert_eq!(progress, vec![34, 82]);
        assert_eq!(service.total_saved(), 36700.0);
    }

    #[test]
    fn test_add_goal() {
        let mut service = SavingsService::default();

        let goal = service.add_goal("  New Phone ", "15000", "goal::3".to_string()).unwrap();

        assert_eq!(goal.name, "New Phone");
        assert_eq!(goal.target, 15000.0);
        assert_eq!(goal.current, 0.0);
        assert_eq!(goal.icon, GoalIcon::Trophy);
        assert_eq!(goal.deadline.as_deref(), Some("Just started"));
        assert_eq!(service.goals().len(), 3);
    }

    #[test]
    fn test_add_goal_rejects_bad_input() {
        let mut service = SavingsService::default();

        assert_eq!(service.add_goal("", "100", "x".into()), Err(SavingsError::EmptyName));
        assert_eq!(
            service.add_goal("Phone", "abc", "x".into()),
            Err(SavingsError::InvalidTarget("abc".into()))
        );
        assert!(service.add_goal("Phone", "0", "x".into()).is_err());
        assert!(service.add_goal("Phone", "-5", "x".into()).is_err());
        assert_eq!(service.goals().len(), 2);
    }

    #[test]
    fn test_progress_is_capped() {
        let mut goal = savings_goals().remove(1);
        goal.current = 25000.0;
        assert_eq!(progress_percent(&goal), 100);
    }
}
