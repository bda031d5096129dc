use serde::Serialize;

use crate::domain::{SavingsGoal, Transaction};

/// Category label whose income transactions count as savings contributions.
const SAVINGS_CATEGORY: &str = "Savings";

/// Status of a savings goal, banded on percentage saved.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Progress,
    Close,
    Completed,
}

impl GoalStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Completed
        } else if percentage >= 75.0 {
            Self::Close
        } else {
            Self::Progress
        }
    }
}

/// A goal augmented with its transaction-derived progress. Transient,
/// recomputed on every call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SavingsProgress {
    #[serde(flatten)]
    pub goal: SavingsGoal,
    pub current_amount: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub status: GoalStatus,
}

/// Derives savings progress for each goal, in input order.
///
/// Contributions are income transactions whose description contains the goal
/// name case-insensitively, or whose category is exactly `Savings`. The
/// stored `current_amount` is a floor: transaction-derived contributions can
/// raise the effective amount but never lower it. A `Savings`-categorised
/// deposit counts toward every goal, matching the original attribution rules.
pub fn savings_progress(
    goals: &[SavingsGoal],
    transactions: &[Transaction],
) -> Vec<SavingsProgress> {
    goals
        .iter()
        .map(|goal| {
            let needle = goal.name.to_lowercase();
            let contributed: f64 = transactions
                .iter()
                .filter(|txn| {
                    txn.is_income()
                        && (txn.category == SAVINGS_CATEGORY
                            || txn.description.to_lowercase().contains(&needle))
                })
                .map(|txn| txn.amount)
                .sum();

            let current_amount = goal.current_amount.max(contributed);
            let raw_percentage = if goal.target_amount > 0.0 {
                current_amount / goal.target_amount * 100.0
            } else {
                0.0
            };

            SavingsProgress {
                goal: goal.clone(),
                current_amount,
                percentage: raw_percentage.min(100.0),
                remaining: (goal.target_amount - current_amount).max(0.0),
                status: GoalStatus::from_percentage(raw_percentage),
            }
        })
        .collect()
}
