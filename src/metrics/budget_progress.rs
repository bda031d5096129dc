use serde::Serialize;

use crate::domain::{Budget, Period, Transaction};
use crate::time::Clock;

/// Display status of a budget, banded on percentage spent.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exceeded
        } else if percentage >= 80.0 {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

/// Alert severity of a budget. Same bands as [`BudgetStatus`]; consumers
/// historically query severity and display status under separate names, so
/// both fields are emitted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Normal,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Self::Critical
        } else if percentage >= 80.0 {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// A budget augmented with spending derived for one period. Transient,
/// recomputed on every call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetProgress {
    #[serde(flatten)]
    pub budget: Budget,
    pub spent: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub status: BudgetStatus,
    pub alert_level: AlertLevel,
}

/// Derives spending progress for each budget against `period`, in input
/// order.
///
/// `spent` sums expense transactions whose category matches the budget's
/// exactly. A zero `monthly_limit` reports 0% rather than dividing by zero.
/// `remaining` is clamped at 0; the overage stays recoverable as
/// `spent - monthly_limit`.
pub fn budget_progress(
    budgets: &[Budget],
    transactions: &[Transaction],
    period: Period,
) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = transactions
                .iter()
                .filter(|txn| {
                    txn.is_expense()
                        && txn.category == budget.category
                        && period.contains(txn.date)
                })
                .map(|txn| txn.amount)
                .sum();

            let percentage = if budget.monthly_limit > 0.0 {
                spent / budget.monthly_limit * 100.0
            } else {
                0.0
            };

            BudgetProgress {
                budget: budget.clone(),
                spent,
                percentage,
                remaining: (budget.monthly_limit - spent).max(0.0),
                status: BudgetStatus::from_percentage(percentage),
                alert_level: AlertLevel::from_percentage(percentage),
            }
        })
        .collect()
}

/// [`budget_progress`] against the clock's current month.
pub fn budget_progress_current(
    budgets: &[Budget],
    transactions: &[Transaction],
    clock: &dyn Clock,
) -> Vec<BudgetProgress> {
    budget_progress(budgets, transactions, clock.current_period())
}
