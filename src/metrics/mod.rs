//! Pure derived-metrics computations over transaction, budget, and goal
//! records.
//!
//! Every function here is a stateless transform: the same inputs always
//! produce the same outputs, and inputs are never mutated. Functions that
//! default to "now" take a [`Clock`](crate::time::Clock) in their `*_current`
//! variant; the core functions take an explicit [`Period`](crate::domain::Period).

pub mod breakdown;
pub mod budget_progress;
pub mod monthly;
pub mod savings;
pub mod trend;

pub use breakdown::{category_breakdown, category_breakdown_current, CategoryBreakdown};
pub use budget_progress::{
    budget_progress, budget_progress_current, AlertLevel, BudgetProgress, BudgetStatus,
};
pub use monthly::{monthly_totals, monthly_totals_current, MonthlyTotals};
pub use savings::{savings_progress, GoalStatus, SavingsProgress};
pub use trend::{spending_trend, spending_trend_ending, TrendPoint, DEFAULT_TREND_MONTHS};
