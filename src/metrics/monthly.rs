use serde::Serialize;

use crate::domain::{Period, Transaction};
use crate::time::Clock;

/// Income, expense, and balance totals for one calendar month, along with the
/// transactions that produced them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub transactions: Vec<Transaction>,
}

/// Sums income and expenses over the transactions dated inside `period`.
///
/// Empty input (or a period with no activity) yields all-zero totals and an
/// empty transaction list.
pub fn monthly_totals(transactions: &[Transaction], period: Period) -> MonthlyTotals {
    let mut income = 0.0;
    let mut expenses = 0.0;
    let mut scoped = Vec::new();

    for txn in transactions {
        if !period.contains(txn.date) {
            continue;
        }
        if txn.is_income() {
            income += txn.amount;
        } else {
            expenses += txn.amount;
        }
        scoped.push(txn.clone());
    }

    MonthlyTotals {
        income,
        expenses,
        balance: income - expenses,
        transactions: scoped,
    }
}

/// [`monthly_totals`] scoped to the clock's current month.
pub fn monthly_totals_current(transactions: &[Transaction], clock: &dyn Clock) -> MonthlyTotals {
    monthly_totals(transactions, clock.current_period())
}
