use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{Period, Transaction};
use crate::time::Clock;

/// One expense category's share of a month's spending.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Default)]
struct CategoryAccum {
    amount: f64,
    count: usize,
}

/// Groups the period's expense transactions by exact category label and
/// reports each group's total, count, and share of total expenses.
///
/// Built in two phases: accumulation in first-encounter order, then a stable
/// sort by amount descending, so equal amounts keep a deterministic order.
/// No expenses in the period yields an empty vec.
pub fn category_breakdown(transactions: &[Transaction], period: Period) -> Vec<CategoryBreakdown> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, CategoryAccum> = HashMap::new();
    let mut total_expenses = 0.0;

    for txn in transactions {
        if !txn.is_expense() || !period.contains(txn.date) {
            continue;
        }
        let entry = groups.entry(txn.category.clone()).or_insert_with(|| {
            order.push(txn.category.clone());
            CategoryAccum::default()
        });
        entry.amount += txn.amount;
        entry.count += 1;
        total_expenses += txn.amount;
    }

    let mut rows: Vec<CategoryBreakdown> = order
        .into_iter()
        .map(|category| {
            let accum = &groups[&category];
            let percentage = if total_expenses > 0.0 {
                accum.amount / total_expenses * 100.0
            } else {
                0.0
            };
            CategoryBreakdown {
                category,
                amount: accum.amount,
                count: accum.count,
                percentage,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    rows
}

/// [`category_breakdown`] scoped to the clock's current month.
pub fn category_breakdown_current(
    transactions: &[Transaction],
    clock: &dyn Clock,
) -> Vec<CategoryBreakdown> {
    category_breakdown(transactions, clock.current_period())
}
