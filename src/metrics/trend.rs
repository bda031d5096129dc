use serde::Serialize;

use crate::domain::{Period, Transaction};
use crate::metrics::monthly::monthly_totals;
use crate::time::Clock;

/// Default trend window, in months.
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// One month's totals inside a trend window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub year: i32,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Produces `months_back` points covering the calendar months ending at and
/// including `end`, oldest first. Year boundaries inside the window resolve
/// to their own years.
pub fn spending_trend_ending(
    transactions: &[Transaction],
    months_back: u32,
    end: Period,
) -> Vec<TrendPoint> {
    let mut points = Vec::with_capacity(months_back as usize);

    for offset in (0..months_back).rev() {
        let period = end.shift(-(offset as i32));
        let totals = monthly_totals(transactions, period);
        points.push(TrendPoint {
            month: period.month_abbrev(),
            year: period.year,
            income: totals.income,
            expenses: totals.expenses,
            balance: totals.balance,
        });
    }

    points
}

/// [`spending_trend_ending`] with the window ending at the clock's current
/// month.
pub fn spending_trend(
    transactions: &[Transaction],
    months_back: u32,
    clock: &dyn Clock,
) -> Vec<TrendPoint> {
    spending_trend_ending(transactions, months_back, clock.current_period())
}
