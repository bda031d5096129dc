use serde::{Deserialize, Serialize};

use super::period::Period;

/// A per-category monthly spending cap.
///
/// `month`/`year` record the period the cap was set for; spending against the
/// cap is computed by the metrics layer for whichever period the caller asks
/// about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: u32,
    pub category: String,
    pub monthly_limit: f64,
    pub month: u32,
    pub year: i32,
}

impl Budget {
    pub fn new(category: impl Into<String>, monthly_limit: f64, period: Period) -> Self {
        Self {
            id: 0,
            category: category.into(),
            monthly_limit,
            month: period.month,
            year: period.year,
        }
    }

    pub fn period(&self) -> Period {
        Period::new(self.month, self.year)
    }
}
