#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the derived-metrics primitives of a personal-finance
//! tracker: monthly totals, category breakdowns, spending trends, budget
//! progress, and savings-goal progress computed over plain record collections.

pub mod domain;
pub mod errors;
pub mod metrics;
pub mod store;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
