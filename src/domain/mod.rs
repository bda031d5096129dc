//! Domain record types consumed by the metrics layer.

pub mod account;
pub mod budget;
pub mod category;
pub mod goal;
pub mod period;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use budget::Budget;
pub use category::{Category, CategoryKind};
pub use goal::SavingsGoal;
pub use period::Period;
pub use transaction::{Transaction, TransactionKind};
