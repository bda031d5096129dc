//! In-memory record stores standing in for the persistence collaborators.
//!
//! Each entity kind gets the same surface the application layer expects:
//! `get_all`, `get_by_id`, `create`, `update`, `delete` over records keyed by
//! a numeric identifier. Reads hand back clones, so nothing a caller mutates
//! leaks back into the store.

pub mod memory;

pub use memory::InMemoryStore;

use crate::domain::{Account, Budget, Category, SavingsGoal, Transaction};
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// A record the store can key by numeric identifier.
pub trait Record: Clone {
    /// Entity label used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> u32;
    fn assign_id(&mut self, id: u32);
}

impl Record for Transaction {
    const ENTITY: &'static str = "Transaction";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for Budget {
    const ENTITY: &'static str = "Budget";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for SavingsGoal {
    const ENTITY: &'static str = "SavingsGoal";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for Account {
    const ENTITY: &'static str = "Account";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}

impl Record for Category {
    const ENTITY: &'static str = "Category";

    fn id(&self) -> u32 {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = id;
    }
}
