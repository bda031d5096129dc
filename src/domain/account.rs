use serde::{Deserialize, Serialize};

/// A financial account the user tracks balances against. Carried by the
/// record store; the metrics layer never reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: u32,
    pub name: String,
    pub kind: AccountKind,
    #[serde(default)]
    pub bank: String,
    #[serde(default)]
    pub account_number: String,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
}

impl Account {
    /// Creates a new active account with a zero balance.
    pub fn new(name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: 0,
            name: name.into(),
            kind,
            bank: String::new(),
            account_number: String::new(),
            balance: 0.0,
            credit_limit: None,
            description: String::new(),
            is_active: true,
        }
    }
}

/// Supported account types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Cash,
}
