use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::commodity::Commodity;
use super::transaction::Transaction;

/// The shape every persistence backend speaks, exactly as the backend API
/// stores it.
///
/// The format predates the silver ledger, hence the unprefixed gold field
/// names. Every field carries a serde default so a pre-silver payload — or
/// one missing any newer field — still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    /// Gold transactions
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Gold sell price per chỉ
    #[serde(default = "default_gold_sell_price")]
    pub sell_price: f64,

    /// Silver transactions
    #[serde(default)]
    pub silver_transactions: Vec<Transaction>,

    /// Silver sell price per kg
    #[serde(default = "default_silver_sell_price")]
    pub silver_sell_price: f64,

    /// Stamped by the store on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

fn default_gold_sell_price() -> f64 {
    Commodity::Gold.default_sell_price()
}

fn default_silver_sell_price() -> f64 {
    Commodity::Silver.default_sell_price()
}

impl StoreSnapshot {
    /// The clear-all shape: no transactions, seed sell prices.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transactions: Vec::new(),
            sell_price: default_gold_sell_price(),
            silver_transactions: Vec::new(),
            silver_sell_price: default_silver_sell_price(),
            last_updated: None,
        }
    }
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
