use serde::{Deserialize, Serialize};

use super::commodity::Commodity;

/// A single buy row in a commodity ledger.
///
/// `buy_price` is the price per one *base unit*, regardless of the unit the
/// quantity was entered in. Serialized field names match the stored wire
/// shape exactly (`buyPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger-unique id, assigned monotonically by the owning ledger
    #[serde(default)]
    pub id: u64,

    /// Quantity, in `unit`
    #[serde(default)]
    pub qty: f64,

    /// Unit label the quantity was entered in
    #[serde(default)]
    pub unit: String,

    /// Price paid per base unit
    #[serde(default)]
    pub buy_price: f64,
}

impl Transaction {
    /// A freshly added row: one base unit at price zero.
    pub fn new(id: u64, commodity: Commodity) -> Self {
        Self {
            id,
            qty: 1.0,
            unit: commodity.units().base_unit.to_string(),
            buy_price: 0.0,
        }
    }

    /// A row with explicit values.
    pub fn with_values(id: u64, qty: f64, unit: impl Into<String>, buy_price: f64) -> Self {
        Self {
            id,
            qty,
            unit: unit.into(),
            buy_price,
        }
    }
}

/// Names an editable transaction field for the raw-edit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionField {
    Qty,
    Unit,
    BuyPrice,
}
