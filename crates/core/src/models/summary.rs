use serde::{Deserialize, Serialize};

/// Derived figures for one ledger row. Recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowComputed {
    /// Quantity normalized into the commodity's base unit
    pub normalized_qty: f64,

    /// normalized_qty × buy price
    pub line_total: f64,
}

/// Which side of break-even a ledger sits on.
/// Drives presentation only — nothing downstream computes from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfitState {
    Gain,
    Loss,
    BreakEven,
}

impl ProfitState {
    /// Classify a signed profit. Exactly zero is break-even, not gain.
    #[must_use]
    pub fn classify(profit: f64) -> Self {
        if profit > 0.0 {
            ProfitState::Gain
        } else if profit < 0.0 {
            ProfitState::Loss
        } else {
            ProfitState::BreakEven
        }
    }
}

impl std::fmt::Display for ProfitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfitState::Gain => write!(f, "gain"),
            ProfitState::Loss => write!(f, "loss"),
            ProfitState::BreakEven => write!(f, "break-even"),
        }
    }
}

/// Ledger-wide totals against the current sell price.
///
/// Derived from a ledger snapshot on every read — never stored, never
/// partially updated. All divisions are guarded: an empty or costless ledger
/// yields defined zeros, not NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Total quantity in the base unit
    pub total_base_qty: f64,

    /// The same total expressed in the bulk unit — display only
    pub total_bulk_qty: f64,

    /// Sum of per-row line totals
    pub total_cost: f64,

    /// total_base_qty × sell price
    pub total_sell_value: f64,

    /// Signed: total_sell_value − total_cost
    pub profit: f64,

    /// profit / total_cost × 100, or 0 for a costless ledger
    pub profit_percent: f64,

    /// Unit price at which sell value equals cost, or 0 for an empty ledger
    pub break_even_price: f64,

    pub state: ProfitState,
}
