use crate::models::commodity::Commodity;
use crate::models::ledger::Ledger;
use crate::models::summary::{ProfitState, RowComputed, Summary};
use crate::models::transaction::Transaction;

/// The aggregation engine: normalizes row quantities into the base unit and
/// derives ledger-wide totals against the current sell price.
///
/// Pure functions of their inputs — no mutation, no caching. Callers can
/// recompute after any externally driven state replacement and no stale
/// figure survives the swap.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Derived figures for one row.
    #[must_use]
    pub fn row_computed(&self, tx: &Transaction, commodity: Commodity) -> RowComputed {
        let normalized_qty = commodity.units().to_base(tx.qty, &tx.unit);
        RowComputed {
            normalized_qty,
            line_total: normalized_qty * tx.buy_price,
        }
    }

    /// Ledger-wide totals against the ledger's sell price.
    ///
    /// Division guards keep an empty ledger's break-even and a costless
    /// ledger's profit percentage at defined zeros instead of NaN.
    #[must_use]
    pub fn summarize(&self, ledger: &Ledger, commodity: Commodity) -> Summary {
        let mut total_base_qty = 0.0;
        let mut total_cost = 0.0;

        for tx in &ledger.transactions {
            let row = self.row_computed(tx, commodity);
            total_base_qty += row.normalized_qty;
            total_cost += row.line_total;
        }

        let total_sell_value = total_base_qty * ledger.sell_price;
        let profit = total_sell_value - total_cost;
        let break_even_price = if total_base_qty > 0.0 {
            total_cost / total_base_qty
        } else {
            0.0
        };
        let profit_percent = if total_cost > 0.0 {
            (profit / total_cost) * 100.0
        } else {
            0.0
        };

        Summary {
            total_base_qty,
            total_bulk_qty: commodity.units().to_bulk(total_base_qty),
            total_cost,
            total_sell_value,
            profit,
            profit_percent,
            break_even_price,
            state: ProfitState::classify(profit),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
