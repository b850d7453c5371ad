use serde::{Deserialize, Serialize};

use super::commodity::Commodity;
use super::ledger::Ledger;
use super::snapshot::StoreSnapshot;

/// The full in-memory tracker state: one ledger per commodity.
///
/// This is the explicit state object the caller owns and passes into the
/// pure services — nothing in the crate holds it at module scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    pub gold: Ledger,
    pub silver: Ledger,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            gold: Ledger::new(Commodity::Gold),
            silver: Ledger::new(Commodity::Silver),
        }
    }
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ledger(&self, commodity: Commodity) -> &Ledger {
        match commodity {
            Commodity::Gold => &self.gold,
            Commodity::Silver => &self.silver,
        }
    }

    pub fn ledger_mut(&mut self, commodity: Commodity) -> &mut Ledger {
        match commodity {
            Commodity::Gold => &mut self.gold,
            Commodity::Silver => &mut self.silver,
        }
    }

    /// Wire snapshot of the whole state.
    #[must_use]
    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            transactions: self.gold.transactions.clone(),
            sell_price: self.gold.sell_price,
            silver_transactions: self.silver.transactions.clone(),
            silver_sell_price: self.silver.sell_price,
            last_updated: None,
        }
    }

    /// Replace the whole state from a wire snapshot.
    ///
    /// Both id counters are resynchronized. Callers re-derive summaries
    /// afterwards — no computed figure survives the swap.
    pub fn apply_snapshot(&mut self, snapshot: StoreSnapshot) {
        self.gold.transactions = snapshot.transactions;
        self.gold.sell_price = snapshot.sell_price;
        self.silver.transactions = snapshot.silver_transactions;
        self.silver.sell_price = snapshot.silver_sell_price;
        self.gold.resync_id_counter();
        self.silver.resync_id_counter();
    }
}
