use serde::{Deserialize, Serialize};

use super::commodity::Commodity;
use super::transaction::Transaction;

/// One commodity's ordered transactions plus its current sell price.
///
/// `id_counter` is a local invariant — always greater than every id present —
/// and never travels over the wire; it is resynchronized whenever the
/// transaction list is bulk-replaced (e.g. loaded from storage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,

    /// Current sell price per base unit
    pub sell_price: f64,

    #[serde(skip)]
    pub id_counter: u64,
}

impl Ledger {
    /// An empty ledger at the commodity's seed sell price.
    pub fn new(commodity: Commodity) -> Self {
        Self {
            transactions: Vec::new(),
            sell_price: commodity.default_sell_price(),
            id_counter: 0,
        }
    }

    /// The built-in sample rows for quick demos.
    pub fn sample(commodity: Commodity) -> Self {
        let rows: &[(f64, &str, f64)] = match commodity {
            Commodity::Gold => &[
                (1.0, "cay", 10.710),
                (2.0, "cay", 10.850),
                (1.0, "cay", 11.750),
            ],
            Commodity::Silver => &[(1.0, "kg", 0.450), (2.0, "luong", 0.480)],
        };

        let mut ledger = Self::new(commodity);
        for &(qty, unit, buy_price) in rows {
            let id = ledger.next_id();
            ledger
                .transactions
                .push(Transaction::with_values(id, qty, unit, buy_price));
        }
        ledger
    }

    /// Take the next id and advance the counter.
    pub fn next_id(&mut self) -> u64 {
        let id = self.id_counter;
        self.id_counter += 1;
        id
    }

    /// Restore the counter invariant after a bulk replacement: one past the
    /// largest id present, or 0 for an empty ledger. Tolerates externally
    /// supplied ids that arrive out of order or with gaps.
    pub fn resync_id_counter(&mut self) {
        self.id_counter = self
            .transactions
            .iter()
            .map(|t| t.id + 1)
            .max()
            .unwrap_or(0);
    }

    #[must_use]
    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn transaction_mut(&mut self, id: u64) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
