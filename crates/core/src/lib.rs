pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    commodity::Commodity,
    ledger::Ledger,
    snapshot::StoreSnapshot,
    state::TrackerState,
    summary::{RowComputed, Summary},
    transaction::{Transaction, TransactionField},
};
use services::{ledger_service::LedgerService, summary_service::SummaryService};
use storage::store::LedgerStore;

use errors::CoreError;

/// Main entry point for the Bullion Tracker core library.
/// Owns the per-commodity ledgers and the services that operate on them.
#[must_use]
pub struct BullionTracker {
    state: TrackerState,
    ledger_service: LedgerService,
    summary_service: SummaryService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for BullionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BullionTracker")
            .field("gold_transactions", &self.state.gold.len())
            .field("silver_transactions", &self.state.silver.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl BullionTracker {
    /// A brand new tracker: both ledgers empty at their seed sell prices.
    pub fn create_new() -> Self {
        Self::build(TrackerState::new())
    }

    /// A tracker restored from a wire snapshot.
    /// Both id counters are resynchronized against the supplied data.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut state = TrackerState::new();
        state.apply_snapshot(snapshot);
        Self::build(state)
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Add a fresh default row (one base unit at price zero). Returns its id.
    pub fn add_transaction(&mut self, commodity: Commodity) -> u64 {
        let id = self
            .ledger_service
            .add(self.state.ledger_mut(commodity), commodity);
        self.dirty = true;
        id
    }

    /// Add a row with explicit values. Returns its id.
    pub fn add_transaction_with(
        &mut self,
        commodity: Commodity,
        qty: f64,
        unit: impl Into<String>,
        buy_price: f64,
    ) -> u64 {
        let id = self
            .ledger_service
            .add_with(self.state.ledger_mut(commodity), qty, unit, buy_price);
        self.dirty = true;
        id
    }

    /// Set a row's quantity.
    pub fn set_quantity(
        &mut self,
        commodity: Commodity,
        id: u64,
        qty: f64,
    ) -> Result<(), CoreError> {
        self.ledger_service
            .set_qty(self.state.ledger_mut(commodity), id, qty)?;
        self.dirty = true;
        Ok(())
    }

    /// Set a row's unit label.
    pub fn set_unit(
        &mut self,
        commodity: Commodity,
        id: u64,
        unit: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.ledger_service
            .set_unit(self.state.ledger_mut(commodity), id, unit)?;
        self.dirty = true;
        Ok(())
    }

    /// Set a row's buy price (per base unit).
    pub fn set_buy_price(
        &mut self,
        commodity: Commodity,
        id: u64,
        price: f64,
    ) -> Result<(), CoreError> {
        self.ledger_service
            .set_buy_price(self.state.ledger_mut(commodity), id, price)?;
        self.dirty = true;
        Ok(())
    }

    /// Apply a raw field edit from a UI input.
    /// Numeric garbage coerces to zero rather than failing.
    pub fn apply_field_edit(
        &mut self,
        commodity: Commodity,
        id: u64,
        field: TransactionField,
        raw: &str,
    ) -> Result<(), CoreError> {
        self.ledger_service
            .apply_edit(self.state.ledger_mut(commodity), id, field, raw)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a row by id. Remaining rows keep their ids.
    pub fn remove_transaction(&mut self, commodity: Commodity, id: u64) -> Result<(), CoreError> {
        self.ledger_service
            .remove(self.state.ledger_mut(commodity), id)?;
        self.dirty = true;
        Ok(())
    }

    /// Drop every row for a commodity. Its sell price stays.
    pub fn clear_transactions(&mut self, commodity: Commodity) {
        self.ledger_service.clear(self.state.ledger_mut(commodity));
        self.dirty = true;
    }

    /// Replace a commodity's rows with the built-in sample data.
    pub fn load_sample(&mut self, commodity: Commodity) {
        self.ledger_service
            .load_sample(self.state.ledger_mut(commodity), commodity);
        self.dirty = true;
    }

    /// Bulk-replace a commodity's rows (id counter resynchronized).
    pub fn replace_transactions(&mut self, commodity: Commodity, transactions: Vec<Transaction>) {
        self.ledger_service
            .replace_all(self.state.ledger_mut(commodity), transactions);
        self.dirty = true;
    }

    // ── Sell Price ──────────────────────────────────────────────────

    /// Set the current sell price (per base unit) for a commodity.
    pub fn set_sell_price(&mut self, commodity: Commodity, price: f64) {
        self.ledger_service
            .set_sell_price(self.state.ledger_mut(commodity), price);
        self.dirty = true;
    }

    /// Sell-price edit from a raw UI input string (garbage coerces to zero).
    pub fn apply_sell_price_edit(&mut self, commodity: Commodity, raw: &str) {
        self.ledger_service
            .apply_sell_price_edit(self.state.ledger_mut(commodity), raw);
        self.dirty = true;
    }

    #[must_use]
    pub fn sell_price(&self, commodity: Commodity) -> f64 {
        self.state.ledger(commodity).sell_price
    }

    // ── Reads ───────────────────────────────────────────────────────

    #[must_use]
    pub fn ledger(&self, commodity: Commodity) -> &Ledger {
        self.state.ledger(commodity)
    }

    #[must_use]
    pub fn transactions(&self, commodity: Commodity) -> &[Transaction] {
        &self.state.ledger(commodity).transactions
    }

    #[must_use]
    pub fn transaction(&self, commodity: Commodity, id: u64) -> Option<&Transaction> {
        self.state.ledger(commodity).transaction(id)
    }

    #[must_use]
    pub fn transaction_count(&self, commodity: Commodity) -> usize {
        self.state.ledger(commodity).len()
    }

    /// Derived figures for one row, or `None` for an unknown id.
    /// Recomputed on every call — an edit is reflected immediately.
    #[must_use]
    pub fn row(&self, commodity: Commodity, id: u64) -> Option<RowComputed> {
        self.state
            .ledger(commodity)
            .transaction(id)
            .map(|tx| self.summary_service.row_computed(tx, commodity))
    }

    /// Ledger-wide totals against the current sell price.
    /// Always recomputed from scratch; nothing is cached across edits.
    #[must_use]
    pub fn summary(&self, commodity: Commodity) -> Summary {
        self.summary_service
            .summarize(self.state.ledger(commodity), commodity)
    }

    // ── Snapshots ───────────────────────────────────────────────────

    /// Wire snapshot of the full state (both commodities).
    #[must_use]
    pub fn to_snapshot(&self) -> StoreSnapshot {
        self.state.to_snapshot()
    }

    /// Replace the full state from externally supplied data (e.g. an
    /// import). Id counters resynchronize; the tracker is marked dirty
    /// because the new state has not been persisted by us.
    pub fn apply_snapshot(&mut self, snapshot: StoreSnapshot) {
        self.state.apply_snapshot(snapshot);
        self.dirty = true;
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Replace the in-memory state with the store's contents.
    /// Clears the unsaved-changes flag; callers re-read summaries after.
    pub async fn load_from_store(&mut self, store: &dyn LedgerStore) -> Result<(), CoreError> {
        let snapshot = store.fetch_all().await?;
        self.state.apply_snapshot(snapshot);
        self.dirty = false;
        Ok(())
    }

    /// Persist the full state. The in-memory ledgers are untouched whether
    /// or not the save succeeds.
    pub async fn save_to_store(&mut self, store: &dyn LedgerStore) -> Result<(), CoreError> {
        store.save_all(&self.state.to_snapshot()).await?;
        self.dirty = false;
        Ok(())
    }

    /// Reset both the store and the in-memory state to the seed defaults.
    pub async fn clear_store(&mut self, store: &dyn LedgerStore) -> Result<(), CoreError> {
        store.clear_all().await?;
        self.state = TrackerState::new();
        self.dirty = false;
        Ok(())
    }

    /// Returns `true` if the state has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(state: TrackerState) -> Self {
        Self {
            state,
            ledger_service: LedgerService::new(),
            summary_service: SummaryService::new(),
            dirty: false,
        }
    }
}
