use crate::errors::CoreError;
use crate::models::commodity::Commodity;
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionField};

/// CRUD over a single commodity ledger.
///
/// Pure business logic — no I/O. Every mutating operation leaves the ledger
/// consistent: ids stay unique and the id counter stays above all of them.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a fresh default row (one base unit at price zero).
    /// Returns the new row's id.
    pub fn add(&self, ledger: &mut Ledger, commodity: Commodity) -> u64 {
        let id = ledger.next_id();
        ledger.transactions.push(Transaction::new(id, commodity));
        id
    }

    /// Append a row with explicit values. Numeric inputs pass through the
    /// fail-soft coercion, same as field edits.
    pub fn add_with(
        &self,
        ledger: &mut Ledger,
        qty: f64,
        unit: impl Into<String>,
        buy_price: f64,
    ) -> u64 {
        let id = ledger.next_id();
        ledger.transactions.push(Transaction::with_values(
            id,
            coerce_non_negative(qty),
            unit,
            coerce_non_negative(buy_price),
        ));
        id
    }

    /// Set a row's quantity in place.
    pub fn set_qty(&self, ledger: &mut Ledger, id: u64, qty: f64) -> Result<(), CoreError> {
        let tx = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        tx.qty = coerce_non_negative(qty);
        Ok(())
    }

    /// Set a row's unit label in place. Unknown labels are kept as-is; the
    /// conversion table treats them as base-unit quantities.
    pub fn set_unit(
        &self,
        ledger: &mut Ledger,
        id: u64,
        unit: impl Into<String>,
    ) -> Result<(), CoreError> {
        let tx = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        tx.unit = unit.into();
        Ok(())
    }

    /// Set a row's buy price in place.
    pub fn set_buy_price(&self, ledger: &mut Ledger, id: u64, price: f64) -> Result<(), CoreError> {
        let tx = ledger
            .transaction_mut(id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        tx.buy_price = coerce_non_negative(price);
        Ok(())
    }

    /// Apply a raw field edit as it arrives from a UI input.
    /// Numeric fields parse fail-soft: garbage becomes zero.
    pub fn apply_edit(
        &self,
        ledger: &mut Ledger,
        id: u64,
        field: TransactionField,
        raw: &str,
    ) -> Result<(), CoreError> {
        match field {
            TransactionField::Qty => self.set_qty(ledger, id, parse_or_zero(raw)),
            TransactionField::BuyPrice => self.set_buy_price(ledger, id, parse_or_zero(raw)),
            TransactionField::Unit => self.set_unit(ledger, id, raw.trim()),
        }
    }

    /// Delete a row by id. Remaining rows keep their ids and order.
    pub fn remove(&self, ledger: &mut Ledger, id: u64) -> Result<(), CoreError> {
        let idx = ledger
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::TransactionNotFound(id))?;
        ledger.transactions.remove(idx);
        Ok(())
    }

    /// Replace the whole transaction list (e.g. from a loaded snapshot) and
    /// resynchronize the id counter.
    pub fn replace_all(&self, ledger: &mut Ledger, transactions: Vec<Transaction>) {
        ledger.transactions = transactions;
        ledger.resync_id_counter();
    }

    /// Drop every row and reset the counter. The sell price stays.
    pub fn clear(&self, ledger: &mut Ledger) {
        ledger.transactions.clear();
        ledger.id_counter = 0;
    }

    /// Replace the ledger contents with the built-in sample rows.
    pub fn load_sample(&self, ledger: &mut Ledger, commodity: Commodity) {
        let sample = Ledger::sample(commodity);
        ledger.transactions = sample.transactions;
        ledger.id_counter = sample.id_counter;
    }

    /// Set the current sell price, with the same coercion policy as fields.
    pub fn set_sell_price(&self, ledger: &mut Ledger, price: f64) {
        ledger.sell_price = coerce_non_negative(price);
    }

    /// Sell-price edit from a raw UI input string.
    pub fn apply_sell_price_edit(&self, ledger: &mut Ledger, raw: &str) {
        self.set_sell_price(ledger, parse_or_zero(raw));
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Fail-soft numeric policy: anything that is not a usable non-negative
/// number becomes the neutral zero.
fn coerce_non_negative(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(coerce_non_negative)
        .unwrap_or(0.0)
}
