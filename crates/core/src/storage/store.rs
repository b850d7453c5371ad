use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::snapshot::StoreSnapshot;

/// Trait abstraction for every persistence backend (remote API, local file).
///
/// All backends speak the same `StoreSnapshot` shape, so the core never
/// special-cases its data source — a degraded or offline backend is
/// indistinguishable from the primary one above this seam.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Cheap availability probe. Never errors — an unreachable store is
    /// simply unavailable.
    async fn is_available(&self) -> bool;

    /// Fetch the complete persisted state.
    async fn fetch_all(&self) -> Result<StoreSnapshot, CoreError>;

    /// Persist the complete state. Idempotent — saving the same snapshot
    /// twice leaves the store in the same state.
    async fn save_all(&self, snapshot: &StoreSnapshot) -> Result<(), CoreError>;

    /// Reset the store to the empty snapshot (no rows, seed sell prices).
    async fn clear_all(&self) -> Result<(), CoreError>;
}
