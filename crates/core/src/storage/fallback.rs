use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::store::LedgerStore;
use crate::errors::CoreError;
use crate::models::snapshot::StoreSnapshot;

/// Primary store with automatic failover to a secondary.
///
/// `connect` probes the primary once and remembers the verdict; operations
/// go to the primary only while it is believed reachable, and any primary
/// failure falls through to the fallback — "could not persist remotely" is
/// downgraded to a local save, never to lost data or corrupted state.
pub struct FallbackStore<P, F> {
    primary: P,
    fallback: F,
    primary_available: AtomicBool,
}

impl<P: LedgerStore, F: LedgerStore> FallbackStore<P, F> {
    /// Wrap a primary and a fallback store. The primary is assumed
    /// unreachable until `connect` has probed it.
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
            primary_available: AtomicBool::new(false),
        }
    }

    /// Probe the primary and remember the result.
    /// Returns whether the primary answered.
    pub async fn connect(&self) -> bool {
        let ok = self.primary.is_available().await;
        self.primary_available.store(ok, Ordering::Relaxed);
        ok
    }

    /// Whether the last probe found the primary reachable.
    #[must_use]
    pub fn primary_connected(&self) -> bool {
        self.primary_available.load(Ordering::Relaxed)
    }

    /// The wrapped primary store.
    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The wrapped fallback store.
    #[must_use]
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

#[async_trait]
impl<P: LedgerStore, F: LedgerStore> LedgerStore for FallbackStore<P, F> {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn is_available(&self) -> bool {
        self.primary_connected() || self.fallback.is_available().await
    }

    async fn fetch_all(&self) -> Result<StoreSnapshot, CoreError> {
        if self.primary_connected() {
            if let Ok(snapshot) = self.primary.fetch_all().await {
                return Ok(snapshot);
            }
        }
        self.fallback.fetch_all().await
    }

    async fn save_all(&self, snapshot: &StoreSnapshot) -> Result<(), CoreError> {
        if self.primary_connected() {
            if self.primary.save_all(snapshot).await.is_ok() {
                return Ok(());
            }
        }
        self.fallback.save_all(snapshot).await
    }

    async fn clear_all(&self) -> Result<(), CoreError> {
        if self.primary_connected() {
            // Best effort: an unreachable primary must not block the clear.
            let _ = self.primary.clear_all().await;
        }
        self.fallback.clear_all().await
    }
}
