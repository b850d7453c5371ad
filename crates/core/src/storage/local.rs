use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;

use super::store::LedgerStore;
use crate::errors::CoreError;
use crate::models::snapshot::StoreSnapshot;

/// Local JSON-file store — the offline fallback.
///
/// The file holds one `StoreSnapshot` as pretty JSON. Files written before
/// the silver ledger existed (only `transactions`/`sellPrice`) decode through
/// the snapshot's field defaults, so no separate migration step is needed.
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LedgerStore for LocalStore {
    fn name(&self) -> &str {
        "local"
    }

    async fn is_available(&self) -> bool {
        // The filesystem is always addressable; actual failures surface from
        // save_all/fetch_all as FileIO.
        true
    }

    async fn fetch_all(&self) -> Result<StoreSnapshot, CoreError> {
        if !self.path.exists() {
            // First run: nothing persisted yet.
            return Ok(StoreSnapshot::empty());
        }

        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|e| {
            CoreError::Deserialization(format!(
                "invalid ledger file {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn save_all(&self, snapshot: &StoreSnapshot) -> Result<(), CoreError> {
        let mut stamped = snapshot.clone();
        stamped.last_updated = Some(Utc::now());

        let json = serde_json::to_string_pretty(&stamped)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), CoreError> {
        self.save_all(&StoreSnapshot::empty()).await
    }
}
