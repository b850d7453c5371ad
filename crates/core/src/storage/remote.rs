use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::store::LedgerStore;
use crate::errors::CoreError;
use crate::models::snapshot::StoreSnapshot;

const DEFAULT_BASE_URL: &str = "https://gold-profit-calculator.onrender.com/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The health probe gives up fast so startup never hangs on a dead backend.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

/// Remote HTTP store backed by the tracker's backend API.
///
/// Endpoints: `GET`/`POST`/`DELETE /transactions` for the snapshot,
/// `GET /health` for the availability probe. Responses arrive wrapped in a
/// `{success, data}` envelope; a `success: false` body maps to
/// `CoreError::Store` and never touches in-memory state.
pub struct RemoteStore {
    client: Client,
    base_url: String,
}

impl RemoteStore {
    /// Store pointed at the default backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Store pointed at a custom backend (tests, self-hosted deployments).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn store_error(&self, message: impl Into<String>) -> CoreError {
        CoreError::Store {
            store: self.name().to_string(),
            message: message.into(),
        }
    }
}

impl Default for RemoteStore {
    fn default() -> Self {
        Self::new()
    }
}

// ── API response envelopes ──────────────────────────────────────────

#[derive(Deserialize)]
struct FetchResponse {
    success: bool,
    #[serde(default)]
    data: Option<StoreSnapshot>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct MutationResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

#[async_trait]
impl LedgerStore for RemoteStore {
    fn name(&self) -> &str {
        "remote"
    }

    async fn is_available(&self) -> bool {
        let response = self
            .client
            .get(self.url("health"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await;

        match response.and_then(|r| r.error_for_status()) {
            Ok(resp) => resp
                .json::<HealthResponse>()
                .await
                .map(|h| h.status == "ok")
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn fetch_all(&self) -> Result<StoreSnapshot, CoreError> {
        let resp: FetchResponse = self
            .client
            .get(self.url("transactions"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| self.store_error(format!("failed to parse fetch response: {e}")))?;

        if !resp.success {
            return Err(self.store_error(
                resp.error.unwrap_or_else(|| "fetch rejected".into()),
            ));
        }
        Ok(resp.data.unwrap_or_default())
    }

    async fn save_all(&self, snapshot: &StoreSnapshot) -> Result<(), CoreError> {
        let resp: MutationResponse = self
            .client
            .post(self.url("transactions"))
            .json(snapshot)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| self.store_error(format!("failed to parse save response: {e}")))?;

        if !resp.success {
            return Err(self.store_error(
                resp.error.unwrap_or_else(|| "save rejected".into()),
            ));
        }
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), CoreError> {
        let resp: MutationResponse = self
            .client
            .delete(self.url("transactions"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| self.store_error(format!("failed to parse clear response: {e}")))?;

        if !resp.success {
            return Err(self.store_error(
                resp.error.unwrap_or_else(|| "clear rejected".into()),
            ));
        }
        Ok(())
    }
}
