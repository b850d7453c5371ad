use thiserror::Error;

/// Unified error type for the entire bullion-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The computation core is total — garbage input degrades to neutral values
/// instead of raising — so errors only arise at the persistence edges and on
/// lookups that address a missing row.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── File I/O / Codec ────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Network / Store ─────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store error ({store}): {message}")]
    Store {
        store: String,
        message: String,
    },

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Transaction not found: {0}")]
    TransactionNotFound(u64),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so nothing
        // secret a deployment appends to its endpoints ends up in error text.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
