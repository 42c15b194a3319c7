// ── Core error types ──
//
// Formatting and pagination never fail. The only fallible step in this
// crate is turning a saved snapshot document into a typed model.

use thiserror::Error;

use crate::model::Endpoint;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid /{endpoint} snapshot: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    /// The endpoint whose payload could not be decoded.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Decode { endpoint, .. } => *endpoint,
        }
    }
}
