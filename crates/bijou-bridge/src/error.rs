//! Bridge error types.

use bijou_data::FetchError;
use thiserror::Error;

/// Errors that can occur in backend adapters.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The configured adapter does not implement this capability.
    #[error("Capability `{capability}` is not implemented for adapter `{adapter}`; wire a provider that supports it")]
    Unsupported { capability: String, adapter: String },

    /// A resource was not found on the backend.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Transport-level HTTP failure.
    #[error(transparent)]
    Http(#[from] FetchError),

    /// The backend payload could not be decoded.
    #[error("Failed to decode backend payload: {0}")]
    Decode(String),
}

impl BridgeError {
    /// Build an unsupported-capability error.
    pub fn unsupported(capability: impl Into<String>, adapter: impl Into<String>) -> Self {
        BridgeError::Unsupported {
            capability: capability.into(),
            adapter: adapter.into(),
        }
    }

    /// Build a not-found error.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        BridgeError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_message_names_capability() {
        let err = BridgeError::unsupported("quotes", "rest-catalog");
        let message = err.to_string();
        assert!(message.contains("quotes"));
        assert!(message.contains("rest-catalog"));
    }
}
