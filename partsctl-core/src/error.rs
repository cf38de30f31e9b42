/// Structured error types for partsctl-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// Binary crates (partsctl-cli, partsctl-tui) can still use `anyhow` for
/// convenience, but library consumers get structured, composable errors.

use thiserror::Error;

/// Main error type for partsctl-core operations
#[derive(Error, Debug)]
pub enum PartsError {
    /// Network or connectivity failure talking to the remote table
    #[error("transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The remote table rejected the query (non-2xx response)
    #[error("query failed ({status}): {message}")]
    Query { status: u16, message: String },

    /// An update, delete, or lookup matched no row
    #[error("no part with id {id}")]
    NoRows { id: i64 },

    /// Response body did not parse as the expected shape
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for partsctl-core operations
pub type Result<T> = std::result::Result<T, PartsError>;

impl PartsError {
    /// Create a query error from a response status and message
    pub fn query(status: u16, message: impl Into<String>) -> Self {
        Self::Query {
            status,
            message: message.into(),
        }
    }

    /// Create a no-rows error for the given identifier
    pub fn no_rows(id: i64) -> Self {
        Self::NoRows { id }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True for errors in the query class (bad filter, missing row,
    /// constraint violation) as opposed to transport failures.
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query { .. } | Self::NoRows { .. })
    }
}
