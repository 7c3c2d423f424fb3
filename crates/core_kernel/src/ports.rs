//! Document-store port
//!
//! The host platform persists documents in a remote document service keyed
//! by document-type and name. Domain crates depend only on this trait;
//! adapters (in-memory, remote) implement it. All operations are
//! request/response: the caller awaits each call before issuing the next.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// A unified error all adapters map into, so domain code handles remote
/// failures uniformly regardless of the backing store.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested document was not found
    #[error("Not found: {doctype} {name}")]
    NotFound { doctype: String, name: String },

    /// The document failed a store-side validation
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying store failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal adapter error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(doctype: impl Into<String>, name: impl fmt::Display) -> Self {
        PortError::NotFound {
            doctype: doctype.into(),
            name: name.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }

    /// Returns true if this error indicates the document was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Port for the host platform's document store
///
/// Documents travel as JSON values; the store is keyed by
/// (document-type, name). `cancel` marks a document cancelled rather than
/// deleting it, matching the host platform's docstatus semantics.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a document
    async fn get(&self, doctype: &str, name: &str) -> Result<Value, PortError>;

    /// Inserts a new document under the given name
    async fn insert(&self, doctype: &str, name: &str, doc: Value) -> Result<(), PortError>;

    /// Replaces an existing document
    async fn update(&self, doctype: &str, name: &str, doc: Value) -> Result<(), PortError>;

    /// Marks a document cancelled
    async fn cancel(&self, doctype: &str, name: &str) -> Result<(), PortError>;

    /// Sets a single field on an existing document
    async fn set_field(
        &self,
        doctype: &str,
        name: &str,
        field: &str,
        value: Value,
    ) -> Result<(), PortError>;
}
