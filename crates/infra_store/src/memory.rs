//! In-memory document store
//!
//! Adapter implementing the `DocumentStore` port over a map guarded by an
//! async lock. Stands in for the host platform's remote document service
//! in tests and embedded use.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{DocumentStore, PortError};

/// Field the adapter sets when a document is cancelled
pub const CANCELLED_FIELD: &str = "cancelled";

/// Map-backed implementation of the document-store port
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    docs: RwLock<HashMap<(String, String), Value>>,
}

impl MemoryDocumentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored documents
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Returns true if the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }

    fn key(doctype: &str, name: &str) -> (String, String) {
        (doctype.to_string(), name.to_string())
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, doctype: &str, name: &str) -> Result<Value, PortError> {
        self.docs
            .read()
            .await
            .get(&Self::key(doctype, name))
            .cloned()
            .ok_or_else(|| PortError::not_found(doctype, name))
    }

    async fn insert(&self, doctype: &str, name: &str, doc: Value) -> Result<(), PortError> {
        let mut docs = self.docs.write().await;
        let key = Self::key(doctype, name);
        if docs.contains_key(&key) {
            return Err(PortError::conflict(format!(
                "{} {} already exists",
                doctype, name
            )));
        }
        debug!(doctype, name, "document inserted");
        docs.insert(key, doc);
        Ok(())
    }

    async fn update(&self, doctype: &str, name: &str, doc: Value) -> Result<(), PortError> {
        let mut docs = self.docs.write().await;
        let key = Self::key(doctype, name);
        if !docs.contains_key(&key) {
            return Err(PortError::not_found(doctype, name));
        }
        docs.insert(key, doc);
        Ok(())
    }

    async fn cancel(&self, doctype: &str, name: &str) -> Result<(), PortError> {
        // Cancellation keeps the document for audit; it only gets flagged.
        self.set_field(doctype, name, CANCELLED_FIELD, Value::Bool(true))
            .await
    }

    async fn set_field(
        &self,
        doctype: &str,
        name: &str,
        field: &str,
        value: Value,
    ) -> Result<(), PortError> {
        let mut docs = self.docs.write().await;
        let doc = docs
            .get_mut(&Self::key(doctype, name))
            .ok_or_else(|| PortError::not_found(doctype, name))?;

        match doc {
            Value::Object(map) => {
                map.insert(field.to_string(), value);
                Ok(())
            }
            _ => Err(PortError::internal(format!(
                "{} {} is not an object document",
                doctype, name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryDocumentStore::new();
        store
            .insert("Claim", "CLM-1", json!({ "status": "Unreconciled" }))
            .await
            .unwrap();

        let doc = store.get("Claim", "CLM-1").await.unwrap();
        assert_eq!(doc["status"], "Unreconciled");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_twice_conflicts() {
        let store = MemoryDocumentStore::new();
        store.insert("Claim", "CLM-1", json!({})).await.unwrap();

        let result = store.insert("Claim", "CLM-1", json!({})).await;
        assert!(matches!(result, Err(PortError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_get_missing_document() {
        let store = MemoryDocumentStore::new();
        let result = store.get("Claim", "CLM-404").await;
        assert!(result.err().map(|e| e.is_not_found()).unwrap_or(false));
    }

    #[tokio::test]
    async fn test_update_requires_existing() {
        let store = MemoryDocumentStore::new();
        let result = store.update("Claim", "CLM-1", json!({})).await;
        assert!(matches!(result, Err(PortError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_cancel_flags_without_deleting() {
        let store = MemoryDocumentStore::new();
        store
            .insert("Ledger Entry", "LE-1", json!({ "remarks": "Settlement" }))
            .await
            .unwrap();

        store.cancel("Ledger Entry", "LE-1").await.unwrap();

        let doc = store.get("Ledger Entry", "LE-1").await.unwrap();
        assert_eq!(doc[CANCELLED_FIELD], true);
        assert_eq!(doc["remarks"], "Settlement");
    }

    #[tokio::test]
    async fn test_set_field_on_non_object_fails() {
        let store = MemoryDocumentStore::new();
        store.insert("Raw", "R-1", json!("scalar")).await.unwrap();

        let result = store.set_field("Raw", "R-1", "status", json!("x")).await;
        assert!(matches!(result, Err(PortError::Internal { .. })));
    }
}
