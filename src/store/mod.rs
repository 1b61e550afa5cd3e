//! Storage contract consumed by the handlers.
//!
//! Records are JSON values grouped into named collections and keyed by id.
//! `MemoryStore` is the in-process implementation; other backends only need
//! to implement [`Storage`].

mod memory;

pub use memory::MemoryStore;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Collection names shared by every backend.
pub mod collections {
    pub const ACTIONS: &str = "actions";
    pub const WORKFLOWS: &str = "workflows";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Backend(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Collection-scoped key-value storage.
///
/// Object safe, so handlers hold it as `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch one record, `None` when absent.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Every record of a collection, keyed by id.
    async fn get_all(&self, collection: &str) -> Result<BTreeMap<String, Value>>;

    /// Insert or overwrite.
    async fn set(&self, collection: &str, id: &str, value: Value) -> Result<()>;

    /// Replace an existing record.
    async fn update(&self, collection: &str, id: &str, value: Value) -> Result<()>;

    /// Remove a record. Removing an absent id is not an error.
    async fn remove(&self, collection: &str, id: &str) -> Result<()>;

    /// Remove a workflow together with whatever the backend ties to it.
    async fn delete_workflow(&self, id: &str) -> Result<()>;
}

pub type SharedStore = Arc<dyn Storage>;
