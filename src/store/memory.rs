use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::collections::{ACTIONS, WORKFLOWS};
use super::{Result, Storage, StoreError};

/// In-memory backend, shared safely between tasks.
pub struct MemoryStore {
    /// collection -> (id -> record)
    collections: DashMap<String, BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// Number of records currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|records| records.len())
            .unwrap_or(0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|records| records.get(id).cloned()))
    }

    async fn get_all(&self, collection: &str) -> Result<BTreeMap<String, Value>> {
        Ok(self
            .collections
            .get(collection)
            .map(|records| records.clone())
            .unwrap_or_default())
    }

    async fn set(&self, collection: &str, id: &str, value: Value) -> Result<()> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), value);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, value: Value) -> Result<()> {
        let not_found = || StoreError::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        };

        let Some(mut records) = self.collections.get_mut(collection) else {
            return Err(not_found());
        };
        let slot = records.get_mut(id).ok_or_else(not_found)?;
        *slot = value;
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<()> {
        if let Some(mut records) = self.collections.get_mut(collection) {
            records.remove(id);
        }
        Ok(())
    }

    async fn delete_workflow(&self, id: &str) -> Result<()> {
        if let Some(mut workflows) = self.collections.get_mut(WORKFLOWS) {
            workflows.remove(id);
        }

        // Cascade to the workflow's actions
        if let Some(mut actions) = self.collections.get_mut(ACTIONS) {
            let before = actions.len();
            actions.retain(|_, action| {
                action.get("workflowId").and_then(Value::as_str) != Some(id)
            });
            tracing::debug!("Removed {} actions of workflow {id}", before - actions.len());
        }

        Ok(())
    }
}
