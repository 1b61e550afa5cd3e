use std::collections::BTreeMap;

use crate::models::Workflow;
use crate::store::collections::WORKFLOWS;
use crate::store::{Storage, StoreError};

use super::{decode, decode_all, encode};

pub async fn list_all(store: &dyn Storage) -> Result<BTreeMap<String, Workflow>, StoreError> {
    let records = store.get_all(WORKFLOWS).await?;
    decode_all(WORKFLOWS, records)
}

pub async fn find_by_id(store: &dyn Storage, id: &str) -> Result<Option<Workflow>, StoreError> {
    store
        .get(WORKFLOWS, id)
        .await?
        .map(|value| decode(WORKFLOWS, id, value))
        .transpose()
}

pub async fn create(store: &dyn Storage, workflow: &Workflow) -> Result<(), StoreError> {
    store.set(WORKFLOWS, &workflow.id, encode(workflow)?).await
}

pub async fn update(store: &dyn Storage, workflow: &Workflow) -> Result<(), StoreError> {
    store.update(WORKFLOWS, &workflow.id, encode(workflow)?).await
}

/// Cascading delete, reconciled by the backend.
pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), StoreError> {
    store.delete_workflow(id).await
}
