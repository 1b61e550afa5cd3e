use std::collections::BTreeMap;

use crate::models::Action;
use crate::store::collections::ACTIONS;
use crate::store::{Storage, StoreError};

use super::{decode, decode_all, encode};

pub async fn list_all(store: &dyn Storage) -> Result<BTreeMap<String, Action>, StoreError> {
    let records = store.get_all(ACTIONS).await?;
    decode_all(ACTIONS, records)
}

/// Actions of one workflow, by `order` then creation time.
pub async fn list_by_workflow(
    store: &dyn Storage,
    workflow_id: &str,
) -> Result<Vec<Action>, StoreError> {
    let mut actions: Vec<Action> = list_all(store)
        .await?
        .into_values()
        .filter(|action| action.workflow_id == workflow_id)
        .collect();
    actions.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
    Ok(actions)
}

pub async fn find_by_id(store: &dyn Storage, id: &str) -> Result<Option<Action>, StoreError> {
    store
        .get(ACTIONS, id)
        .await?
        .map(|value| decode(ACTIONS, id, value))
        .transpose()
}

pub async fn create(store: &dyn Storage, action: &Action) -> Result<(), StoreError> {
    store.set(ACTIONS, &action.id, encode(action)?).await
}

pub async fn update(store: &dyn Storage, action: &Action) -> Result<(), StoreError> {
    store.update(ACTIONS, &action.id, encode(action)?).await
}

pub async fn delete(store: &dyn Storage, id: &str) -> Result<(), StoreError> {
    store.remove(ACTIONS, id).await
}
