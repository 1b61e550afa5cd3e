//! Typed access to the storage collections.

pub mod actions;
pub mod workflows;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::store::StoreError;

fn decode<T: DeserializeOwned>(collection: &str, id: &str, value: Value) -> Result<T, StoreError> {
    serde_json::from_value(value)
        .map_err(|e| StoreError::Serialization(format!("{collection}/{id}: {e}")))
}

fn decode_all<T: DeserializeOwned>(
    collection: &str,
    records: BTreeMap<String, Value>,
) -> Result<BTreeMap<String, T>, StoreError> {
    records
        .into_iter()
        .map(|(id, value)| {
            let entity = decode(collection, &id, value)?;
            Ok::<_, StoreError>((id, entity))
        })
        .collect()
}

fn encode<T: Serialize>(entity: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(entity)?)
}
