#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use flowkeeper::config::Config;
use flowkeeper::handlers::actions::CreateAction;
use flowkeeper::handlers::workflows::{CreateWorkflow, WorkflowSummary};
use flowkeeper::models::{Action, ActionType};
use flowkeeper::store::Result;
use flowkeeper::{ActionHandler, MemoryStore, Storage, StoreError, WorkflowHandler};

/// Wraps a `MemoryStore` and counts every mutating call.
pub struct CountingStore {
    pub inner: MemoryStore,
    writes: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Storage for CountingStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        self.inner.get(collection, id).await
    }

    async fn get_all(&self, collection: &str) -> Result<BTreeMap<String, Value>> {
        self.inner.get_all(collection).await
    }

    async fn set(&self, collection: &str, id: &str, value: Value) -> Result<()> {
        self.record_write();
        self.inner.set(collection, id, value).await
    }

    async fn update(&self, collection: &str, id: &str, value: Value) -> Result<()> {
        self.record_write();
        self.inner.update(collection, id, value).await
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<()> {
        self.record_write();
        self.inner.remove(collection, id).await
    }

    async fn delete_workflow(&self, id: &str) -> Result<()> {
        self.record_write();
        self.inner.delete_workflow(id).await
    }
}

/// Store whose every call fails with the given message.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        Err(StoreError::Backend(self.message.clone()))
    }
}

#[async_trait]
impl Storage for FailingStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Value>> {
        self.fail()
    }

    async fn get_all(&self, _collection: &str) -> Result<BTreeMap<String, Value>> {
        self.fail()
    }

    async fn set(&self, _collection: &str, _id: &str, _value: Value) -> Result<()> {
        self.fail()
    }

    async fn update(&self, _collection: &str, _id: &str, _value: Value) -> Result<()> {
        self.fail()
    }

    async fn remove(&self, _collection: &str, _id: &str) -> Result<()> {
        self.fail()
    }

    async fn delete_workflow(&self, _id: &str) -> Result<()> {
        self.fail()
    }
}

/// Both handlers wired to one counting in-memory store.
pub struct TestApp {
    pub store: Arc<CountingStore>,
    pub actions: ActionHandler,
    pub workflows: WorkflowHandler,
}

impl TestApp {
    /// Create a workflow, return its summary.
    pub async fn create_workflow(&self, name: &str) -> WorkflowSummary {
        self.workflows
            .handle_create(CreateWorkflow {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .into_result()
            .expect("create workflow failed")
    }

    /// Create an action under a workflow, return the stored action.
    pub async fn create_action(&self, workflow_id: &str, action_type: &str, order: i32) -> Action {
        self.actions
            .handle_create(CreateAction {
                workflow_id: workflow_id.to_string(),
                action_type: ActionType::new(action_type),
                order,
                action_config: config(json!({ "url": "https://example.com/hook" })),
            })
            .await
            .into_result()
            .expect("create action failed")
    }
}

pub fn spawn_app() -> TestApp {
    flowkeeper::telemetry::init_tracing(&Config {
        log_level: "warn".to_string(),
        ..Config::default()
    });

    let store = Arc::new(CountingStore::new());
    TestApp {
        actions: ActionHandler::new(store.clone()),
        workflows: WorkflowHandler::new(store.clone()),
        store,
    }
}

/// Handlers over a store that always fails with `message`.
pub fn failing_app(message: &str) -> (ActionHandler, WorkflowHandler) {
    let store = Arc::new(FailingStore::new(message));
    (ActionHandler::new(store.clone()), WorkflowHandler::new(store))
}

/// Turn a JSON object literal into an action config.
pub fn config(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
