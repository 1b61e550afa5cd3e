pub mod config;
pub mod error;
pub mod envelope;
pub mod models;
pub mod store;
pub mod db;
pub mod handlers;
pub mod telemetry;

pub use envelope::MessageResponse;
pub use handlers::{ActionHandler, EntityRef, WorkflowHandler};
pub use store::{MemoryStore, SharedStore, Storage, StoreError};
