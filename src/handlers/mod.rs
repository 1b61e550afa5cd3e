pub mod actions;
pub mod workflows;

pub use actions::ActionHandler;
pub use workflows::WorkflowHandler;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// `{ id }`, both as a request addressing one entity and as the reply of
/// operations that only confirm which entity they touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(default)]
    pub id: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        EntityRef { id: id.into() }
    }
}

/// Rejects missing or whitespace-only values.
fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        tracing::debug!("Rejected request: {message}");
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}
