use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Free-form configuration, interpreted only by whatever executes the action.
pub type ActionConfig = serde_json::Map<String, serde_json::Value>;

/// Kind of step. The set of known kinds belongs to the execution side,
/// so it is carried here as an opaque tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionType(String);

impl ActionType {
    pub fn new(kind: impl Into<String>) -> Self {
        ActionType(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionType {
    fn from(kind: &str) -> Self {
        ActionType::new(kind)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub workflow_id: String,
    pub action_type: ActionType,
    /// Position among the workflow's actions. Not required to be unique or dense.
    pub order: i32,
    pub action_config: ActionConfig,
    pub created_at: DateTime<Utc>,
}

impl Action {
    pub fn new(
        workflow_id: impl Into<String>,
        action_type: ActionType,
        order: i32,
        action_config: ActionConfig,
    ) -> Self {
        Action {
            id: super::new_id(),
            workflow_id: workflow_id.into(),
            action_type,
            order,
            action_config,
            created_at: Utc::now(),
        }
    }
}
