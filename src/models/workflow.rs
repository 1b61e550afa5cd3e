use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a workflow gets started.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerType(String);

impl TriggerType {
    pub const MANUAL: &'static str = "manual";

    pub fn new(kind: impl Into<String>) -> Self {
        TriggerType(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TriggerType {
    fn default() -> Self {
        TriggerType::new(Self::MANUAL)
    }
}

impl From<&str> for TriggerType {
    fn from(kind: &str) -> Self {
        TriggerType::new(kind)
    }
}

impl std::fmt::Display for TriggerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trigger_type: TriggerType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workflow {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        trigger_type: TriggerType,
    ) -> Self {
        let now = Utc::now();
        Workflow {
            id: super::new_id(),
            name: name.into(),
            description: description.into(),
            trigger_type,
            created_at: now,
            updated_at: now,
        }
    }
}
