mod action;
mod workflow;

pub use action::{Action, ActionConfig, ActionType};
pub use workflow::{TriggerType, Workflow};

/// Fresh identifier for a new entity.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
