use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::db;
use crate::envelope::MessageResponse;
use crate::error::{AppError, messages};
use crate::models::{Action, ActionConfig, ActionType};
use crate::store::SharedStore;

use super::{EntityRef, require};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListByWorkflow {
    #[serde(default)]
    pub workflow_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAction {
    pub workflow_id: String,
    pub action_type: ActionType,
    pub order: i32,
    pub action_config: ActionConfig,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAction {
    pub id: String,
    pub workflow_id: Option<String>,
    pub action_type: Option<ActionType>,
    pub order: Option<i32>,
    pub action_config: Option<ActionConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReorderAction {
    pub id: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOrder {
    pub id: String,
    pub order: i32,
}

/// Actions of every workflow, addressed by id or by owning `workflowId`.
#[derive(Clone)]
pub struct ActionHandler {
    store: SharedStore,
}

impl ActionHandler {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn handle_list(&self) -> MessageResponse<BTreeMap<String, Action>> {
        self.list().await.into()
    }

    pub async fn handle_list_by_workflow(&self, req: ListByWorkflow) -> MessageResponse<Vec<Action>> {
        self.list_by_workflow(req).await.into()
    }

    pub async fn handle_get(&self, req: EntityRef) -> MessageResponse<Action> {
        self.get(req).await.into()
    }

    pub async fn handle_create(&self, req: CreateAction) -> MessageResponse<Action> {
        self.create(req).await.into()
    }

    pub async fn handle_update(&self, req: UpdateAction) -> MessageResponse<Action> {
        self.update(req).await.into()
    }

    pub async fn handle_delete(&self, req: EntityRef) -> MessageResponse<EntityRef> {
        self.delete(req).await.into()
    }

    pub async fn handle_reorder(&self, req: ReorderAction) -> MessageResponse<ActionOrder> {
        self.reorder(req).await.into()
    }

    async fn list(&self) -> Result<BTreeMap<String, Action>, AppError> {
        Ok(db::actions::list_all(self.store.as_ref()).await?)
    }

    async fn list_by_workflow(&self, req: ListByWorkflow) -> Result<Vec<Action>, AppError> {
        require(&req.workflow_id, messages::MISSING_WORKFLOW_ID)?;
        Ok(db::actions::list_by_workflow(self.store.as_ref(), &req.workflow_id).await?)
    }

    async fn get(&self, req: EntityRef) -> Result<Action, AppError> {
        self.find(&req.id).await
    }

    async fn create(&self, req: CreateAction) -> Result<Action, AppError> {
        require(&req.workflow_id, messages::MISSING_WORKFLOW_ID)?;

        let action = Action::new(req.workflow_id, req.action_type, req.order, req.action_config);
        db::actions::create(self.store.as_ref(), &action).await?;

        tracing::info!(
            "Action {} created in workflow {} at order {}",
            action.id,
            action.workflow_id,
            action.order
        );
        Ok(action)
    }

    async fn update(&self, req: UpdateAction) -> Result<Action, AppError> {
        if let Some(workflow_id) = &req.workflow_id {
            require(workflow_id, messages::MISSING_WORKFLOW_ID)?;
        }

        let mut action = self.find(&req.id).await?;
        if let Some(workflow_id) = req.workflow_id {
            action.workflow_id = workflow_id;
        }
        if let Some(action_type) = req.action_type {
            action.action_type = action_type;
        }
        if let Some(order) = req.order {
            action.order = order;
        }
        if let Some(action_config) = req.action_config {
            action.action_config = action_config;
        }

        db::actions::update(self.store.as_ref(), &action).await?;

        tracing::info!("Action {} updated", action.id);
        Ok(action)
    }

    async fn delete(&self, req: EntityRef) -> Result<EntityRef, AppError> {
        db::actions::delete(self.store.as_ref(), &req.id).await?;

        tracing::info!("Action {} deleted", req.id);
        Ok(req)
    }

    async fn reorder(&self, req: ReorderAction) -> Result<ActionOrder, AppError> {
        let mut action = self.find(&req.id).await?;
        action.order = req.order;
        db::actions::update(self.store.as_ref(), &action).await?;

        tracing::info!("Action {} moved to order {}", action.id, action.order);
        Ok(ActionOrder {
            id: action.id,
            order: action.order,
        })
    }

    async fn find(&self, id: &str) -> Result<Action, AppError> {
        db::actions::find_by_id(self.store.as_ref(), id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::ACTION_NOT_FOUND.to_string()))
    }
}
