use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::db;
use crate::envelope::MessageResponse;
use crate::error::{AppError, messages};
use crate::models::{TriggerType, Workflow};
use crate::store::SharedStore;

use super::{EntityRef, require};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateWorkflow {
    pub name: String,
    pub description: Option<String>,
    pub trigger_type: Option<TriggerType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateWorkflow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub trigger_type: Option<TriggerType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
}

impl From<&Workflow> for WorkflowSummary {
    fn from(workflow: &Workflow) -> Self {
        WorkflowSummary {
            id: workflow.id.clone(),
            name: workflow.name.clone(),
        }
    }
}

#[derive(Clone)]
pub struct WorkflowHandler {
    store: SharedStore,
    default_trigger: TriggerType,
}

impl WorkflowHandler {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            default_trigger: TriggerType::default(),
        }
    }

    pub fn with_config(store: SharedStore, config: &Config) -> Self {
        Self {
            store,
            default_trigger: config.default_trigger.clone(),
        }
    }

    pub async fn handle_list(&self) -> MessageResponse<BTreeMap<String, Workflow>> {
        self.list().await.into()
    }

    pub async fn handle_get(&self, req: EntityRef) -> MessageResponse<Workflow> {
        self.get(req).await.into()
    }

    pub async fn handle_create(&self, req: CreateWorkflow) -> MessageResponse<WorkflowSummary> {
        self.create(req).await.into()
    }

    pub async fn handle_update(&self, req: UpdateWorkflow) -> MessageResponse<WorkflowSummary> {
        self.update(req).await.into()
    }

    pub async fn handle_delete(&self, req: EntityRef) -> MessageResponse<EntityRef> {
        self.delete(req).await.into()
    }

    /// Confirms the workflow exists. Running its actions happens elsewhere.
    pub async fn handle_execute(&self, req: EntityRef) -> MessageResponse<EntityRef> {
        self.execute(req).await.into()
    }

    async fn list(&self) -> Result<BTreeMap<String, Workflow>, AppError> {
        Ok(db::workflows::list_all(self.store.as_ref()).await?)
    }

    async fn get(&self, req: EntityRef) -> Result<Workflow, AppError> {
        require(&req.id, messages::MISSING_ID)?;
        self.find(&req.id).await
    }

    async fn create(&self, req: CreateWorkflow) -> Result<WorkflowSummary, AppError> {
        require(&req.name, messages::MISSING_NAME)?;

        let workflow = Workflow::new(
            req.name,
            req.description.unwrap_or_default(),
            req.trigger_type.unwrap_or_else(|| self.default_trigger.clone()),
        );
        db::workflows::create(self.store.as_ref(), &workflow).await?;

        tracing::info!("Workflow {} created ({})", workflow.id, workflow.trigger_type);
        Ok(WorkflowSummary::from(&workflow))
    }

    async fn update(&self, req: UpdateWorkflow) -> Result<WorkflowSummary, AppError> {
        require(&req.id, messages::MISSING_ID)?;
        require(&req.name, messages::MISSING_NAME)?;

        let mut workflow = self.find(&req.id).await?;
        workflow.name = req.name;
        if let Some(description) = req.description {
            workflow.description = description;
        }
        if let Some(trigger_type) = req.trigger_type {
            workflow.trigger_type = trigger_type;
        }
        workflow.updated_at = chrono::Utc::now();

        db::workflows::update(self.store.as_ref(), &workflow).await?;

        tracing::info!("Workflow {} updated", workflow.id);
        Ok(WorkflowSummary::from(&workflow))
    }

    async fn delete(&self, req: EntityRef) -> Result<EntityRef, AppError> {
        require(&req.id, messages::MISSING_ID)?;
        db::workflows::delete(self.store.as_ref(), &req.id).await?;

        tracing::info!("Workflow {} deleted", req.id);
        Ok(req)
    }

    async fn execute(&self, req: EntityRef) -> Result<EntityRef, AppError> {
        require(&req.id, messages::MISSING_ID)?;
        let workflow = self.find(&req.id).await?;

        tracing::info!("Workflow {} execution requested", workflow.id);
        Ok(EntityRef::new(workflow.id))
    }

    async fn find(&self, id: &str) -> Result<Workflow, AppError> {
        db::workflows::find_by_id(self.store.as_ref(), id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::WORKFLOW_NOT_FOUND.to_string()))
    }
}
