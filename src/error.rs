use crate::store::StoreError;

/// Messages returned to callers in failure envelopes.
pub mod messages {
    pub const MISSING_ID: &str = "id manquant";
    pub const MISSING_NAME: &str = "Nom manquant";
    pub const MISSING_WORKFLOW_ID: &str = "workflowId manquant";
    pub const ACTION_NOT_FOUND: &str = "Action non trouvée";
    pub const WORKFLOW_NOT_FOUND: &str = "Workflow non trouvé";
    pub const UNKNOWN_ERROR: &str = "Erreur inconnue";
}

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    Store(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation: {msg}"),
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Store(err) => write!(f, "Storage Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl AppError {
    /// Text carried by the failure envelope.
    pub fn into_message(self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::Store(err) => {
                tracing::error!("Storage error: {err}");
                let msg = err.to_string();
                if msg.trim().is_empty() {
                    messages::UNKNOWN_ERROR.to_string()
                } else {
                    msg
                }
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}
