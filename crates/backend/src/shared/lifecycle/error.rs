use thiserror::Error;

/// Rejected status change
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition for {collection}: {from} -> {to}")]
    InvalidTransition {
        collection: &'static str,
        from: &'static str,
        to: &'static str,
    },
}

/// Failure of a user-triggered record action
#[derive(Debug, Error)]
pub enum ActionError {
    /// The record is no longer in the collection; the caller should refetch
    #[error("{collection} record not found: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    /// External commit failed; the local change has been rolled back
    #[error("Failed to persist {collection} record {id}: {source}")]
    PersistenceFailure {
        collection: &'static str,
        id: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ActionError {
    /// Text for the non-blocking toast shown to the operator
    pub fn user_message(&self) -> String {
        match self {
            ActionError::NotFound { .. } => "记录不存在或已被删除，请刷新列表".to_string(),
            ActionError::InvalidTransition(_) => "当前状态不允许该操作".to_string(),
            ActionError::PersistenceFailure { .. } => "操作失败，请稍后重试".to_string(),
        }
    }

    pub fn should_refetch(&self) -> bool {
        matches!(self, ActionError::NotFound { .. })
    }
}
