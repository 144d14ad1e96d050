use crate::domain::UnknownRole;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown conversation_id: {0}")]
    UnknownConversation(String),
}

impl From<UnknownRole> for HistoryStoreError {
    fn from(err: UnknownRole) -> Self {
        HistoryStoreError::UnknownRole(err.0)
    }
}
