use async_trait::async_trait;

use crate::domain::{ConversationId, Message};

/// Key-value medium a history store keeps its message lists in.
///
/// Operations are individually atomic but a fetch followed by a write is
/// not; callers serialize read-modify-write cycles per key themselves.
#[async_trait]
pub trait HistoryBackend: Send + Sync {
    /// Owned copy of the stored history, if any.
    async fn fetch(&self, conversation_id: &ConversationId) -> Option<Vec<Message>>;

    async fn write(&self, conversation_id: &ConversationId, history: Vec<Message>);

    /// Returns whether an entry was removed.
    async fn remove(&self, conversation_id: &ConversationId) -> bool;

    async fn keys(&self) -> Vec<ConversationId>;
}
