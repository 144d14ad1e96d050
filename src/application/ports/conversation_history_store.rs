use async_trait::async_trait;

use crate::domain::{ConversationId, Message, MessageRole, UserId};

use super::HistoryStoreError;

/// Append-only message logs keyed by conversation id.
///
/// Appends to one id are atomic with respect to each other: concurrent
/// saves for the same conversation all land, in the order they acquire it.
#[async_trait]
pub trait ConversationHistoryStore: Send + Sync {
    async fn append_message(&self, conversation_id: &ConversationId, message: Message);

    /// Parses `role`, stamps the message and appends it.
    ///
    /// An unrecognised role fails before anything is written.
    async fn save_history(
        &self,
        conversation_id: &ConversationId,
        role: &str,
        message: &str,
        timestamp_ms: Option<i64>,
    ) -> Result<(), HistoryStoreError> {
        let role = role.parse::<MessageRole>().inspect_err(|e| {
            tracing::warn!(conversation_id = %conversation_id, error = %e, "Rejected message");
        })?;

        self.append_message(
            conversation_id,
            Message::with_timestamp(role, message, timestamp_ms),
        )
        .await;

        Ok(())
    }

    /// Returns the last `history_length` messages, oldest first.
    async fn load_history(
        &self,
        conversation_id: &ConversationId,
        history_length: usize,
    ) -> Result<Vec<Message>, HistoryStoreError>;

    /// Removes a conversation. Missing ids are ignored.
    async fn delete_history(&self, conversation_id: &ConversationId);

    /// Snapshot of the conversation ids owned by `user_id`.
    async fn load_all_conversations(&self, user_id: &UserId) -> Vec<ConversationId>;
}
