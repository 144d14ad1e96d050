use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ConversationHistoryStore, HistoryStoreError};
use crate::domain::{ConversationId, Message, MessageRole, UserId};
use crate::infrastructure::config::HistorySettings;

pub struct ChatHistoryService<S>
where
    S: ConversationHistoryStore,
{
    store: Arc<S>,
    default_history_length: usize,
}

impl<S> ChatHistoryService<S>
where
    S: ConversationHistoryStore,
{
    pub fn new(store: Arc<S>, default_history_length: usize) -> Self {
        Self {
            store,
            default_history_length,
        }
    }

    pub fn from_settings(store: Arc<S>, settings: &HistorySettings) -> Self {
        Self::new(store, settings.default_history_length)
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Allocates a fresh id for `user`. Nothing is stored until the first save.
    pub fn start_conversation(&self, user: &UserId) -> ConversationId {
        ConversationId::for_user(user, Uuid::new_v4())
    }

    /// Stores one human turn followed by the AI reply.
    #[instrument(skip(self, human, ai), fields(conversation_id = %conversation_id))]
    pub async fn record_exchange(&self, conversation_id: &ConversationId, human: &str, ai: &str) {
        self.store
            .append_message(conversation_id, Message::new(MessageRole::Human, human))
            .await;
        self.store
            .append_message(conversation_id, Message::new(MessageRole::Ai, ai))
            .await;
    }

    pub async fn recent_messages(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<Message>, HistoryStoreError> {
        self.store
            .load_history(conversation_id, self.default_history_length)
            .await
    }

    pub async fn conversations_for(&self, user: &UserId) -> Vec<ConversationId> {
        self.store.load_all_conversations(user).await
    }

    pub async fn end_conversation(&self, conversation_id: &ConversationId) {
        self.store.delete_history(conversation_id).await;
    }
}
