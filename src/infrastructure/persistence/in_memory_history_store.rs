use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::application::ports::{ConversationHistoryStore, HistoryBackend, HistoryStoreError};
use crate::domain::{ConversationId, Message, UserId};

use super::DashMapHistoryBackend;

/// Process-local history store.
///
/// Every read-modify-write on a conversation runs under that conversation's
/// key lock, so concurrent appends to one id never overwrite each other while
/// appends to different ids proceed independently.
///
/// A key lock exists exactly while its conversation is stored or has an
/// operation in flight.
pub struct InMemoryHistoryStore<B = DashMapHistoryBackend>
where
    B: HistoryBackend,
{
    backend: B,
    key_locks: DashMap<ConversationId, Arc<Mutex<()>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::with_backend(DashMapHistoryBackend::new())
    }

    pub fn contains(&self, conversation_id: &ConversationId) -> bool {
        self.backend.contains(conversation_id)
    }

    /// Number of stored conversations.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> InMemoryHistoryStore<B>
where
    B: HistoryBackend,
{
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key_locks: DashMap::new(),
        }
    }

    /// Number of conversations currently holding a key lock.
    pub fn key_lock_count(&self) -> usize {
        self.key_locks.len()
    }

    fn key_lock(&self, conversation_id: &ConversationId) -> Arc<Mutex<()>> {
        self.key_locks
            .entry(conversation_id.clone())
            .or_default()
            .value()
            .clone()
    }
}

#[async_trait]
impl<B> ConversationHistoryStore for InMemoryHistoryStore<B>
where
    B: HistoryBackend,
{
    #[instrument(skip(self, message), fields(conversation_id = %conversation_id, role = %message.role()))]
    async fn append_message(&self, conversation_id: &ConversationId, message: Message) {
        let lock = self.key_lock(conversation_id);
        let _guard = lock.lock().await;

        let mut history = self.backend.fetch(conversation_id).await.unwrap_or_default();
        history.push(message);
        let length = history.len();
        self.backend.write(conversation_id, history).await;

        tracing::debug!(history_length = length, "Appended message");
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id, history_length = history_length))]
    async fn load_history(
        &self,
        conversation_id: &ConversationId,
        history_length: usize,
    ) -> Result<Vec<Message>, HistoryStoreError> {
        let mut history = self.backend.fetch(conversation_id).await.ok_or_else(|| {
            tracing::warn!("Conversation not found");
            HistoryStoreError::UnknownConversation(conversation_id.to_string())
        })?;

        let start = history.len().saturating_sub(history_length);
        Ok(history.split_off(start))
    }

    #[instrument(skip(self), fields(conversation_id = %conversation_id))]
    async fn delete_history(&self, conversation_id: &ConversationId) {
        // No lock means nothing stored and nothing in flight.
        let Some(lock) = self
            .key_locks
            .get(conversation_id)
            .map(|entry| entry.value().clone())
        else {
            return;
        };

        let _guard = lock.lock().await;

        if self.backend.remove(conversation_id).await {
            tracing::debug!("Deleted conversation");
        }

        // Two references: the map's and ours. Anyone else is waiting on it
        // and will recreate the history, so the lock has to stay.
        self.key_locks
            .remove_if(conversation_id, |_, entry| Arc::strong_count(entry) == 2);
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn load_all_conversations(&self, user_id: &UserId) -> Vec<ConversationId> {
        let mut ids: Vec<ConversationId> = self
            .backend
            .keys()
            .await
            .into_iter()
            .filter(|id| id.belongs_to(user_id))
            .collect();

        ids.sort();
        ids
    }
}
