use async_trait::async_trait;
use dashmap::DashMap;

use crate::application::ports::HistoryBackend;
use crate::domain::{ConversationId, Message};

#[derive(Default)]
pub struct DashMapHistoryBackend {
    histories: DashMap<ConversationId, Vec<Message>>,
}

impl DashMapHistoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, conversation_id: &ConversationId) -> bool {
        self.histories.contains_key(conversation_id)
    }

    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}

#[async_trait]
impl HistoryBackend for DashMapHistoryBackend {
    async fn fetch(&self, conversation_id: &ConversationId) -> Option<Vec<Message>> {
        self.histories
            .get(conversation_id)
            .map(|history| history.value().clone())
    }

    async fn write(&self, conversation_id: &ConversationId, history: Vec<Message>) {
        self.histories.insert(conversation_id.clone(), history);
    }

    async fn remove(&self, conversation_id: &ConversationId) -> bool {
        self.histories.remove(conversation_id).is_some()
    }

    async fn keys(&self) -> Vec<ConversationId> {
        self.histories
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }
}
