mod conversation_history_store;
mod history_backend;
mod history_store_error;

pub use conversation_history_store::ConversationHistoryStore;
pub use history_backend::HistoryBackend;
pub use history_store_error::HistoryStoreError;
