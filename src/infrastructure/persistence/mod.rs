mod dashmap_history_backend;
mod in_memory_history_store;

pub use dashmap_history_backend::DashMapHistoryBackend;
pub use in_memory_history_store::InMemoryHistoryStore;
