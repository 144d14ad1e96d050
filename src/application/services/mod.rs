mod chat_history_service;

pub use chat_history_service::ChatHistoryService;
