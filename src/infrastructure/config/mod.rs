mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{HistorySettings, LoggingSettings, Settings};
