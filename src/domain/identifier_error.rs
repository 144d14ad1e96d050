#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIdentifier {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{kind} must not contain '{separator}': {value}")]
    ContainsSeparator {
        kind: &'static str,
        separator: char,
        value: String,
    },
}
