mod conversation_id;
mod identifier_error;
mod message;
mod message_role;
mod user_id;

pub use conversation_id::{ConversationId, USER_SEPARATOR};
pub use identifier_error::InvalidIdentifier;
pub use message::Message;
pub use message_role::{MessageRole, UnknownRole};
pub use user_id::UserId;
