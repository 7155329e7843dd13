//! Message entity <-> model mapper

use pool_core::{Message, Uid};

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Uid::new(model.id),
            pool_id: Uid::new(model.pool_id),
            sender_email: model.sender_email,
            sender_name: model.sender_name,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
