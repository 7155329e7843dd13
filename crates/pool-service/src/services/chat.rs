//! Chat service
//!
//! Membership-gated chat scoped to a single pool.

use chrono::Utc;
use tracing::{info, instrument};

use pool_core::{DomainError, Identity, Message, Uid, MESSAGE_FETCH_LIMIT};

use crate::dto::{MessageResponse, PostMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::pool::PoolService;

/// Maximum stored message length
const MESSAGE_MAX_CHARS: usize = 2000;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List recent messages for a pool, oldest first
    #[instrument(skip(self, viewer), fields(viewer = %viewer.email))]
    pub async fn list_messages(
        &self,
        pool_id: Uid,
        viewer: &Identity,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let pool = self.require_pool(pool_id).await?;
        PoolService::new(self.ctx)
            .require_membership(&pool, viewer)
            .await?;

        let messages = self
            .ctx
            .message_repo()
            .list(pool_id, MESSAGE_FETCH_LIMIT)
            .await?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Post a message to a pool's chat
    ///
    /// Whitespace-only content is rejected before anything is stored.
    #[instrument(skip(self, who, request), fields(who = %who.email))]
    pub async fn post_message(
        &self,
        pool_id: Uid,
        who: &Identity,
        request: PostMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let pool = self.require_pool(pool_id).await?;
        PoolService::new(self.ctx)
            .require_membership(&pool, who)
            .await?;

        let content = request.content.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyMessage.into());
        }
        if content.chars().count() > MESSAGE_MAX_CHARS {
            return Err(DomainError::ContentTooLong {
                max: MESSAGE_MAX_CHARS,
            }
            .into());
        }

        let message = Message {
            id: self.ctx.generate_id(),
            pool_id,
            sender_email: who.email.clone(),
            sender_name: who.name.clone(),
            content: content.to_string(),
            created_at: Utc::now(),
        };

        self.ctx.message_repo().insert(&message).await?;

        info!(pool_id = %pool_id, message_id = %message.id, "Message posted");

        Ok(MessageResponse::from(&message))
    }

    async fn require_pool(&self, pool_id: Uid) -> ServiceResult<pool_core::Pool> {
        self.ctx
            .pool_repo()
            .find_by_id(pool_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Pool", pool_id.to_string()))
    }
}
