use async_trait::async_trait;

use super::error::ApiResult;
use super::record::Payload;
use super::types::{ListResponse, Message, MessageSet, Schedule};

/// Client boundary for the stage-based messaging service.
///
/// The reqwest-backed implementation lives in the client crate; tests use
/// in-memory implementations. Any non-2xx response surfaces as an
/// [`ApiError`](super::error::ApiError) carrying status and body.
#[async_trait]
pub trait StageBasedMessagingApi: Send + Sync {
    /// Lists all schedules.
    async fn get_schedules(&self) -> ApiResult<ListResponse<Schedule>>;

    /// Lists all messagesets.
    async fn get_messagesets(&self) -> ApiResult<ListResponse<MessageSet>>;

    /// Lists all messages.
    async fn get_messages(&self) -> ApiResult<ListResponse<Message>>;

    /// Gets a message by ID.
    async fn get_message(&self, id: u64) -> ApiResult<Message>;

    /// Creates a message from a payload.
    async fn create_message(&self, payload: &Payload) -> ApiResult<Message>;

    /// Updates a message by ID.
    async fn update_message(&self, id: u64, payload: &Payload) -> ApiResult<Message>;

    /// Deletes a message by ID.
    async fn delete_message(&self, id: u64) -> ApiResult<()>;
}

/// Gate consulted before a destructive batch executes.
///
/// Implementations present the resolved record count and target
/// description, then return whether the batch may proceed. The terminal
/// implementation prompts interactively unless bypassed; test
/// implementations answer statically.
pub trait ConfirmGate: Send + Sync {
    /// Presents `count` resolved records matching `description` and
    /// returns `true` when the batch may proceed.
    fn confirm(&self, count: usize, description: &str) -> std::io::Result<bool>;
}
