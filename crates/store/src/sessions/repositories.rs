use async_trait::async_trait;
use uuid::Uuid;

use crate::sessions::models::Session;
use icebreak_common::error::IcebreakResult;

/// A state transition applied to a stored session under the store's lock.
pub type SessionChange = Box<dyn FnOnce(&mut Session) -> IcebreakResult<()> + Send>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: Session) -> IcebreakResult<Session>;
    async fn get_by_id(&self, id: Uuid) -> IcebreakResult<Option<Session>>;
    /// Apply `change` atomically to the stored session. Unknown ids are
    /// `NotFound`. If `change` fails the stored session is left as it was.
    async fn modify(&self, id: Uuid, change: SessionChange) -> IcebreakResult<Session>;
}
