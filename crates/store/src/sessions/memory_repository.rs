use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::sessions::models::Session;
use crate::sessions::repositories::{SessionChange, SessionRepository};
use icebreak_common::error::{IcebreakError, IcebreakResult};

/// Process-local session storage. Sessions are lost on restart.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> IcebreakResult<Session> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(IcebreakError::Internal(format!(
                "session {} already exists",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        tracing::debug!(session_id = %session.id, "session created");
        Ok(session)
    }

    async fn get_by_id(&self, id: Uuid) -> IcebreakResult<Option<Session>> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    async fn modify(&self, id: Uuid, change: SessionChange) -> IcebreakResult<Session> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions
            .get_mut(&id)
            .ok_or_else(|| IcebreakError::NotFound(format!("session {id} not found")))?;

        let mut next = slot.clone();
        change(&mut next)?;
        next.touch();
        *slot = next.clone();
        Ok(next)
    }
}
