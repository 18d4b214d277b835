//! In-memory session store
//!
//! Each session is an independent ledger. The store serializes access with a
//! single async `RwLock`: mutations and bill generation take the write lock,
//! pure reads take the read lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use core_kernel::{Currency, SessionId};
use domain_ledger::{LedgerError, RoundingPolicy, Session};

use crate::error::ApiError;

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }

    /// Opens a new session and runs `view` over it
    ///
    /// # Errors
    ///
    /// Returns `Conflict` once `max_sessions` sessions are open.
    pub async fn create<T>(
        &self,
        currency: Currency,
        policy: RoundingPolicy,
        view: impl FnOnce(&Session) -> T,
    ) -> Result<T, ApiError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_sessions {
            return Err(ApiError::Conflict(format!(
                "Session limit reached ({})",
                self.max_sessions
            )));
        }

        let session = Session::new(currency, policy);
        let id = session.id();
        let out = view(&session);
        sessions.insert(id, session);

        info!(session_id = %id, %currency, ?policy, open_sessions = sessions.len(), "Session opened");
        Ok(out)
    }

    /// Runs a read-only operation against one session
    pub async fn read<T>(
        &self,
        id: SessionId,
        op: impl FnOnce(&Session) -> Result<T, LedgerError>,
    ) -> Result<T, ApiError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| session_not_found(id))?;
        Ok(op(session)?)
    }

    /// Runs a mutating operation against one session
    pub async fn write<T>(
        &self,
        id: SessionId,
        op: impl FnOnce(&mut Session) -> Result<T, LedgerError>,
    ) -> Result<T, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
        Ok(op(session)?)
    }

    /// Closes a session, discarding its ledger
    pub async fn remove(&self, id: SessionId) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id).ok_or_else(|| session_not_found(id))?;
        info!(session_id = %id, open_sessions = sessions.len(), "Session closed");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn session_not_found(id: SessionId) -> ApiError {
    ApiError::NotFound(format!("Session not found: {}", id.as_uuid()))
}
