//! In-memory quiz session registry.
//!
//! Sessions are owned by the server and keyed by id. Every transition
//! goes through the registry's write lock, so a single session is never
//! mutated from two requests at once; sessions of different users are
//! fully independent values.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use quiz_core::QuizSession;

use crate::error::{ApiError, Result};

/// Registry of live quiz sessions.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, QuizSession>>,
}

impl SessionRegistry {
    /// Store a new session and return its id.
    pub fn insert(&self, session: QuizSession) -> Uuid {
        let id = Uuid::new_v4();
        self.write().insert(id, session);
        id
    }

    /// Snapshot a session by id.
    pub fn get(&self, id: Uuid) -> Result<QuizSession> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Apply one answer submission. Returns whether the chosen option was
    /// correct, along with the new session state.
    pub fn submit(&self, id: Uuid, option: &str) -> Result<(bool, QuizSession)> {
        let mut sessions = self.write();
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;

        let correct = session
            .current_question()
            .map(|q| q.correct_answer == option)
            .unwrap_or(false);
        let next = session.submit_answer(option)?;

        sessions.insert(id, next.clone());
        Ok((correct, next))
    }

    /// Reset a session to its initial counters, keeping the same deck.
    pub fn reset(&self, id: Uuid) -> Result<QuizSession> {
        let mut sessions = self.write();
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;

        let fresh = session.reset();
        sessions.insert(id, fresh.clone());
        Ok(fresh)
    }

    /// Drop a session.
    pub fn remove(&self, id: Uuid) -> Result<()> {
        self.write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, QuizSession>> {
        self.sessions.read().expect("session registry lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, QuizSession>> {
        self.sessions.write().expect("session registry lock poisoned")
    }
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("quiz session {id}"))
}
