use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Role, Session};
use crate::ports::SessionStore;

/// In-memory session store. Clones share the same sessions.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<Role, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Role, Session>>, AppError> {
        self.sessions
            .lock()
            .map_err(|_| AppError::Io(std::io::Error::other("session store lock poisoned")))
    }
}

impl SessionStore for MemorySessionStore {
    fn get_session(&self, role: Role) -> Result<Option<Session>, AppError> {
        Ok(self.lock()?.get(&role).cloned())
    }

    fn set_session(&self, session: &Session) -> Result<(), AppError> {
        self.lock()?.insert(session.role(), session.clone());
        Ok(())
    }

    fn clear_session(&self, role: Role) -> Result<(), AppError> {
        self.lock()?.remove(&role);
        Ok(())
    }
}
