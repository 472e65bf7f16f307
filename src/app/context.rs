use crate::app::client::PortalClient;
use crate::domain::{AppError, ModerationConfig, Role, Session};
use crate::ports::{ApiTransport, SessionStore};

/// Application context holding dependencies for view models.
pub struct AppContext<T: ApiTransport, S: SessionStore> {
    client: PortalClient<T>,
    sessions: S,
    moderation: ModerationConfig,
}

impl<T: ApiTransport, S: SessionStore> AppContext<T, S> {
    pub fn new(transport: T, sessions: S, moderation: ModerationConfig) -> Self {
        Self { client: PortalClient::new(transport), sessions, moderation }
    }

    pub fn client(&self) -> &PortalClient<T> {
        &self.client
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Session façade scoped to one role.
    pub fn session(&self, role: Role) -> SessionContext<'_, S> {
        SessionContext { store: &self.sessions, role }
    }

    /// Whether moderation lists are refetched after each settled action.
    pub fn refetch_on_settle(&self) -> bool {
        self.moderation.refetch_on_settle
    }
}

/// One role's view of the session store.
#[derive(Debug)]
pub struct SessionContext<'a, S: SessionStore> {
    store: &'a S,
    role: Role,
}

impl<S: SessionStore> SessionContext<'_, S> {
    pub fn role(&self) -> Role {
        self.role
    }

    /// The stored session; unreadable sessions count as absent.
    pub fn get(&self) -> Option<Session> {
        match self.store.get_session(self.role) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(role = %self.role, error = %err, "Ignoring unreadable session");
                None
            }
        }
    }

    pub fn set(&self, session: &Session) -> Result<(), AppError> {
        if session.role() != self.role {
            return Err(AppError::parse_error(
                "session",
                format!("expected a {} session, got {}", self.role, session.role()),
            ));
        }
        self.store.set_session(session)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.clear_session(self.role)
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in(self.role)
    }
}
