use crate::domain::{AppError, Role, Session};

/// Port for the persisted per-role sessions.
///
/// Roles are independent: writing or clearing one never touches another.
/// Sessions carry no expiry; they live until cleared.
pub trait SessionStore {
    /// Load the session stored for `role`, if any.
    fn get_session(&self, role: Role) -> Result<Option<Session>, AppError>;

    /// Persist `session` under its own role, replacing any previous one.
    fn set_session(&self, session: &Session) -> Result<(), AppError>;

    /// Remove the session for `role`. Clearing an absent session succeeds.
    fn clear_session(&self, role: Role) -> Result<(), AppError>;

    /// Whether a readable session exists for `role`.
    fn is_logged_in(&self, role: Role) -> bool {
        matches!(self.get_session(role), Ok(Some(_)))
    }
}
