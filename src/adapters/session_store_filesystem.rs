use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Role, Session};
use crate::ports::SessionStore;

/// Session store keeping one JSON file per role under a directory.
#[derive(Debug, Clone)]
pub struct FilesystemSessionStore {
    dir: PathBuf,
}

impl FilesystemSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn session_path(&self, role: Role) -> PathBuf {
        self.dir.join(format!("{}.json", role.storage_key()))
    }
}

impl SessionStore for FilesystemSessionStore {
    fn get_session(&self, role: Role) -> Result<Option<Session>, AppError> {
        let path = self.session_path(role);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let session: Session = serde_json::from_str(&content)
            .map_err(|e| AppError::parse_error(path.display().to_string(), e))?;
        if session.role() != role {
            return Err(AppError::parse_error(
                path.display().to_string(),
                format!("holds a {} session", session.role()),
            ));
        }
        Ok(Some(session))
    }

    fn set_session(&self, session: &Session) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.session_path(session.role());
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::parse_error("session", e))?;

        let tmp_path = path.with_extension("json.tmp");
        write_private(&tmp_path, json.as_bytes())?;
        fs::rename(&tmp_path, &path)?;

        tracing::info!(role = %session.role(), path = %path.display(), "Session saved");
        Ok(())
    }

    fn clear_session(&self, role: Role) -> Result<(), AppError> {
        let path = self.session_path(role);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(%role, path = %path.display(), "Session cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Write a fresh file that is owner-only from the moment it exists.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdminAccount, WorkerSummary};
    use tempfile::TempDir;

    fn worker_session() -> Session {
        Session::worker(
            "sess-1",
            WorkerSummary {
                id: 1,
                migrant_id: "MIG00001".into(),
                name: "Ravi".into(),
                phone: None,
                skill: None,
            },
        )
    }

    fn admin_session() -> Session {
        Session::admin(AdminAccount {
            id: 1,
            username: "admin".into(),
            name: Some("Administrator".into()),
            role: Some("superadmin".into()),
        })
    }

    #[test]
    fn missing_session_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path());
        assert_eq!(store.get_session(Role::Worker).unwrap(), None);
        assert!(!store.is_logged_in(Role::Worker));
    }

    #[test]
    fn roles_round_trip_independently() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path().join("nested"));

        store.set_session(&worker_session()).unwrap();
        store.set_session(&admin_session()).unwrap();

        let loaded = store.get_session(Role::Worker).unwrap().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("sess-1"));
        assert_eq!(loaded.user, worker_session().user);
        assert!(store.is_logged_in(Role::Admin));
        assert!(!store.is_logged_in(Role::Employer));

        store.clear_session(Role::Worker).unwrap();
        assert!(!store.is_logged_in(Role::Worker));
        assert!(store.is_logged_in(Role::Admin));
    }

    #[test]
    fn clearing_absent_session_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path());
        assert!(store.clear_session(Role::Employer).is_ok());
    }

    #[test]
    fn corrupt_file_is_an_error_and_not_logged_in() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path());
        fs::write(store.session_path(Role::Worker), "{not json").unwrap();

        assert!(matches!(store.get_session(Role::Worker), Err(AppError::ParseError { .. })));
        assert!(!store.is_logged_in(Role::Worker));
    }

    #[test]
    fn uses_role_storage_keys() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path());
        store.set_session(&admin_session()).unwrap();
        assert!(dir.path().join("mlgms_admin_session.json").exists());
        assert!(!dir.path().join("mlgms_admin_session.json.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path());
        store.set_session(&worker_session()).unwrap();

        let mode = fs::metadata(store.session_path(Role::Worker)).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn leftover_temp_file_is_replaced_with_private_one() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path());
        let tmp = store.session_path(Role::Worker).with_extension("json.tmp");
        fs::write(&tmp, "stale").unwrap();
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o644)).unwrap();

        write_private(&tmp, b"token").unwrap();

        assert_eq!(fs::read_to_string(&tmp).unwrap(), "token");
        assert_eq!(fs::metadata(&tmp).unwrap().permissions().mode() & 0o777, 0o600);
    }
}
