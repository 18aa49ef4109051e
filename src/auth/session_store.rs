use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Mutex, RwLock},
};

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{user::StoredSession, Session},
};

/// Where the current actor's session lives between commands.
///
/// Implementations must write token and profile as one unit: a reader sees
/// either the previous session or the new one, never a mix.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> AppResult<Option<Session>>;
    fn save(&self, session: &Session) -> AppResult<()>;
    /// Removing an absent session is not an error.
    fn clear(&self) -> AppResult<()>;
}

#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> AppResult<Option<Session>> {
        let guard = self
            .session
            .read()
            .map_err(|_| AppError::StorageError("Session lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| AppError::StorageError("Session lock poisoned".to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let mut guard = self
            .session
            .write()
            .map_err(|_| AppError::StorageError("Session lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// JSON file store. Saves go through a temp file renamed over the target.
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp file, unique per save so concurrent writers never share one.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(format!(".{}.tmp", Uuid::new_v4()));
        self.path.with_file_name(name)
    }

    fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.sync_all()
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> AppResult<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => Ok(Some(stored.into())),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        let _lock = self
            .write_lock
            .lock()
            .map_err(|_| AppError::StorageError("Session lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let body = serde_json::to_vec_pretty(&StoredSession::from(session))?;
        let temp = self.temp_path();
        let written =
            Self::write_private(&temp, &body).and_then(|_| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let _lock = self
            .write_lock
            .lock()
            .map_err(|_| AppError::StorageError("Session lock poisoned".to_string()))?;

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
