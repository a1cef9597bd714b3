//! Persisted client session state.
//!
//! The site keeps a single key, [`SESSION_KEY`], holding the serialized signed-in
//! user. Stores deal in raw strings; the auth service owns the encoding.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Key under which the signed-in user is persisted.
pub const SESSION_KEY: &str = "ecosprout_user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid session key '{0}'")]
    InvalidKey(String),

    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("session io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// String key/value storage that survives a page reload (or, for the file
/// store, a process restart).
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SessionError::Unavailable("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SessionError::Unavailable("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SessionError::Unavailable("lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per entry inside a directory.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
    // Serializes writers so a concurrent set/remove pair cannot interleave.
    write_lock: RwLock<()>,
}

impl FileSessionStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| SessionError::io(&dir, e))?;
        Ok(Self {
            dir,
            write_lock: RwLock::new(()),
        })
    }

    /// Open the store in the platform data directory:
    /// `{data_dir}/ecosprout/session`.
    pub fn open_default() -> Result<Self, SessionError> {
        Self::open(default_session_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SessionError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SessionError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .read()
            .map_err(|_| SessionError::Unavailable("lock poisoned".to_string()))?;

        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::io(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .write()
            .map_err(|_| SessionError::Unavailable("lock poisoned".to_string()))?;

        // Write-then-rename so readers never observe a half-written value.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| SessionError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| SessionError::io(&path, e))?;

        tracing::debug!(key, path = %path.display(), "session value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .write()
            .map_err(|_| SessionError::Unavailable("lock poisoned".to_string()))?;

        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::io(&path, e)),
        }
    }
}

fn default_session_dir() -> Result<PathBuf, SessionError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .ok_or_else(|| {
            SessionError::Unavailable(
                "no platform data directory (tried data_dir() and home_dir()/.local/share)"
                    .to_string(),
            )
        })?;

    Ok(base.join("ecosprout").join("session"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("ecosprout-session-{}", uuid::Uuid::now_v7()))
    }

    fn exercise(store: &dyn SessionStore) {
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);

        store.set(SESSION_KEY, r#"{"id":"1"}"#).unwrap();
        assert_eq!(
            store.get(SESSION_KEY).unwrap().as_deref(),
            Some(r#"{"id":"1"}"#)
        );

        store.set(SESSION_KEY, "second").unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("second"));

        store.remove(SESSION_KEY).unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);

        // removing twice is fine
        store.remove(SESSION_KEY).unwrap();
    }

    #[test]
    fn in_memory_store_round_trip() {
        exercise(&InMemorySessionStore::new());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = scratch_dir();
        let store = FileSessionStore::open(&dir).unwrap();
        exercise(&store);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = scratch_dir();
        FileSessionStore::open(&dir)
            .unwrap()
            .set(SESSION_KEY, "persisted")
            .unwrap();

        let reopened = FileSessionStore::open(&dir).unwrap();
        assert_eq!(
            reopened.get(SESSION_KEY).unwrap().as_deref(),
            Some("persisted")
        );
        assert!(dir.join("ecosprout_user.json").exists());
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn file_store_rejects_path_like_keys() {
        let dir = scratch_dir();
        let store = FileSessionStore::open(&dir).unwrap();
        for key in ["", "../escape", "a/b", "dot.ted"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(SessionError::InvalidKey(_))
            ));
        }
        std::fs::remove_dir_all(dir).unwrap();
    }
}
