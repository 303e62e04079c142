//! Persisted session credential
//!
//! One opaque bearer token in a single well-known file under the app
//! directory. Written on successful authentication, removed on logout or
//! when the gateway sees a 401. Absence of the file means unauthenticated.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const TOKEN_FILE: &str = "token";

/// Owns the credential's storage location. Injected into the API client so
/// the teardown path and the login path write to the same place.
#[derive(Debug, Clone)]
pub struct SessionStore {
    token_path: PathBuf,
}

impl SessionStore {
    pub fn new(app_dir: &Path) -> Self {
        Self { token_path: app_dir.join(TOKEN_FILE) }
    }

    /// Read the stored credential. None means unauthenticated.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.token_path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(_) => None,
        }
    }

    /// Persist a new credential, replacing any previous one.
    pub fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.token_path, token)?;

        // The token is a credential; keep it owner-readable only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.token_path, fs::Permissions::from_mode(0o600))?;
        }

        debug!("Session token stored at {:?}", self.token_path);
        Ok(())
    }

    /// Remove the credential. Safe to call when none is stored.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.token_path) {
            Ok(()) => {
                debug!("Session token cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.load().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_token_is_none() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::new(temp.path());

        assert!(store.load().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_store_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::new(temp.path());

        store.store("jwt-abc123").unwrap();
        assert_eq!(store.load().as_deref(), Some("jwt-abc123"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_token_survives_new_store_instance() {
        let temp = TempDir::new().unwrap();
        SessionStore::new(temp.path()).store("persisted").unwrap();

        let reopened = SessionStore::new(temp.path());
        assert_eq!(reopened.load().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_store_overwrites_previous_token() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::new(temp.path());

        store.store("first").unwrap();
        store.store("second").unwrap();
        assert_eq!(store.load().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::new(temp.path());

        store.store("to-be-removed").unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());

        // Second clear with nothing stored must also succeed.
        store.clear().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_whitespace_only_token_is_unauthenticated() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::new(temp.path());

        fs::write(temp.path().join("token"), "\n  \n").unwrap();
        assert!(store.load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let store = SessionStore::new(temp.path());
        store.store("secret").unwrap();

        let mode = fs::metadata(temp.path().join("token")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
