// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::{debug, error, warn};

use crate::storage::Storage;

use super::{Identity, Session, SessionView};

pub(crate) const TOKEN_KEY: &str = "auth_token";
pub(crate) const IDENTITY_KEY: &str = "auth_user";

/// The single source of truth for who is signed in, mirrored into durable
/// storage so a later process can pick the session back up.
///
/// Storage writes are fire-and-forget: a failed write is logged and the
/// in-memory state is kept regardless.
pub(crate) struct SessionStore<S: Storage> {
    session: Session,
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    /// Creates a store over `storage` and restores any persisted session.
    pub(crate) fn new(storage: S) -> Self {
        let mut store = Self {
            session: Session::default(),
            storage,
        };
        store.restore_from_storage();
        store
    }

    pub(crate) fn establish_session(&mut self, identity: Identity) {
        let serialized = serde_json::to_string(&identity);
        let token = identity.token.clone();
        self.session.establish(identity);

        self.persist(TOKEN_KEY, &token);
        match serialized {
            Ok(value) => self.persist(IDENTITY_KEY, &value),
            Err(e) => warn!("We could not serialize the session identity: {}", e),
        }
    }

    pub(crate) fn end_session(&mut self) {
        self.session.clear();
        self.forget(TOKEN_KEY);
        self.forget(IDENTITY_KEY);
    }

    /// Loads the persisted session, if both halves of it are present.
    ///
    /// Anything that cannot be turned back into a consistent session wipes
    /// the stored keys and leaves the store signed out.
    pub(crate) fn restore_from_storage(&mut self) {
        let (Some(token), Some(serialized)) = (self.load(TOKEN_KEY), self.load(IDENTITY_KEY))
        else {
            debug!("No persisted session to restore");
            return;
        };

        if token.is_empty() {
            error!("Persisted session token is empty");
            self.end_session();
            return;
        }

        match serde_json::from_str::<Identity>(&serialized) {
            Ok(identity) if identity.token == token => {
                debug!("Restored session for {}", identity.username);
                self.session.establish(identity);
            }
            Ok(_) => {
                error!("Persisted session token does not match the persisted user");
                self.end_session();
            }
            Err(e) => {
                error!("Failed to parse stored user data: {}", e);
                self.end_session();
            }
        }
    }

    pub(crate) const fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub(crate) fn is_persistent(&self) -> bool {
        self.storage.is_persistent()
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("We could not read {} from session storage: {}", key, e);
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!("We could not write {} to session storage: {}", key, e);
        }
    }

    fn forget(&mut self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!("We could not remove {} from session storage: {}", key, e);
        }
    }
}

impl<S: Storage> SessionView for SessionStore<S> {
    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn role(&self) -> Option<&str> {
        self.session.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Result,
        session::tests::identity,
        storage::{File, IsPersistent, Memory},
    };

    #[test]
    fn fresh_storage_is_signed_out() {
        let store = SessionStore::new(Memory::new());
        assert!(!store.is_authenticated());
        assert_eq!(store.identity(), None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn establish_writes_both_keys() -> Result<()> {
        let storage = Memory::new();
        let mut store = SessionStore::new(storage.clone());
        store.establish_session(identity("Customer"));

        assert!(store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?.as_deref(), Some("test-token"));
        let persisted: Identity = serde_json::from_str(
            &storage.get(IDENTITY_KEY)?.unwrap_or_default(),
        )?;
        assert_eq!(persisted, identity("Customer"));
        Ok(())
    }

    #[test]
    fn restores_into_a_fresh_store() {
        let storage = Memory::new();
        SessionStore::new(storage.clone()).establish_session(identity("Accommodation Owner"));

        let restored = SessionStore::new(storage);
        assert!(restored.is_authenticated());
        assert_eq!(restored.role(), Some("Accommodation Owner"));
        assert!(restored.is_accommodation_owner());
        assert_eq!(restored.identity(), Some(&identity("Accommodation Owner")));
        assert_eq!(restored.token(), Some("test-token"));
    }

    #[test]
    fn end_session_twice_matches_once() -> Result<()> {
        let storage = Memory::new();
        let mut store = SessionStore::new(storage.clone());
        store.establish_session(identity("Customer"));

        store.end_session();
        let once = store.session.clone();
        store.end_session();

        assert_eq!(store.session, once);
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?, None);
        assert_eq!(storage.get(IDENTITY_KEY)?, None);
        Ok(())
    }

    #[test]
    fn corrupt_identity_wipes_storage() -> Result<()> {
        let mut storage = Memory::new();
        storage.set(TOKEN_KEY, "test-token")?;
        storage.set(IDENTITY_KEY, "{not json")?;

        let store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());
        assert_eq!(store.identity(), None);
        assert_eq!(storage.get(TOKEN_KEY)?, None);
        assert_eq!(storage.get(IDENTITY_KEY)?, None);
        Ok(())
    }

    #[test]
    fn mismatched_token_wipes_storage() -> Result<()> {
        let mut storage = Memory::new();
        storage.set(TOKEN_KEY, "other-token")?;
        storage.set(IDENTITY_KEY, &serde_json::to_string(&identity("Customer"))?)?;

        let store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?, None);
        assert_eq!(storage.get(IDENTITY_KEY)?, None);
        Ok(())
    }

    #[test]
    fn half_a_session_is_left_alone() -> Result<()> {
        let mut storage = Memory::new();
        storage.set(TOKEN_KEY, "test-token")?;

        let store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?.as_deref(), Some("test-token"));
        Ok(())
    }

    #[test]
    fn restore_reflects_later_writes() -> Result<()> {
        let mut storage = Memory::new();
        let mut store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());

        storage.set(TOKEN_KEY, "test-token")?;
        storage.set(IDENTITY_KEY, &serde_json::to_string(&identity("Superadmin"))?)?;
        store.restore_from_storage();

        assert!(store.is_superadmin());
        Ok(())
    }

    #[test]
    fn empty_token_wipes_storage() -> Result<()> {
        let mut storage = Memory::new();
        storage.set(TOKEN_KEY, "")?;
        storage.set(IDENTITY_KEY, &serde_json::to_string(&identity("Customer"))?)?;

        let store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?, None);
        assert_eq!(storage.get(IDENTITY_KEY)?, None);
        Ok(())
    }

    #[test]
    fn empty_identity_wipes_storage() -> Result<()> {
        let mut storage = Memory::new();
        storage.set(TOKEN_KEY, "test-token")?;
        storage.set(IDENTITY_KEY, "")?;

        let store = SessionStore::new(storage.clone());
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?, None);
        assert_eq!(storage.get(IDENTITY_KEY)?, None);
        Ok(())
    }

    #[test]
    fn file_backed_session_survives_a_restart() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        SessionStore::new(File::with_path(&path)).establish_session(identity("Superadmin"));

        let mut restored = SessionStore::new(File::with_path(&path));
        assert!(restored.is_persistent());
        assert!(restored.is_superadmin());
        assert_eq!(restored.identity(), Some(&identity("Superadmin")));

        restored.end_session();
        assert!(!path.exists());
        assert!(!SessionStore::new(File::with_path(&path)).is_authenticated());
        Ok(())
    }

    #[test]
    fn corrupt_file_backed_identity_wipes_storage() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        let mut storage = File::with_path(&path);
        storage.set(TOKEN_KEY, "test-token")?;
        storage.set(IDENTITY_KEY, r#"{"token":"test-token""#)?;

        let store = SessionStore::new(File::with_path(&path));
        assert!(!store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY)?, None);
        assert_eq!(storage.get(IDENTITY_KEY)?, None);
        assert!(!path.exists());
        Ok(())
    }

    struct Broken;

    impl IsPersistent for Broken {
        fn is_persistent(&self) -> bool {
            true
        }
    }

    impl Storage for Broken {
        fn get(&self, _: &str) -> Result<Option<String>> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }

        fn set(&mut self, _: &str, _: &str) -> Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }

        fn remove(&mut self, _: &str) -> Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }
    }

    #[test]
    fn storage_failures_do_not_block_memory_state() {
        let mut store = SessionStore::new(Broken);
        assert!(!store.is_authenticated());

        store.establish_session(identity("Customer"));
        assert!(store.is_customer());

        store.end_session();
        assert!(!store.is_authenticated());
    }
}
