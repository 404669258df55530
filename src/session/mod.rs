//! Session store.
//!
//! Holds the authenticated session (bearer token + user record) behind an
//! injectable storage backend. Exactly two keys are persisted, `token`
//! and `user`; absence of `token` means anonymous regardless of a stale
//! `user` entry. All access happens on one logical thread of execution,
//! so writes are plain last-writer-wins.

pub mod file;
pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::User;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// The two persisted keys.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl fmt::Debug for PersistedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedSession")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .finish()
    }
}

/// Storage backend for the two session keys.
pub trait SessionBackend: Send + Sync {
    fn load(&self) -> Result<PersistedSession>;
    fn store(&self, session: &PersistedSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-memory view of the session with a defined lifecycle.
///
/// Initialized from persisted state, updated on auth events, torn down on
/// logout. Orphaned remnants (a token without a user, or a user without a
/// token) are discarded during init.
pub struct SessionStore {
    backend: Box<dyn SessionBackend>,
    state: SessionState,
    token: Option<String>,
    user: Option<User>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user.as_ref().map(|u| u.id.as_str()))
            .finish()
    }
}

impl SessionStore {
    /// Initialize from whatever the backend has persisted.
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        let persisted = backend.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load persisted session, starting anonymous");
            PersistedSession::default()
        });

        match (persisted.token, persisted.user) {
            (Some(token), Some(user)) => Self {
                backend,
                state: SessionState::Authenticated,
                token: Some(token),
                user: Some(user),
            },
            (token, user) => {
                if token.is_some() || user.is_some() {
                    tracing::info!("discarding incomplete persisted session");
                    if let Err(e) = backend.clear() {
                        tracing::warn!(error = %e, "failed to clear stale session keys");
                    }
                }
                Self {
                    backend,
                    state: SessionState::Anonymous,
                    token: None,
                    user: None,
                }
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// anonymous → authenticating, on login or register submit.
    pub fn begin_authentication(&mut self) {
        self.state = SessionState::Authenticating;
    }

    /// authenticating → authenticated: persist both keys.
    pub fn complete_authentication(&mut self, token: String, user: User) -> Result<()> {
        let persisted = PersistedSession {
            token: Some(token.clone()),
            user: Some(user.clone()),
        };
        self.backend.store(&persisted)?;
        self.token = Some(token);
        self.user = Some(user);
        self.state = SessionState::Authenticated;
        tracing::info!(user = %self.user.as_ref().map(|u| u.id.as_str()).unwrap_or(""), "session established");
        Ok(())
    }

    /// authenticating → anonymous: nothing was persisted.
    pub fn fail_authentication(&mut self) {
        self.state = SessionState::Anonymous;
        self.token = None;
        self.user = None;
    }

    /// → anonymous. Local state is cleared unconditionally; a backend
    /// failure is logged, not surfaced.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.state = SessionState::Anonymous;
        if let Err(e) = self.backend.clear() {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn test_user() -> User {
        serde_json::from_str(r#"{"id":1,"name":"Ana","roles":["employee"]}"#).unwrap()
    }

    #[test]
    fn test_init_with_complete_session_is_authenticated() {
        let backend = MemoryBackend::default();
        backend
            .store(&PersistedSession {
                token: Some("tok".into()),
                user: Some(test_user()),
            })
            .unwrap();

        let store = SessionStore::new(Box::new(backend));
        assert_eq!(store.state(), SessionState::Authenticated);
        assert_eq!(store.token(), Some("tok"));
    }

    #[test]
    fn test_init_discards_user_without_token() {
        let backend = MemoryBackend::default();
        backend
            .store(&PersistedSession {
                token: None,
                user: Some(test_user()),
            })
            .unwrap();

        let store = SessionStore::new(Box::new(backend));
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(store.user().is_none());
    }

    #[test]
    fn test_init_discards_token_without_user() {
        let backend = MemoryBackend::default();
        backend
            .store(&PersistedSession {
                token: Some("tok".into()),
                user: None,
            })
            .unwrap();

        let store = SessionStore::new(Box::new(backend));
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_failed_authentication_persists_nothing() {
        let mut store = SessionStore::new(Box::<MemoryBackend>::default());
        store.begin_authentication();
        assert_eq!(store.state(), SessionState::Authenticating);
        store.fail_authentication();
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_clear_always_resets_local_state() {
        let mut store = SessionStore::new(Box::<MemoryBackend>::default());
        store.begin_authentication();
        store
            .complete_authentication("tok".into(), test_user())
            .unwrap();
        assert!(store.is_authenticated());

        store.clear();
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let mut store = SessionStore::new(Box::<MemoryBackend>::default());
        store.begin_authentication();
        store
            .complete_authentication("super-secret".into(), test_user())
            .unwrap();
        let rendered = format!("{store:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
