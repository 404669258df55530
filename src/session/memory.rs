//! In-memory session storage, used by tests and ephemeral shells.

use std::sync::Mutex;

use crate::error::Result;

use super::{PersistedSession, SessionBackend};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<PersistedSession>,
}

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Result<PersistedSession> {
        Ok(self.lock().clone())
    }

    fn store(&self, session: &PersistedSession) -> Result<()> {
        *self.lock() = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock() = PersistedSession::default();
        Ok(())
    }
}

impl MemoryBackend {
    fn lock(&self) -> std::sync::MutexGuard<'_, PersistedSession> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
