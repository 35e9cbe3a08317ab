//! Process-wide active session, published via a `watch` channel.

use std::sync::Arc;

use tokio::sync::watch;

use crate::error::{Result, SettingsError};
use crate::types::Session;

/// Injectable holder of the active [`Session`].
///
/// Clones share the same underlying channel, so a session installed through
/// one handle is observed by every subscriber.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn with_session(session: Session) -> Self {
        let store = Self::new();
        store.set(session);
        store
    }

    /// Current session snapshot.
    pub fn get(&self) -> Option<Arc<Session>> {
        self.tx.borrow().clone()
    }

    /// Current session, or [`SettingsError::NoSession`] if none is installed.
    pub fn require(&self) -> Result<Arc<Session>> {
        self.get().ok_or(SettingsError::NoSession)
    }

    /// Replace the active session and notify subscribers.
    pub fn set(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        self.tx.send_replace(Some(Arc::clone(&session)));
        session
    }

    /// Drop the active session.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// Subscribe to session changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Session>>> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
