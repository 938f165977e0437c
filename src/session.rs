//! Session state — observable holder for the client session token.
//!
//! [`SessionStore`] is an explicitly constructed handle, not a module-level
//! singleton: construct one at boot, clone it into whatever needs access
//! (clones share the same cell), and construct fresh stores in tests for
//! isolation.
//!
//! The token is memory-only and lives exactly as long as the process. No
//! expiry, refresh, or server verification is modeled here.

use tokio::sync::watch;

/// Shared, observable cell holding at most one session token.
///
/// Writes are last-write-wins; subscribers always observe the latest value
/// and may see intermediate writes coalesced.
#[derive(Clone)]
pub struct SessionStore {
    cell: watch::Sender<Option<String>>,
}

impl SessionStore {
    /// New store with no token present.
    pub fn new() -> Self {
        let (cell, _) = watch::channel(None);
        Self { cell }
    }

    /// Current token, or `None` when signed out. Never fails.
    pub fn token(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    /// `true` while a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.cell.borrow().is_some()
    }

    /// Replace the held token unconditionally and notify subscribers.
    ///
    /// Never fails — notification is a no-op with zero subscribers. The
    /// token value itself is never logged.
    pub fn set_token(&self, token: Option<String>) {
        let present = token.is_some();
        self.cell.send_replace(token);
        tracing::debug!(present, "session token replaced");
    }

    /// Shorthand for `set_token(None)`.
    pub fn clear_token(&self) {
        self.set_token(None);
    }

    /// Watch the cell. The receiver tracks the latest value; use
    /// `has_changed` / `borrow_and_update` from event handlers, or
    /// `changed().await` from async tasks.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.cell.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
