// Passforge — Session / secret lifecycle
//
// State machine: LoggedOut -> LoggedIn -> LoggedOut, nothing else. The
// master key is owned exclusively by the session; it is wiped (Zeroizing
// drop) on logout, on re-login, on login failure, and when the session
// itself is dropped. It is never serialized and never handed out.
//
// Locking: login/logout take the write lock, so only one transition is in
// flight at a time; site_password takes the read lock, so concurrent
// reads while LoggedIn are safe (derivation mutates nothing).

use std::sync::RwLock;

use thiserror::Error;

use crate::derive::{
    derive_site_seed, DerivationError, MasterKey, MasterKeyDeriver, ScryptDeriver,
};
use crate::model::SiteIdentity;
use crate::template::render_password;

/// Errors surfaced at the session boundary.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation requiring a session was invoked while LoggedOut.
    /// Caller error, not a crypto failure — log in first.
    #[error("not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}

/// A login session. Generic over the key deriver so tests can swap in a
/// cheap or faulting implementation; production code uses the default
/// scrypt deriver via [`Session::new`].
pub struct Session<D = ScryptDeriver> {
    deriver: D,
    master_key: RwLock<Option<MasterKey>>,
}

impl Session<ScryptDeriver> {
    pub fn new() -> Self {
        Self::with_deriver(ScryptDeriver::new())
    }
}

impl Default for Session<ScryptDeriver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: MasterKeyDeriver> Session<D> {
    pub fn with_deriver(deriver: D) -> Self {
        Self {
            deriver,
            master_key: RwLock::new(None),
        }
    }

    /// Derive and hold the master key for `user_name`. A key held from a
    /// previous login is wiped before the new derivation starts, so a
    /// failed login never leaves a stale session behind — on error the
    /// session is LoggedOut.
    ///
    /// The derivation is memory-hard and blocks for a perceptible time;
    /// interactive callers should run this on a worker thread.
    pub fn login(&self, user_name: &str, master_password: &[u8]) -> Result<(), DerivationError> {
        let mut guard = self.write_lock();
        // drop the previous key before deriving a new one
        guard.take();

        let key = self.deriver.derive_master_key(user_name, master_password)?;
        *guard = Some(key);
        tracing::debug!(user = %user_name, "session logged in");
        Ok(())
    }

    /// Wipe the held master key and return to LoggedOut. Idempotent:
    /// logging out of a LoggedOut session is a no-op.
    pub fn logout(&self) {
        let mut guard = self.write_lock();
        if guard.take().is_some() {
            tracing::debug!("session logged out");
        }
    }

    /// Pure query: is a master key currently held?
    pub fn is_logged_in(&self) -> bool {
        self.read_lock().is_some()
    }

    /// Derive the password for `identity`. Computed on demand from the
    /// held key — never cached, never stored.
    pub fn site_password(&self, identity: &SiteIdentity) -> Result<String, SessionError> {
        let guard = self.read_lock();
        let key = guard.as_ref().ok_or(SessionError::NotLoggedIn)?;

        let seed = derive_site_seed(key, identity)?;
        Ok(render_password(&seed, identity.site_type())?)
    }

    // A panicking thread can poison the lock, but the held Option is
    // always in a consistent state (transitions assign it atomically), so
    // recover the guard instead of propagating the poison.
    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Option<MasterKey>> {
        self.master_key
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, Option<MasterKey>> {
        self.master_key
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
