//! crates/trip_planner_core/src/session.rs
//!
//! The session client: the only component that talks to the remote auth
//! service and the only writer of the `TokenStore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::domain::{LoginRequest, SignupRequest, TokenPair, UserResponse};
use crate::ports::{AuthService, PortResult, TokenStore};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Wraps the remote auth endpoints and mediates every read and write of the
/// session store.
pub struct SessionClient {
    auth: Arc<dyn AuthService>,
    store: Arc<dyn TokenStore>,
    /// Held for the whole of a login or logout, so token writes never interleave.
    gate: Mutex<()>,
}

impl SessionClient {
    pub fn new(auth: Arc<dyn AuthService>, store: Arc<dyn TokenStore>) -> Self {
        Self {
            auth,
            store,
            gate: Mutex::new(()),
        }
    }

    /// Creates an account. No session is started.
    pub async fn signup(&self, request: &SignupRequest) -> PortResult<UserResponse> {
        debug!(email = %request.email, "Submitting signup");
        let user = self.auth.signup(request).await?;
        info!(user_id = user.id, "Signup succeeded");
        Ok(user)
    }

    /// Logs in and stores the returned pair in a single write.
    ///
    /// Concurrent calls queue behind each other; each one stores the pair
    /// its own request produced.
    pub async fn login(&self, request: &LoginRequest) -> PortResult<TokenPair> {
        let _gate = self.gate.lock().await;
        debug!(email = %request.email, "Submitting login");
        let tokens = self.auth.login(request).await?;
        self.store.set(&tokens)?;
        info!("Login succeeded; session tokens stored");
        Ok(tokens)
    }

    /// Ends the session.
    ///
    /// The store is cleared on every exit path: remote success, error status,
    /// network failure, a panic inside the adapter, or this future being
    /// dropped mid-call. Remote failures are logged and swallowed.
    pub async fn logout(&self) {
        let mut guard = ClearOnDrop {
            store: self.store.as_ref(),
            _gate: None,
        };
        guard._gate = Some(self.gate.lock().await);

        let Some(access_token) = self.access_token() else {
            debug!("No stored session; skipping remote logout");
            return;
        };

        match self.auth.logout(&access_token).await {
            Ok(()) => info!("Remote logout succeeded"),
            Err(e) => warn!(error = %e, "Remote logout failed; clearing local session anyway"),
        }
    }

    /// Whether a complete token pair is stored. Never touches the network.
    pub fn is_logged_in(&self) -> bool {
        self.store.load().is_some()
    }

    /// The bearer credential for authorized calls, if a session is stored.
    pub fn access_token(&self) -> Option<String> {
        self.store.load().map(|pair| pair.access_token)
    }
}

/// Clears the store when dropped, before releasing the gate it holds.
struct ClearOnDrop<'a> {
    store: &'a dyn TokenStore,
    _gate: Option<MutexGuard<'a, ()>>,
}

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        match self.store.clear() {
            Ok(()) => debug!("Local session cleared"),
            Err(e) => warn!(error = %e, "Failed to clear local session"),
        }
    }
}
