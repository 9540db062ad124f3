//! crates/trip_planner_core/src/auth.rs
//!
//! The auth session manager: owns the application's view of whether the
//! user is logged in and broadcasts every change to its observers.
//!
//! The phase starts at `Loading`, is resolved from the session store once,
//! and from then on moves only between `Anonymous` and `Authenticated`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::domain::{LoginRequest, Route, SignupRequest, UserResponse};
use crate::ports::{Navigator, PortError, PortResult};
use crate::session::SessionClient;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

/// Where the session state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Anonymous,
    Authenticated,
}

/// The flag pair views read to decide what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub is_loading: bool,
}

impl From<AuthPhase> for SessionState {
    fn from(phase: AuthPhase) -> Self {
        Self {
            is_logged_in: phase == AuthPhase::Authenticated,
            is_loading: phase == AuthPhase::Loading,
        }
    }
}

pub struct AuthSessionManager {
    client: Arc<SessionClient>,
    navigator: Arc<dyn Navigator>,
    phase: watch::Sender<AuthPhase>,
    /// Held from the phase check of a login or logout through its transition.
    busy: Mutex<()>,
}

impl AuthSessionManager {
    /// Creates a manager in the `Loading` phase. Call [`resolve`](Self::resolve)
    /// (or use [`mount`](Self::mount)) before relying on its state.
    pub fn new(client: Arc<SessionClient>, navigator: Arc<dyn Navigator>) -> Self {
        let (phase, _) = watch::channel(AuthPhase::Loading);
        Self {
            client,
            navigator,
            phase,
            busy: Mutex::new(()),
        }
    }

    /// Creates a manager and immediately resolves it from the store.
    pub fn mount(client: Arc<SessionClient>, navigator: Arc<dyn Navigator>) -> Self {
        let manager = Self::new(client, navigator);
        manager.resolve();
        manager
    }

    /// Leaves `Loading` based on what the session store holds.
    ///
    /// Only the first call has an effect; later calls return the current phase.
    pub fn resolve(&self) -> AuthPhase {
        self.phase.send_if_modified(|phase| {
            if *phase != AuthPhase::Loading {
                return false;
            }
            *phase = if self.client.is_logged_in() {
                AuthPhase::Authenticated
            } else {
                AuthPhase::Anonymous
            };
            info!(phase = ?*phase, "Session resolved");
            true
        });
        self.phase()
    }

    pub fn phase(&self) -> AuthPhase {
        *self.phase.borrow()
    }

    pub fn state(&self) -> SessionState {
        self.phase().into()
    }

    /// A receiver that observes every phase change.
    pub fn subscribe(&self) -> watch::Receiver<AuthPhase> {
        self.phase.subscribe()
    }

    /// Waits until the startup check has completed and returns the phase.
    pub async fn wait_until_resolved(&self) -> AuthPhase {
        let mut rx = self.subscribe();
        let resolved = match rx.wait_for(|phase| *phase != AuthPhase::Loading).await {
            Ok(phase) => *phase,
            Err(_) => self.phase(),
        };
        resolved
    }

    /// Logs in. Permitted only while anonymous.
    ///
    /// A login queued behind another one is checked after the first has
    /// finished, so it is rejected if the first succeeded. On failure the
    /// phase is left unchanged and the error is returned for the form to
    /// display.
    pub async fn login(&self, request: &LoginRequest) -> PortResult<()> {
        let _busy = self.busy.lock().await;
        if self.resolve() == AuthPhase::Authenticated {
            return Err(PortError::InvalidTransition(
                "already logged in; log out first".to_string(),
            ));
        }

        match self.client.login(request).await {
            Ok(_) => {
                self.transition(AuthPhase::Authenticated);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Login failed");
                Err(e)
            }
        }
    }

    /// Creates an account. Never changes the session phase.
    pub async fn signup(&self, request: &SignupRequest) -> PortResult<UserResponse> {
        self.client.signup(request).await.inspect_err(|e| {
            warn!(error = %e, "Signup failed");
        })
    }

    /// Logs out and sends the user to the login view.
    ///
    /// Always ends `Anonymous`, whatever the remote service says, including
    /// when this future is dropped before the remote call returns.
    pub async fn logout(&self) {
        let _busy = self.busy.lock().await;
        self.resolve();
        let _signed_out = SignOutOnDrop { manager: self };
        self.client.logout().await;
    }

    fn transition(&self, next: AuthPhase) {
        let previous = self.phase.send_replace(next);
        if previous != next {
            info!(from = ?previous, to = ?next, "Session phase changed");
        }
    }
}

/// Moves the manager to `Anonymous` and the user to the login view when dropped.
struct SignOutOnDrop<'a> {
    manager: &'a AuthSessionManager,
}

impl Drop for SignOutOnDrop<'_> {
    fn drop(&mut self) {
        self.manager.transition(AuthPhase::Anonymous);
        self.manager.navigator.navigate(Route::Login);
    }
}
