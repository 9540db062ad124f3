//! crates/trip_planner_core/src/guard.rs
//!
//! The route guard applied identically to every protected view.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::auth::{AuthSessionManager, SessionState};
use crate::domain::Route;
use crate::ports::Navigator;
use std::sync::Arc;
use tracing::debug;

/// What a protected view should do with the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup check still running: show a neutral waiting indicator.
    Pending,
    Redirect(Route),
    Render,
}

pub fn decide(state: SessionState) -> GuardDecision {
    if state.is_loading {
        GuardDecision::Pending
    } else if state.is_logged_in {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

pub struct RouteGuard {
    manager: Arc<AuthSessionManager>,
    navigator: Arc<dyn Navigator>,
}

impl RouteGuard {
    pub fn new(manager: Arc<AuthSessionManager>, navigator: Arc<dyn Navigator>) -> Self {
        Self { manager, navigator }
    }

    /// The decision for `route` right now, without waiting.
    pub fn check(&self, route: Route) -> GuardDecision {
        if !route.is_protected() {
            return GuardDecision::Render;
        }
        decide(self.manager.state())
    }

    /// Waits for the startup check, then decides and performs any redirect.
    ///
    /// Never returns `Pending`.
    pub async fn admit(&self, route: Route) -> GuardDecision {
        if !route.is_protected() {
            return GuardDecision::Render;
        }
        let phase = self.manager.wait_until_resolved().await;
        let decision = decide(phase.into());
        if let GuardDecision::Redirect(target) = decision {
            debug!(from = route.path(), to = target.path(), "Redirecting unauthenticated viewer");
            self.navigator.navigate(target);
        }
        decision
    }
}
