//! services/client/src/adapters/navigator.rs
//!
//! The terminal's stand-in for a router: remembers where the shell was sent
//! and tells the user which command reaches that view.

use std::sync::Mutex;
use tracing::info;
use trip_planner_core::domain::Route;
use trip_planner_core::ports::Navigator;

#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent navigation target, if any.
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

/// The CLI command that shows `route`.
pub fn command_for(route: Route) -> &'static str {
    match route {
        Route::Home => "trip status",
        Route::Login => "trip login",
        Route::Signup => "trip signup",
        Route::NewTrip => "trip plan",
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        info!(path = route.path(), "Navigating");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}
