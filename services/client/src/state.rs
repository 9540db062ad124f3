//! services/client/src/state.rs
//!
//! Defines the application's shared state: every adapter and core component,
//! wired together once at startup.

use crate::adapters::{
    FileTokenStore, HttpAuthAdapter, HttpRecommendationAdapter, HttpTripAdapter, TerminalNavigator,
};
use crate::config::Config;
use crate::error::ClientError;
use std::sync::Arc;
use tracing::debug;
use trip_planner_core::auth::AuthSessionManager;
use trip_planner_core::guard::RouteGuard;
use trip_planner_core::planner::TripPlanner;
use trip_planner_core::ports::{
    AuthService, Navigator, RecommendationService, TokenStore, TripService,
};
use trip_planner_core::session::SessionClient;

//=========================================================================================
// AppState (Shared Across All Commands)
//=========================================================================================

/// The shared application state, created once at startup.
pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<SessionClient>,
    pub auth: Arc<AuthSessionManager>,
    pub guard: RouteGuard,
    pub planner: TripPlanner,
    pub navigator: Arc<TerminalNavigator>,
}

impl AppState {
    /// Builds the HTTP adapters and file store described by `config`, and
    /// mounts the session manager on top of them.
    pub fn build(config: Config) -> Result<Self, ClientError> {
        let config = Arc::new(config);
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let auth_adapter: Arc<dyn AuthService> =
            Arc::new(HttpAuthAdapter::new(http.clone(), config.api_base_url.clone()));
        let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.session_file.clone()));
        debug!(path = %config.session_file.display(), "Using session file");

        let trips = Arc::new(HttpTripAdapter::new(http.clone(), config.api_base_url.clone()));
        let recommender = Arc::new(HttpRecommendationAdapter::new(
            http,
            config.ai_service_url.clone(),
        ));

        Ok(Self::assemble(config, auth_adapter, store, trips, recommender))
    }

    /// Wires the core components over already-built ports.
    pub fn assemble(
        config: Arc<Config>,
        auth_adapter: Arc<dyn AuthService>,
        store: Arc<dyn TokenStore>,
        trips: Arc<dyn TripService>,
        recommender: Arc<dyn RecommendationService>,
    ) -> Self {
        let navigator = Arc::new(TerminalNavigator::new());
        let dyn_navigator: Arc<dyn Navigator> = navigator.clone();

        let session = Arc::new(SessionClient::new(auth_adapter, store));
        let auth = Arc::new(AuthSessionManager::mount(
            session.clone(),
            dyn_navigator.clone(),
        ));
        let guard = RouteGuard::new(auth.clone(), dyn_navigator);
        let planner = TripPlanner::new(session.clone(), trips, recommender);

        Self {
            config,
            session,
            auth,
            guard,
            planner,
            navigator,
        }
    }
}
