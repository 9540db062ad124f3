pub mod auth;
pub mod domain;
pub mod guard;
pub mod planner;
pub mod ports;
pub mod session;
pub mod store;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod testing;

pub use auth::{AuthPhase, AuthSessionManager, SessionState};
pub use domain::{
    CreatedTrip, LoginRequest, Pace, Recommendation, RecommendationBatch, Route, SignupRequest,
    TokenKey, TokenPair, TripDraft, TripStatus, UserResponse,
};
pub use guard::{GuardDecision, RouteGuard};
pub use planner::{Handoff, TripPlanner};
pub use ports::{
    AuthService, Navigator, PortError, PortResult, RecommendationService, TokenStore, TripService,
};
pub use session::SessionClient;
pub use store::MemoryTokenStore;
pub use validation::{validate_password, SignupForm, ValidationError};
pub use wizard::{CreationMethod, TripForm, TripWizard, WizardError, WizardEvent, WizardStep};
