//! crates/trip_planner_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like HTTP clients,
//! the filesystem or a rendering surface.

use crate::domain::{
    CreatedTrip, LoginRequest, RecommendationBatch, Route, SignupRequest, TokenKey, TokenPair,
    TripDraft, UserResponse,
};
use crate::validation::ValidationError;
use async_trait::async_trait;

/// Shown to the user when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "요청을 처리하지 못했습니다. 잠시 후 다시 시도해주세요.";

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network, storage).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// Local input was rejected before reaching the remote service.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote service answered with a non-success status or envelope.
    #[error("Remote service rejected the request ({}): {}", status_label(.status), message_or_fallback(.message))]
    Remote {
        status: Option<u16>,
        message: Option<String>,
    },

    /// The remote service could not be reached or its reply could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// The durable session store could not be written.
    #[error("Session storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The operation is not permitted in the current session state.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

fn status_label(status: &Option<u16>) -> String {
    status.map_or_else(|| "no status".to_string(), |s| s.to_string())
}

fn message_or_fallback(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE)
}

impl PortError {
    /// The text a form should display for this failure.
    ///
    /// Server-supplied messages are used verbatim; everything without one
    /// falls back to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            PortError::Validation(err) => err.to_string(),
            PortError::Remote {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable holder of the session's token pair.
///
/// Reads never fail: a medium that cannot be read is reported as "absent".
pub trait TokenStore: Send + Sync {
    /// Replaces the stored pair in a single write.
    fn set(&self, tokens: &TokenPair) -> PortResult<()>;

    /// Removes both tokens.
    fn clear(&self) -> PortResult<()>;

    fn get(&self, key: TokenKey) -> Option<String>;

    /// The stored pair, only if both halves are present.
    fn load(&self) -> Option<TokenPair> {
        Some(TokenPair {
            access_token: self.get(TokenKey::Access)?,
            refresh_token: self.get(TokenKey::Refresh)?,
        })
    }
}

/// The remote auth service.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn signup(&self, request: &SignupRequest) -> PortResult<UserResponse>;

    async fn login(&self, request: &LoginRequest) -> PortResult<TokenPair>;

    /// Invalidates the session server-side. The response body is not used.
    async fn logout(&self, access_token: &str) -> PortResult<()>;
}

/// The backend's trip resource.
#[async_trait]
pub trait TripService: Send + Sync {
    async fn create_trip(&self, access_token: &str, draft: &TripDraft) -> PortResult<CreatedTrip>;
}

/// The external AI recommendation service.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, draft: &TripDraft) -> PortResult<RecommendationBatch>;
}

/// Moves the user to another view of the client shell.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
