//! services/client/src/error.rs
//!
//! Defines the primary error type for the client service.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::ConfigError;
use trip_planner_core::ports::PortError;
use trip_planner_core::wizard::WizardError;

/// The primary error type for the `client` service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// A wizard step was rejected.
    #[error("Trip wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// Represents an error from the underlying HTTP library while building the client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// The text to show the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Port(e) => e.user_message(),
            ClientError::Wizard(WizardError::Invalid(e)) => e.to_string(),
            other => other.to_string(),
        }
    }
}
