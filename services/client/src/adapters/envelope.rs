//! services/client/src/adapters/envelope.rs
//!
//! The backend wraps every response in `{status, data, message}`. This module
//! turns that envelope (plus the HTTP status) into a `PortResult`.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use trip_planner_core::ports::{PortError, PortResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: EnvelopeStatus,
    /// Absent and `null` both read as `None`.
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Interprets a response body.
///
/// Success needs both a 2xx status and a `SUCCESS` envelope. Any other
/// readable envelope becomes `PortError::Remote` with the server's message;
/// an unreadable error body becomes `Remote` without one.
pub fn parse_envelope<T: DeserializeOwned>(http_status: u16, body: &str) -> PortResult<Option<T>> {
    let is_success = (200..300).contains(&http_status);
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) if is_success && envelope.status == EnvelopeStatus::Success => {
            Ok(envelope.data)
        }
        Ok(envelope) => Err(PortError::Remote {
            status: Some(http_status),
            message: envelope.message,
        }),
        Err(e) if is_success => Err(PortError::Unexpected(format!(
            "malformed response body: {e}"
        ))),
        Err(_) => Err(PortError::Remote {
            status: Some(http_status),
            message: None,
        }),
    }
}

/// Reads the body of `response` and interprets it as an envelope.
pub async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> PortResult<Option<T>> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;
    parse_envelope(status, &body)
}

/// A `SUCCESS` envelope for these endpoints must carry data.
pub fn require_data<T>(data: Option<T>) -> PortResult<T> {
    data.ok_or_else(|| PortError::Unexpected("success response carried no data".to_string()))
}

pub fn transport_error(e: reqwest::Error) -> PortError {
    PortError::Network(e.to_string())
}
