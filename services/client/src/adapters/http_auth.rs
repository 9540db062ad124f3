//! services/client/src/adapters/http_auth.rs
//!
//! This module contains the adapter for the backend's auth endpoints.
//! It implements the `AuthService` port from the `core` crate.

use crate::adapters::envelope::{read_envelope, require_data, transport_error};
use async_trait::async_trait;
use serde::de::IgnoredAny;
use trip_planner_core::domain::{LoginRequest, SignupRequest, TokenPair, UserResponse};
use trip_planner_core::ports::{AuthService, PortResult};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `AuthService` port over HTTP.
#[derive(Clone)]
pub struct HttpAuthAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthAdapter {
    /// Creates a new `HttpAuthAdapter` talking to the backend at `base_url`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

//=========================================================================================
// `AuthService` Trait Implementation
//=========================================================================================

#[async_trait]
impl AuthService for HttpAuthAdapter {
    /// POST /api/auth/signup
    async fn signup(&self, request: &SignupRequest) -> PortResult<UserResponse> {
        let response = self
            .client
            .post(self.url("/api/auth/signup"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        require_data(read_envelope::<UserResponse>(response).await?)
    }

    /// POST /api/auth/login
    async fn login(&self, request: &LoginRequest) -> PortResult<TokenPair> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        require_data(read_envelope::<TokenPair>(response).await?)
    }

    /// POST /api/auth/logout, authorized with the access token.
    async fn logout(&self, access_token: &str) -> PortResult<()> {
        let response = self
            .client
            .post(self.url("/api/auth/logout"))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport_error)?;
        read_envelope::<IgnoredAny>(response).await?;
        Ok(())
    }
}
