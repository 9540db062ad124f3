//! services/client/src/adapters/recommendation.rs
//!
//! Adapter for the external AI recommendation service. Unlike the backend,
//! this service answers with a bare JSON body rather than an envelope.

use crate::adapters::envelope::transport_error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use trip_planner_core::domain::{RecommendationBatch, TripDraft};
use trip_planner_core::ports::{PortError, PortResult, RecommendationService};

/// Request body for `POST /api/v1/recommendations/`.
#[derive(Debug, Serialize)]
struct RecommendationRequest<'a> {
    destination: Option<&'a str>,
    preferences: Vec<&'a str>,
    budget: Option<&'a str>,
    duration_days: Option<u32>,
}

/// FastAPI's error shape; `detail` is a string for handled errors.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

#[derive(Clone)]
pub struct HttpRecommendationAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecommendationAdapter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationAdapter {
    async fn recommend(&self, draft: &TripDraft) -> PortResult<RecommendationBatch> {
        let request = RecommendationRequest {
            destination: Some(draft.region.as_str()),
            preferences: draft.style.as_deref().into_iter().collect(),
            budget: None,
            duration_days: Some(draft.duration_days()),
        };

        let response = self
            .client
            .post(format!("{}/api/v1/recommendations/", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorDetail>(&body)
                .ok()
                .and_then(|e| e.detail.as_str().map(str::to_string));
            return Err(PortError::Remote {
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| PortError::Unexpected(format!("malformed recommendation response: {e}")))
    }
}
