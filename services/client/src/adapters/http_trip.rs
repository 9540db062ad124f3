//! services/client/src/adapters/http_trip.rs
//!
//! Adapter for the backend's trip resource. Implements the `TripService` port.

use crate::adapters::envelope::{read_envelope, require_data, transport_error};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use trip_planner_core::domain::{CreatedTrip, Pace, TripDraft};
use trip_planner_core::ports::{PortResult, TripService};

/// Request body for `POST /api/trips`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TripRequestBody<'a> {
    title: &'a str,
    region: &'a str,
    style: Option<&'a str>,
    trip_style: Pace,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> From<&'a TripDraft> for TripRequestBody<'a> {
    fn from(draft: &'a TripDraft) -> Self {
        Self {
            title: &draft.title,
            region: &draft.region,
            style: draft.style.as_deref(),
            trip_style: draft.pace,
            start_date: draft.start_date,
            end_date: draft.end_date,
        }
    }
}

#[derive(Clone)]
pub struct HttpTripAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTripAdapter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }
}

#[async_trait]
impl TripService for HttpTripAdapter {
    async fn create_trip(&self, access_token: &str, draft: &TripDraft) -> PortResult<CreatedTrip> {
        let response = self
            .client
            .post(format!("{}/api/trips", self.base_url))
            .bearer_auth(access_token)
            .json(&TripRequestBody::from(draft))
            .send()
            .await
            .map_err(transport_error)?;
        require_data(read_envelope::<CreatedTrip>(response).await?)
    }
}
