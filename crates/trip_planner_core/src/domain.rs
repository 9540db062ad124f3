//! crates/trip_planner_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! Field names follow the remote service's camelCase wire format so the same
//! structs can be handed straight to an HTTP adapter.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Session Tokens
//=========================================================================================

/// The bearer credentials issued by the remote auth service on login.
///
/// Both tokens always travel together; there is no way to hold one without
/// the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// The two keys under which a `TokenPair` is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKey {
    Access,
    Refresh,
}

impl TokenKey {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKey::Access => "accessToken",
            TokenKey::Refresh => "refreshToken",
        }
    }
}

impl TokenPair {
    pub fn get(&self, key: TokenKey) -> &str {
        match key {
            TokenKey::Access => &self.access_token,
            TokenKey::Refresh => &self.refresh_token,
        }
    }
}

//=========================================================================================
// Credentials / Profile
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The profile returned by a successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

//=========================================================================================
// Trips
//=========================================================================================

/// How densely the trip should be scheduled.
///
/// On the wire the backend calls this `tripStyle` and spells the ends of the
/// scale `RELAXED` and `TIGHT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pace {
    #[serde(rename = "RELAXED", alias = "SLOW")]
    Slow,
    #[default]
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "TIGHT", alias = "FAST")]
    Fast,
}

impl std::str::FromStr for Pace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Pace::Slow),
            "normal" => Ok(Pace::Normal),
            "fast" => Ok(Pace::Fast),
            other => Err(format!("unknown pace '{other}' (expected slow, normal or fast)")),
        }
    }
}

/// A validated set of trip parameters, produced by the wizard's first step.
///
/// `start_date <= end_date` always holds; the only constructor lives in the
/// wizard's validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub region: String,
    pub style: Option<String>,
    pub pace: Pace,
}

impl TripDraft {
    pub(crate) fn new(
        title: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        region: String,
        style: Option<String>,
        pace: Pace,
    ) -> Self {
        debug_assert!(start_date <= end_date);
        Self {
            title,
            start_date,
            end_date,
            region,
            style,
            pace,
        }
    }

    /// Number of calendar days covered, counting both ends.
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days).unwrap_or(1)
    }
}

/// Lifecycle status the backend assigns to a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Draft,
    Scheduled,
    #[serde(other)]
    Unknown,
}

/// A trip as stored by the backend after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTrip {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub region: String,
    pub style: Option<String>,
    #[serde(rename = "tripStyle")]
    pub pace: Pace,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TripStatus,
    pub created_at: Option<NaiveDateTime>,
    pub modified_at: Option<NaiveDateTime>,
}

/// A single place suggested by the AI recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub place: String,
    pub description: String,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBatch {
    pub recommendations: Vec<Recommendation>,
    pub message: String,
}

//=========================================================================================
// Routes
//=========================================================================================

/// The views of the client shell a navigator can be asked to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    NewTrip,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::NewTrip => "/trips/new",
        }
    }

    /// Whether viewing this route requires an authenticated session.
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Home | Route::NewTrip)
    }
}
