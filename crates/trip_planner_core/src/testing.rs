//! Scripted port implementations shared by the core's unit tests.

use crate::domain::{
    CreatedTrip, LoginRequest, Recommendation, RecommendationBatch, Route, SignupRequest, TokenKey,
    TokenPair, TripDraft, TripStatus, UserResponse,
};
use crate::ports::{
    AuthService, Navigator, PortError, PortResult, RecommendationService, TokenStore, TripService,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// How the fake backend answers a logout call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    Success,
    Status(u16),
    NetworkFailure,
    /// Never answers.
    Hang,
}

/// A scripted auth backend.
///
/// Each login returns a fresh pair tagged with the call number, after an
/// optional delay, so tests can tell concurrent logins apart.
pub struct FakeAuthService {
    pub login_delay: Duration,
    pub reject_login: Option<String>,
    pub reject_signup: Option<String>,
    pub logout_outcome: LogoutOutcome,
    pub login_calls: AtomicUsize,
    pub logout_tokens: Mutex<Vec<String>>,
}

impl Default for FakeAuthService {
    fn default() -> Self {
        Self {
            login_delay: Duration::ZERO,
            reject_login: None,
            reject_signup: None,
            logout_outcome: LogoutOutcome::Success,
            login_calls: AtomicUsize::new(0),
            logout_tokens: Mutex::new(Vec::new()),
        }
    }
}

impl FakeAuthService {
    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_tokens(&self) -> Vec<String> {
        self.logout_tokens.lock().unwrap().clone()
    }
}

pub fn tagged_pair(n: usize) -> TokenPair {
    TokenPair {
        access_token: format!("access-{n}"),
        refresh_token: format!("refresh-{n}"),
    }
}

pub fn sample_user(request: &SignupRequest) -> UserResponse {
    let at = NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    UserResponse {
        id: 1,
        email: request.email.clone(),
        name: request.name.clone(),
        role: "ROLE_USER".to_string(),
        created_at: at,
        modified_at: at,
    }
}

#[async_trait]
impl AuthService for FakeAuthService {
    async fn signup(&self, request: &SignupRequest) -> PortResult<UserResponse> {
        if let Some(message) = &self.reject_signup {
            return Err(PortError::Remote {
                status: Some(409),
                message: Some(message.clone()),
            });
        }
        Ok(sample_user(request))
    }

    async fn login(&self, _request: &LoginRequest) -> PortResult<TokenPair> {
        let n = self.login_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
        if let Some(message) = &self.reject_login {
            return Err(PortError::Remote {
                status: Some(401),
                message: Some(message.clone()),
            });
        }
        Ok(tagged_pair(n))
    }

    async fn logout(&self, access_token: &str) -> PortResult<()> {
        self.logout_tokens
            .lock()
            .unwrap()
            .push(access_token.to_string());
        match self.logout_outcome {
            LogoutOutcome::Success => Ok(()),
            LogoutOutcome::Status(status) => Err(PortError::Remote {
                status: Some(status),
                message: None,
            }),
            LogoutOutcome::NetworkFailure => {
                Err(PortError::Network("connection timed out".to_string()))
            }
            LogoutOutcome::Hang => std::future::pending().await,
        }
    }
}

/// A store whose medium is gone: writes fail, reads are empty.
#[derive(Debug, Default)]
pub struct UnavailableTokenStore;

impl TokenStore for UnavailableTokenStore {
    fn set(&self, _tokens: &TokenPair) -> PortResult<()> {
        Err(PortError::StorageUnavailable("no storage medium".to_string()))
    }

    fn clear(&self) -> PortResult<()> {
        Err(PortError::StorageUnavailable("no storage medium".to_string()))
    }

    fn get(&self, _key: TokenKey) -> Option<String> {
        None
    }
}

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Debug, Default)]
pub struct FakeTripService {
    tokens_seen: Mutex<Vec<String>>,
}

impl FakeTripService {
    pub fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl TripService for FakeTripService {
    async fn create_trip(&self, access_token: &str, draft: &TripDraft) -> PortResult<CreatedTrip> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(access_token.to_string());
        Ok(CreatedTrip {
            id: 7,
            user_id: 1,
            title: draft.title.clone(),
            region: draft.region.clone(),
            style: draft.style.clone(),
            pace: draft.pace,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: TripStatus::Draft,
            created_at: None,
            modified_at: None,
        })
    }
}

#[derive(Debug, Default)]
pub struct FakeRecommendationService {
    calls: AtomicUsize,
}

impl FakeRecommendationService {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationService for FakeRecommendationService {
    async fn recommend(&self, draft: &TripDraft) -> PortResult<RecommendationBatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RecommendationBatch {
            recommendations: vec![Recommendation {
                place: format!("{} 카페 거리", draft.region),
                description: "감성 카페 밀집 지역".to_string(),
                rating: 4.5,
            }],
            message: "Recommendations generated successfully".to_string(),
        })
    }
}
