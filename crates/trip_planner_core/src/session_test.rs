use super::*;
use crate::domain::TokenKey;
use crate::ports::PortError;
use crate::store::MemoryTokenStore;
use crate::testing::{tagged_pair, FakeAuthService, LogoutOutcome, UnavailableTokenStore};
use std::time::Duration;

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "user@example.com".to_string(),
        password: "Abcd123!".to_string(),
    }
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        email: "user@example.com".to_string(),
        password: "Abcd123!".to_string(),
        name: "홍길동".to_string(),
    }
}

fn client_with(auth: FakeAuthService) -> (SessionClient, Arc<FakeAuthService>, Arc<MemoryTokenStore>) {
    let auth = Arc::new(auth);
    let store = Arc::new(MemoryTokenStore::new());
    let client = SessionClient::new(auth.clone(), store.clone());
    (client, auth, store)
}

// =============================================================
// signup / login
// =============================================================

#[tokio::test]
async fn signup_then_login_stores_both_tokens() {
    let (client, _, store) = client_with(FakeAuthService::default());

    let user = client.signup(&signup_request()).await.unwrap();
    assert_eq!(user.email, "user@example.com");
    assert!(!client.is_logged_in());

    let tokens = client.login(&login_request()).await.unwrap();
    assert!(client.is_logged_in());
    assert_eq!(store.get(TokenKey::Access), Some(tokens.access_token));
    assert_eq!(store.get(TokenKey::Refresh), Some(tokens.refresh_token));
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let (client, _, store) = client_with(FakeAuthService {
        reject_login: Some("이메일 또는 비밀번호가 올바르지 않습니다.".to_string()),
        ..FakeAuthService::default()
    });

    let err = client.login(&login_request()).await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "이메일 또는 비밀번호가 올바르지 않습니다."
    );
    assert!(store.load().is_none());
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn rejected_signup_carries_server_message() {
    let (client, _, _) = client_with(FakeAuthService {
        reject_signup: Some("이미 사용 중인 이메일입니다.".to_string()),
        ..FakeAuthService::default()
    });

    let err = client.signup(&signup_request()).await.unwrap_err();
    assert!(matches!(err, PortError::Remote { status: Some(409), .. }));
    assert_eq!(err.user_message(), "이미 사용 중인 이메일입니다.");
}

#[tokio::test]
async fn login_with_unavailable_storage_reports_it() {
    let auth = Arc::new(FakeAuthService::default());
    let client = SessionClient::new(auth, Arc::new(UnavailableTokenStore));

    let err = client.login(&login_request()).await.unwrap_err();
    assert!(matches!(err, PortError::StorageUnavailable(_)));
    assert!(!client.is_logged_in());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_logins_never_mix_token_pairs() {
    let (client, auth, store) = client_with(FakeAuthService {
        login_delay: Duration::from_millis(20),
        ..FakeAuthService::default()
    });
    let client = Arc::new(client);

    let a = {
        let client = client.clone();
        tokio::spawn(async move { client.login(&login_request()).await })
    };
    let b = {
        let client = client.clone();
        tokio::spawn(async move { client.login(&login_request()).await })
    };
    let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());

    assert_eq!(auth.login_calls(), 2);
    assert_ne!(a, b);
    let stored = store.load().unwrap();
    assert!(stored == a || stored == b);
    assert!(stored == tagged_pair(1) || stored == tagged_pair(2));
}

// =============================================================
// logout
// =============================================================

async fn logout_clears_after(outcome: LogoutOutcome) {
    let (client, auth, store) = client_with(FakeAuthService {
        logout_outcome: outcome,
        ..FakeAuthService::default()
    });
    client.login(&login_request()).await.unwrap();

    client.logout().await;

    assert!(store.load().is_none());
    assert!(store.get(TokenKey::Refresh).is_none());
    assert!(!client.is_logged_in());
    assert_eq!(auth.logout_tokens(), vec!["access-1".to_string()]);
}

#[tokio::test]
async fn logout_clears_after_remote_success() {
    logout_clears_after(LogoutOutcome::Success).await;
}

#[tokio::test]
async fn logout_clears_after_client_error_status() {
    logout_clears_after(LogoutOutcome::Status(401)).await;
}

#[tokio::test]
async fn logout_clears_after_network_failure() {
    logout_clears_after(LogoutOutcome::NetworkFailure).await;
}

#[tokio::test]
async fn logout_without_session_skips_remote_call() {
    let (client, auth, _) = client_with(FakeAuthService::default());
    client.logout().await;
    assert!(auth.logout_tokens().is_empty());
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn logout_with_unavailable_storage_does_not_fail() {
    let client = SessionClient::new(
        Arc::new(FakeAuthService::default()),
        Arc::new(UnavailableTokenStore),
    );
    client.logout().await;
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn dropped_logout_still_clears() {
    struct HangingLogout;

    #[async_trait::async_trait]
    impl AuthService for HangingLogout {
        async fn signup(&self, _request: &SignupRequest) -> PortResult<UserResponse> {
            unreachable!()
        }
        async fn login(&self, _request: &LoginRequest) -> PortResult<TokenPair> {
            unreachable!()
        }
        async fn logout(&self, _access_token: &str) -> PortResult<()> {
            std::future::pending().await
        }
    }

    let store = Arc::new(MemoryTokenStore::with_tokens(tagged_pair(1)));
    let client = SessionClient::new(Arc::new(HangingLogout), store.clone());

    let result = tokio::time::timeout(Duration::from_millis(20), client.logout()).await;
    assert!(result.is_err());
    assert!(store.load().is_none());
}

#[test]
fn access_token_requires_complete_pair() {
    let store = Arc::new(MemoryTokenStore::with_tokens(tagged_pair(3)));
    let client = SessionClient::new(Arc::new(FakeAuthService::default()), store);
    assert_eq!(client.access_token().as_deref(), Some("access-3"));
    assert!(client.is_logged_in());
}
