use super::*;
use crate::session::SessionClient;
use crate::store::MemoryTokenStore;
use crate::testing::{tagged_pair, FakeAuthService, RecordingNavigator};

fn guard_for(stored: bool) -> (RouteGuard, Arc<AuthSessionManager>, Arc<RecordingNavigator>) {
    let store = Arc::new(if stored {
        MemoryTokenStore::with_tokens(tagged_pair(1))
    } else {
        MemoryTokenStore::new()
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let client = Arc::new(SessionClient::new(
        Arc::new(FakeAuthService::default()),
        store,
    ));
    let manager = Arc::new(AuthSessionManager::new(client, navigator.clone()));
    let guard = RouteGuard::new(manager.clone(), navigator.clone());
    (guard, manager, navigator)
}

// =============================================================
// decide
// =============================================================

#[test]
fn loading_is_pending() {
    let state = SessionState {
        is_logged_in: false,
        is_loading: true,
    };
    assert_eq!(decide(state), GuardDecision::Pending);
}

#[test]
fn resolved_anonymous_redirects_to_login() {
    let state = SessionState {
        is_logged_in: false,
        is_loading: false,
    };
    assert_eq!(decide(state), GuardDecision::Redirect(Route::Login));
}

#[test]
fn resolved_authenticated_renders() {
    let state = SessionState {
        is_logged_in: true,
        is_loading: false,
    };
    assert_eq!(decide(state), GuardDecision::Render);
}

// =============================================================
// RouteGuard
// =============================================================

#[test]
fn check_before_resolution_is_pending() {
    let (guard, _, navigator) = guard_for(true);
    assert_eq!(guard.check(Route::NewTrip), GuardDecision::Pending);
    assert!(navigator.routes().is_empty());
}

#[test]
fn unprotected_routes_always_render() {
    let (guard, _, _) = guard_for(false);
    assert_eq!(guard.check(Route::Login), GuardDecision::Render);
    assert_eq!(guard.check(Route::Signup), GuardDecision::Render);
}

#[tokio::test]
async fn admit_waits_for_resolution_then_redirects() {
    let (guard, manager, navigator) = guard_for(false);

    let admitted = tokio::spawn(async move { guard.admit(Route::Home).await });
    tokio::task::yield_now().await;
    manager.resolve();

    assert_eq!(
        admitted.await.unwrap(),
        GuardDecision::Redirect(Route::Login)
    );
    assert_eq!(navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn admit_renders_for_stored_session() {
    let (guard, manager, navigator) = guard_for(true);
    manager.resolve();

    assert_eq!(guard.admit(Route::NewTrip).await, GuardDecision::Render);
    assert!(navigator.routes().is_empty());
}
