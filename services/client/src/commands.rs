//! services/client/src/commands.rs
//!
//! The flows behind each CLI command. Each one goes through the session
//! manager and route guard exactly as a page of the shell would.

use crate::error::ClientError;
use crate::state::AppState;
use tracing::info;
use trip_planner_core::auth::SessionState;
use trip_planner_core::domain::{LoginRequest, Route, UserResponse};
use trip_planner_core::guard::GuardDecision;
use trip_planner_core::planner::Handoff;
use trip_planner_core::validation::SignupForm;
use trip_planner_core::wizard::{CreationMethod, TripForm, TripWizard};

/// What happened when a protected flow was attempted.
#[derive(Debug)]
pub enum Outcome<T> {
    Done(T),
    /// The guard sent the user elsewhere before anything ran.
    Redirected(Route),
}

/// Validates the form locally, then creates the account.
///
/// Validation failures never reach the remote service.
pub async fn signup(state: &AppState, form: &SignupForm) -> Result<UserResponse, ClientError> {
    let request = form.validate().map_err(trip_planner_core::ports::PortError::from)?;
    let user = state.auth.signup(&request).await?;
    info!(user_id = user.id, "Account created");
    Ok(user)
}

pub async fn login(state: &AppState, request: &LoginRequest) -> Result<(), ClientError> {
    state.auth.login(request).await?;
    Ok(())
}

/// Always succeeds from the user's point of view.
pub async fn logout(state: &AppState) {
    state.auth.logout().await;
}

pub async fn status(state: &AppState) -> SessionState {
    state.auth.wait_until_resolved().await;
    state.auth.state()
}

/// Runs the trip wizard end to end: fill in the info step, submit, pick the
/// creation method, and hand the draft off.
pub async fn plan(
    state: &AppState,
    form: TripForm,
    method: CreationMethod,
) -> Result<Outcome<Handoff>, ClientError> {
    if let GuardDecision::Redirect(route) = state.guard.admit(Route::NewTrip).await {
        return Ok(Outcome::Redirected(route));
    }

    let mut wizard = TripWizard::new();
    wizard.edit(|draft| *draft = form)?;
    wizard.submit()?;
    wizard.choose(method)?;

    let handoff = state.planner.hand_off(&wizard).await?;
    Ok(Outcome::Done(handoff))
}
