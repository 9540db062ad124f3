//! crates/trip_planner_core/src/planner.rs
//!
//! Hands a finished wizard off to the downstream collaborators: the backend
//! trip resource, and for the AI path the recommendation service.

#[cfg(test)]
#[path = "planner_test.rs"]
mod planner_test;

use crate::domain::{CreatedTrip, RecommendationBatch};
use crate::ports::{PortError, PortResult, RecommendationService, TripService};
use crate::session::SessionClient;
use crate::wizard::{CreationMethod, TripWizard};
use std::sync::Arc;
use tracing::info;

/// The result of handing off a completed wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum Handoff {
    /// The trip was created and recommendations were fetched for it.
    Ai {
        trip: CreatedTrip,
        recommendations: RecommendationBatch,
    },
    /// The trip was created; places are picked on the map from here.
    Map { trip: CreatedTrip },
}

impl Handoff {
    pub fn trip(&self) -> &CreatedTrip {
        match self {
            Handoff::Ai { trip, .. } | Handoff::Map { trip } => trip,
        }
    }
}

pub struct TripPlanner {
    session: Arc<SessionClient>,
    trips: Arc<dyn TripService>,
    recommender: Arc<dyn RecommendationService>,
}

impl TripPlanner {
    pub fn new(
        session: Arc<SessionClient>,
        trips: Arc<dyn TripService>,
        recommender: Arc<dyn RecommendationService>,
    ) -> Self {
        Self {
            session,
            trips,
            recommender,
        }
    }

    /// Creates the trip as a draft and, for the AI path, asks for
    /// recommendations.
    ///
    /// Fails with `InvalidTransition` unless the wizard is at a terminal step,
    /// and with `Unauthorized` (before any network call) when no session is
    /// stored.
    pub async fn hand_off(&self, wizard: &TripWizard) -> PortResult<Handoff> {
        let (method, draft) = wizard.handoff().ok_or_else(|| {
            PortError::InvalidTransition(format!(
                "wizard at {:?} has not chosen a creation method",
                wizard.step()
            ))
        })?;
        let access_token = self.session.access_token().ok_or(PortError::Unauthorized)?;

        let trip = self.trips.create_trip(&access_token, draft).await?;
        info!(trip_id = trip.id, ?method, "Trip draft created");

        match method {
            CreationMethod::Ai => {
                let recommendations = self.recommender.recommend(draft).await?;
                info!(
                    trip_id = trip.id,
                    count = recommendations.recommendations.len(),
                    "Recommendations received"
                );
                Ok(Handoff::Ai {
                    trip,
                    recommendations,
                })
            }
            CreationMethod::Map => Ok(Handoff::Map { trip }),
        }
    }
}
