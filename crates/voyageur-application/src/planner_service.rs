//! Trip planning use case.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use voyageur_core::error::Result;
use voyageur_core::notification::{Notification, Notifier};
use voyageur_core::planner::{TripPlan, TripPlanRepository, TripRequest};
use voyageur_infrastructure::VoyageurConfig;

const DEFAULT_PLANNING_DELAY: Duration = Duration::from_millis(1500);

/// Coordinates trip-plan generation and saving.
///
/// Generation simulates a remote call with a fixed cooperative delay before
/// the (purely local) allocation runs. Nothing cancels the delay, but it is
/// just an awaited timer.
pub struct PlannerService {
    repository: Arc<dyn TripPlanRepository>,
    notifier: Arc<dyn Notifier>,
    planning_delay: Duration,
}

impl PlannerService {
    pub fn new(repository: Arc<dyn TripPlanRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
            planning_delay: DEFAULT_PLANNING_DELAY,
        }
    }

    /// Builds a service with the latency set in `config`.
    pub fn from_config(
        repository: Arc<dyn TripPlanRepository>,
        notifier: Arc<dyn Notifier>,
        config: &VoyageurConfig,
    ) -> Self {
        Self::new(repository, notifier).with_planning_delay(config.planner_delay())
    }

    /// Overrides the simulated planning latency (zero in tests).
    pub fn with_planning_delay(mut self, delay: Duration) -> Self {
        self.planning_delay = delay;
        self
    }

    /// Generates a trip plan from the form.
    ///
    /// Validation failures are returned immediately (field messages are
    /// shown inline, not as a notification) and skip the simulated delay.
    pub async fn generate(&self, request: &TripRequest) -> Result<TripPlan> {
        request.validate()?;

        sleep(self.planning_delay).await;

        let plan = TripPlan::from_request(request)?;
        info!(id = %plan.id, destination = %plan.destination, "trip plan generated");
        self.notifier
            .notify(Notification::success("Trip plan generated successfully!"));
        Ok(plan)
    }

    /// Appends a generated plan to the saved-plan list.
    pub async fn save(&self, plan: &TripPlan) -> Result<()> {
        match self.repository.append(plan).await {
            Ok(()) => {
                info!(id = %plan.id, "trip plan saved");
                self.notifier
                    .notify(Notification::success("Trip plan saved successfully!"));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to persist trip plan");
                self.notifier.notify(Notification::error(
                    "Failed to save trip plan. Please try again.",
                ));
                Err(err)
            }
        }
    }

    /// The persisted plans, oldest first.
    pub async fn saved_plans(&self) -> Result<Vec<TripPlan>> {
        self.repository.load().await
    }
}
