//! Trip plan repository trait.

use async_trait::async_trait;

use super::model::TripPlan;
use crate::error::Result;

/// An abstract repository for the saved-trip-plan list.
///
/// Same contract as the booking list: append-only, full-list rewrites,
/// lenient reads.
#[async_trait]
pub trait TripPlanRepository: Send + Sync {
    /// Loads all saved plans in insertion order.
    ///
    /// Absent or unparseable stored data yields the empty list.
    async fn load(&self) -> Result<Vec<TripPlan>>;

    /// Appends one plan to the persisted list.
    async fn append(&self, plan: &TripPlan) -> Result<()>;
}
