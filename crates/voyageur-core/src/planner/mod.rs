//! Trip budget planning: validated requests, the fixed-percentage split,
//! and the saved-plan persistence seam.

pub mod model;
pub mod repository;

pub use model::{BudgetBreakdown, BudgetLine, TripPlan, TripRequest};
pub use repository::TripPlanRepository;
