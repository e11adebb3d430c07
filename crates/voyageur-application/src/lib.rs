//! Application layer for Voyageur.
//!
//! Use-case services wiring the domain to storage and notifications:
//! listing browse state, booking confirmation, and trip planning.

pub mod booking_service;
pub mod listing_view;
pub mod notifier;
pub mod planner_service;

pub use booking_service::BookingService;
pub use listing_view::ListingView;
pub use notifier::TracingNotifier;
pub use planner_service::PlannerService;
