//! Domain layer for Voyageur: listing catalog, filtering, selection state,
//! bookings, the trip-budget planner, and the repository traits that
//! decouple them from storage.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod notification;
pub mod planner;
pub mod selection;

// Re-export common error type
pub use error::VoyageurError;
