//! Infrastructure layer for Voyageur.
//!
//! File-backed implementations of the core repository traits, platform path
//! resolution, and application configuration.

pub mod booking_repository;
pub mod config;
pub mod paths;
pub mod storage;
pub mod trip_plan_repository;

pub use booking_repository::JsonBookingRepository;
pub use config::VoyageurConfig;
pub use paths::VoyageurPaths;
pub use trip_plan_repository::JsonTripPlanRepository;
