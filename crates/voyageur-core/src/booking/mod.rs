//! Booking: validated requests, confirmed records, and the persistence seam.

pub mod model;
pub mod repository;

pub use model::{Booking, BookingRequest};
pub use repository::BookingRepository;
