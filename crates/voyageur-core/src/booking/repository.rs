//! Booking repository trait.

use async_trait::async_trait;

use super::model::Booking;
use crate::error::Result;

/// An abstract repository for the persisted booking list.
///
/// Decouples the booking action from the storage mechanism. Bookings are an
/// append-only ordered list; there is no cancel or delete path.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Loads all persisted bookings in insertion order.
    ///
    /// Absent or unparseable stored data yields the empty list rather than
    /// an error; only genuine IO failures are propagated.
    async fn load(&self) -> Result<Vec<Booking>>;

    /// Appends one booking to the persisted list.
    ///
    /// Implementations rewrite the full list (read-modify-write with
    /// last-writer-wins semantics; single-user usage is assumed).
    async fn append(&self, booking: &Booking) -> Result<()>;
}
