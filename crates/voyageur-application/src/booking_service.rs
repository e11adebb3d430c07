//! Booking use case.

use std::sync::Arc;
use tracing::{info, warn};

use voyageur_core::booking::{Booking, BookingRepository, BookingRequest};
use voyageur_core::error::Result;
use voyageur_core::notification::{Notification, Notifier};

/// Coordinates booking confirmation: validation, persistence, notification.
///
/// The repository and notifier are injected; the service owns no storage
/// state of its own.
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
    notifier: Arc<dyn Notifier>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Confirms a booking.
    ///
    /// A validation failure performs no side effect: the persisted list is
    /// untouched and the user sees one error notification. On success the
    /// booking is appended to the persisted list and a success notification
    /// is emitted.
    pub async fn book(&self, request: &BookingRequest) -> Result<Booking> {
        if let Err(err) = request.validate() {
            warn!(listing = %request.listing_name, "booking request failed validation");
            let message = err
                .validation_messages()
                .into_iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("; ");
            self.notifier.notify(Notification::error(message));
            return Err(err);
        }

        let booking = Booking::from_request(request);
        match self.repository.append(&booking).await {
            Ok(()) => {
                info!(id = %booking.id, listing = %booking.listing_name, "booking confirmed");
                self.notifier.notify(Notification::success(format!(
                    "Booking confirmed at {}!",
                    booking.listing_name
                )));
                Ok(booking)
            }
            Err(err) => {
                // Any failure on the save path surfaces as one generic
                // notification; the view must not crash.
                warn!(error = %err, "failed to persist booking");
                self.notifier.notify(Notification::error(
                    "Failed to save booking. Please try again.",
                ));
                Err(err)
            }
        }
    }

    /// The persisted booking history, oldest first.
    pub async fn history(&self) -> Result<Vec<Booking>> {
        self.repository.load().await
    }
}
