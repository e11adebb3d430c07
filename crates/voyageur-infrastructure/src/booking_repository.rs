//! Booking repository implementation.
//!
//! Stores the booking list as one JSON array in `bookings.json` under the
//! data directory. Reads are lenient: an absent or unparseable file yields
//! the empty list, so a corrupted store never blocks new bookings.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use voyageur_core::booking::{Booking, BookingRepository};
use voyageur_core::error::{Result, VoyageurError};

use crate::config::VoyageurConfig;
use crate::paths::{BOOKINGS_FILENAME, VoyageurPaths};
use crate::storage::AtomicJsonFile;

/// File-backed booking repository.
pub struct JsonBookingRepository {
    file: Arc<AtomicJsonFile<Vec<Booking>>>,
}

impl JsonBookingRepository {
    /// Creates a repository over the default data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file: Arc::new(AtomicJsonFile::new(VoyageurPaths::bookings_file()?)),
        })
    }

    /// Creates a repository over the configured data directory.
    pub fn from_config(config: &VoyageurConfig) -> Result<Self> {
        Ok(Self::with_base_path(config.effective_data_dir()?))
    }

    /// Creates a repository under a custom base directory (for testing).
    pub fn with_base_path(base: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(base.join(BOOKINGS_FILENAME))),
        }
    }

    fn load_list(file: &AtomicJsonFile<Vec<Booking>>) -> Result<Vec<Booking>> {
        match file.load() {
            Ok(Some(bookings)) => Ok(bookings),
            Ok(None) => Ok(Vec::new()),
            Err(err) if err.is_serialization() => {
                warn!(path = %file.path().display(), error = %err, "discarding unparseable booking list");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl BookingRepository for JsonBookingRepository {
    async fn load(&self) -> Result<Vec<Booking>> {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || Self::load_list(&file))
            .await
            .map_err(|e| VoyageurError::internal(format!("Failed to join storage task: {}", e)))?
    }

    async fn append(&self, booking: &Booking) -> Result<()> {
        let file = Arc::clone(&self.file);
        let booking = booking.clone();
        // Locked read-modify-write; concurrent appends serialize on the
        // lock instead of racing on the shared temp file.
        tokio::task::spawn_blocking(move || {
            file.update(Vec::new(), |bookings| {
                bookings.push(booking);
                Ok(())
            })
        })
        .await
        .map_err(|e| VoyageurError::internal(format!("Failed to join storage task: {}", e)))?
    }
}
