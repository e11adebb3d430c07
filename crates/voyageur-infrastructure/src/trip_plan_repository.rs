//! Trip plan repository implementation.
//!
//! Stores the saved-plan list as one JSON array in `saved_trip_plans.json`
//! under the data directory, with the same lenient-read contract as the
//! booking list.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use voyageur_core::error::{Result, VoyageurError};
use voyageur_core::planner::{TripPlan, TripPlanRepository};

use crate::config::VoyageurConfig;
use crate::paths::{TRIP_PLANS_FILENAME, VoyageurPaths};
use crate::storage::AtomicJsonFile;

/// File-backed trip plan repository.
pub struct JsonTripPlanRepository {
    file: Arc<AtomicJsonFile<Vec<TripPlan>>>,
}

impl JsonTripPlanRepository {
    /// Creates a repository over the default data directory.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file: Arc::new(AtomicJsonFile::new(VoyageurPaths::trip_plans_file()?)),
        })
    }

    /// Creates a repository over the configured data directory.
    pub fn from_config(config: &VoyageurConfig) -> Result<Self> {
        Ok(Self::with_base_path(config.effective_data_dir()?))
    }

    /// Creates a repository under a custom base directory (for testing).
    pub fn with_base_path(base: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(base.join(TRIP_PLANS_FILENAME))),
        }
    }

    fn load_list(file: &AtomicJsonFile<Vec<TripPlan>>) -> Result<Vec<TripPlan>> {
        match file.load() {
            Ok(Some(plans)) => Ok(plans),
            Ok(None) => Ok(Vec::new()),
            Err(err) if err.is_serialization() => {
                warn!(path = %file.path().display(), error = %err, "discarding unparseable trip-plan list");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl TripPlanRepository for JsonTripPlanRepository {
    async fn load(&self) -> Result<Vec<TripPlan>> {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || Self::load_list(&file))
            .await
            .map_err(|e| VoyageurError::internal(format!("Failed to join storage task: {}", e)))?
    }

    async fn append(&self, plan: &TripPlan) -> Result<()> {
        let file = Arc::clone(&self.file);
        let plan = plan.clone();
        // Locked read-modify-write, same as the booking list.
        tokio::task::spawn_blocking(move || {
            file.update(Vec::new(), |plans| {
                plans.push(plan);
                Ok(())
            })
        })
        .await
        .map_err(|e| VoyageurError::internal(format!("Failed to join storage task: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use voyageur_core::planner::TripRequest;

    fn plan() -> TripPlan {
        TripPlan::from_request(&TripRequest {
            source: "Delhi".to_string(),
            destination: "Goa".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 11, 25),
            end_date: NaiveDate::from_ymd_opt(2023, 11, 30),
            travelers: 2,
            budget: 20000,
            include_flights: true,
            include_hotels: true,
            include_transport: false,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_append_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonTripPlanRepository::with_base_path(temp_dir.path().to_path_buf());

        let saved = plan();
        repo.append(&saved).await.unwrap();

        let plans = repo.load().await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0], saved);
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(TRIP_PLANS_FILENAME), "]]").unwrap();

        let repo = JsonTripPlanRepository::with_base_path(temp_dir.path().to_path_buf());
        assert!(repo.load().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_lose_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = Arc::new(JsonTripPlanRepository::with_base_path(
            temp_dir.path().to_path_buf(),
        ));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move { repo.append(&plan()).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.load().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_from_config_honors_data_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let config = VoyageurConfig {
            data_dir: Some(temp_dir.path().to_path_buf()),
            ..VoyageurConfig::default()
        };

        let repo = JsonTripPlanRepository::from_config(&config).unwrap();
        repo.append(&plan()).await.unwrap();

        assert!(temp_dir.path().join(TRIP_PLANS_FILENAME).exists());
    }
}
