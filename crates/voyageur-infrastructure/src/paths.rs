//! Unified path management for Voyageur data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/voyageur/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/voyageur/     # Data directory
//! ├── bookings.json            # Persisted booking list
//! └── saved_trip_plans.json    # Persisted trip-plan list
//! ```

use std::path::PathBuf;

use voyageur_core::error::{Result, VoyageurError};

/// File name of the persisted booking list.
pub const BOOKINGS_FILENAME: &str = "bookings.json";
/// File name of the persisted trip-plan list.
pub const TRIP_PLANS_FILENAME: &str = "saved_trip_plans.json";

const APP_DIR: &str = "voyageur";

/// Unified path management for Voyageur.
pub struct VoyageurPaths;

impl VoyageurPaths {
    /// Returns the Voyageur configuration directory
    /// (e.g. `~/.config/voyageur/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| VoyageurError::config("Cannot determine config directory"))
    }

    /// Returns the Voyageur data directory
    /// (e.g. `~/.local/share/voyageur/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| VoyageurError::config("Cannot determine data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted booking list.
    pub fn bookings_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(BOOKINGS_FILENAME))
    }

    /// Returns the path to the persisted trip-plan list.
    pub fn trip_plans_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(TRIP_PLANS_FILENAME))
    }
}
