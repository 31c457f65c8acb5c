//! Configuration management module
//!
//! Handles YAML configuration parsing, JSON schema validation, and locating
//! the configuration file

pub mod schema;
pub mod validation;
pub mod yaml;

use crate::error::DupError;
use crate::naming::NamingKind;
use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = ".dupdir.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base names (or `*` globs) skipped while copying
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Strategy used to suggest a name when none is given
    #[serde(default)]
    pub naming: NamingKind,

    /// Command used to open the duplicated folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_command: Option<String>,

    /// Open the duplicated folder after copying
    #[serde(default)]
    pub open: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &Path) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }

    /// Load the configuration that applies to this run
    ///
    /// An `explicit` path must exist. Without one, the first existing file
    /// among `candidates` is used, and defaults apply if none exists.
    pub fn resolve(
        system: &dyn System,
        explicit: Option<&Path>,
        candidates: &[PathBuf],
    ) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            if !system.exists(path) {
                return Err(DupError::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            return Self::load_from_file(system, path);
        }

        for candidate in candidates {
            if system.exists(candidate) {
                debug!("Using configuration file {}", candidate.display());
                return Self::load_from_file(system, candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }
}

/// Configuration files looked up when none is given explicitly, in order
///
/// The per-directory file in `current_dir` comes first, then the user-wide
/// file in the platform configuration directory.
#[must_use]
pub fn default_locations(current_dir: &Path) -> Vec<PathBuf> {
    let mut locations = vec![current_dir.join(LOCAL_CONFIG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("dupdir").join("config.yaml"));
    }
    locations
}
