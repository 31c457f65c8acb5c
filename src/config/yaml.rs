//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::DupError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;

/// Load and parse YAML configuration from file
pub fn load_config(system: &dyn System, path: &Path) -> Result<Config> {
    let content = system
        .read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    parse_config(&content).with_context(|| {
        format!(
            "Invalid configuration file: {}\n\
            Please check the syntax and structure of your configuration file",
            path.display()
        )
    })
}

/// Parse, schema-check and validate a YAML configuration document
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let document: Value = serde_yaml::from_str(content)
        .map_err(|e| DupError::configuration(format!("Failed to parse YAML: {e}")))?;

    // Check the raw document so unknown keys are reported, not dropped
    crate::config::schema::validate_against_schema(&document)?;

    let config: Config = serde_json::from_value(document)
        .map_err(|e| DupError::configuration(format!("Invalid configuration: {e}")))?;

    config.validate()?;

    Ok(config)
}
