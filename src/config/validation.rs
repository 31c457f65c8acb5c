//! Configuration validation logic

use crate::config::Config;
use crate::error::DupError;
use anyhow::Result;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - An exclude pattern is empty
/// - The open command is empty
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    for (index, pattern) in config.exclude_patterns.iter().enumerate() {
        if pattern.is_empty() {
            return Err(DupError::configuration(format!(
                "Exclude pattern #{} cannot be empty",
                index + 1
            ))
            .into());
        }
    }

    if let Some(command) = config.open_command.as_ref()
        && command.trim().is_empty()
    {
        return Err(DupError::configuration("Open command cannot be empty").into());
    }

    Ok(())
}

/// Validate a folder name typed by the user
///
/// Returns the message to show when the name is rejected.
#[must_use]
pub fn folder_name_error(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Please enter a folder name");
    }
    if name.contains('/') || name.contains('\\') {
        return Some("Folder name cannot contain / or \\");
    }
    if name == "." || name == ".." {
        return Some("Folder name cannot be . or ..");
    }
    None
}

/// Validate a folder name, turning a rejection into a configuration error
pub fn validate_folder_name(name: &str) -> Result<()> {
    match folder_name_error(name) {
        Some(message) => Err(DupError::configuration(message).into()),
        None => Ok(()),
    }
}
