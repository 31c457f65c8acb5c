//! Opening the duplicated folder

use crate::error::DupError;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// How the duplicated folder is opened
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OpenMode {
    /// Leave the folder alone
    #[default]
    Disabled,
    /// Use the platform's file opener
    PlatformDefault,
    /// Run a shell command with the folder path appended as an argument
    Command(String),
}

impl OpenMode {
    /// Pick the mode from the `open` switch and an optional command
    ///
    /// A command implies opening.
    #[must_use]
    #[inline]
    pub fn from_settings(open: bool, command: Option<String>) -> Self {
        match command {
            Some(command) => Self::Command(command),
            None if open => Self::PlatformDefault,
            None => Self::Disabled,
        }
    }
}

/// Open `path` according to `mode`
///
/// # Errors
///
/// Returns a `Command` error if the opener cannot be started or exits with
/// a failure status.
pub fn open_folder(path: &Path, mode: &OpenMode) -> Result<(), DupError> {
    let Some(mut command) = build_open_command(path, mode) else {
        return Ok(());
    };

    info!("Opening {}", path.display());
    debug!("Running {:?}", command);

    let output = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| DupError::command(format!("Failed to start {:?}: {e}", command.get_program())))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut error_msg = format!(
            "Opening {} failed with exit code {}",
            path.display(),
            output.status.code().unwrap_or(-1)
        );
        if !stderr.trim().is_empty() {
            error_msg.push_str(&format!("\nError output:\n{}", stderr.trim()));
        }
        return Err(DupError::command(error_msg));
    }

    Ok(())
}

/// Build the process that opens `path`, or `None` when opening is disabled
#[must_use]
pub fn build_open_command(path: &Path, mode: &OpenMode) -> Option<Command> {
    match *mode {
        OpenMode::Disabled => None,
        OpenMode::PlatformDefault => {
            let mut command = Command::new(platform_opener());
            command.arg(path);
            Some(command)
        }
        OpenMode::Command(ref user_command) => Some(shell_command(user_command, path)),
    }
}

/// Get the appropriate file opener for the current platform
const fn platform_opener() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Wrap `user_command` in the platform shell with `path` as its last argument
fn shell_command(user_command: &str, path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command
            .arg("/C")
            .arg(format!("{user_command} \"{}\"", path.display()));
        command
    } else {
        // The path travels as $1 so the shell never re-parses it
        let mut command = Command::new("sh");
        command
            .arg("-c")
            .arg(format!("{user_command} \"$1\""))
            .arg("dupdir")
            .arg(path);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_mode_from_settings() {
        assert_eq!(OpenMode::from_settings(false, None), OpenMode::Disabled);
        assert_eq!(OpenMode::from_settings(true, None), OpenMode::PlatformDefault);
        assert_eq!(
            OpenMode::from_settings(false, Some("code".to_owned())),
            OpenMode::Command("code".to_owned())
        );
    }

    #[test]
    fn test_disabled_builds_nothing() {
        assert!(build_open_command(Path::new("/work/app"), &OpenMode::Disabled).is_none());
    }

    #[test]
    fn test_platform_default_passes_path() {
        let command = build_open_command(Path::new("/work/app"), &OpenMode::PlatformDefault).unwrap();
        assert_eq!(command.get_program(), OsStr::new(platform_opener()));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec![OsStr::new("/work/app")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_user_command_keeps_path_separate() {
        let mode = OpenMode::Command("code -n".to_owned());
        let command = build_open_command(Path::new("/work/my app"), &mode).unwrap();
        assert_eq!(command.get_program(), OsStr::new("sh"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                OsStr::new("-c"),
                OsStr::new("code -n \"$1\""),
                OsStr::new("dupdir"),
                OsStr::new("/work/my app"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_reported() {
        let mode = OpenMode::Command("false".to_owned());
        let err = open_folder(Path::new("/tmp"), &mode).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        let mode = OpenMode::Command("test -n".to_owned());
        open_folder(Path::new("/tmp"), &mode).unwrap();
    }
}
