//! Duplicate operation coordination
//!
//! Turns command-line arguments and configuration into one folder
//! duplication: pick the name, find a free target, copy, then open.

use crate::cli::Args;
use crate::cli::prompt::prompt_for_name;
use crate::config::validation::validate_folder_name;
use crate::config::{Config, default_locations};
use crate::error::DupError;
use crate::naming::{NamingKind, NamingStrategy};
use crate::operations::open::{OpenMode, open_folder};
use crate::operations::service::{DuplicationRequest, FolderDuplicationService};
use crate::system::System;
use crate::utils::path::{absolutize, split_base_name};
use anyhow::{Context as _, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// How a duplicate operation ended
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DuplicateOutcome {
    /// The folder was copied to this path
    Duplicated(PathBuf),
    /// Dry run: the folder would be copied to this path
    Planned(PathBuf),
    /// The user gave up at the name prompt
    Cancelled,
}

/// Coordinates the complete duplicate operation
pub struct DuplicateOperation<'src> {
    source: PathBuf,
    name: Option<String>,
    interactive: bool,
    naming: NamingKind,
    exclude_patterns: Vec<String>,
    open_mode: OpenMode,
    dry_run: bool,
    show_progress: bool,
    system: &'src dyn System,
}

impl<'src> DuplicateOperation<'src> {
    /// Create a new duplicate operation from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be determined
    /// - The configuration file cannot be loaded, parsed or validated
    /// - The source path has no final component to name a copy after
    pub fn new(args: &Args, system: &'src dyn System) -> Result<Self> {
        let current_dir = system
            .current_dir()
            .context("Failed to determine the current directory")?;

        let mut config = Config::resolve(
            system,
            args.config.as_deref(),
            &default_locations(&current_dir),
        )?;
        merge_cli_args(&mut config, args);
        config.validate()?;

        let source = args
            .source
            .as_deref()
            .map_or_else(|| current_dir.clone(), |source| absolutize(source, &current_dir));

        if split_base_name(&source).1.is_empty() {
            return Err(DupError::configuration(format!(
                "Cannot duplicate a folder without a name: {}",
                source.display()
            ))
            .into());
        }

        Ok(Self {
            source,
            name: args.name.clone(),
            interactive: args.interactive,
            naming: config.naming,
            exclude_patterns: config.exclude_patterns,
            open_mode: OpenMode::from_settings(config.open, config.open_command),
            dry_run: args.dry_run,
            show_progress: !args.quiet,
            system,
        })
    }

    /// The resolved folder to duplicate
    #[must_use]
    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The exclude patterns in effect, configured ones first
    #[must_use]
    #[inline]
    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude_patterns
    }

    /// The way the result will be opened
    #[must_use]
    #[inline]
    pub const fn open_mode(&self) -> &OpenMode {
        &self.open_mode
    }

    /// Execute the operation, prompting on the terminal if asked to
    pub fn execute(&self) -> Result<DuplicateOutcome> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stderr();
        self.execute_with(&mut input, &mut output)
    }

    /// Execute the operation, prompting through `input` and `output`
    pub fn execute_with(
        &self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<DuplicateOutcome> {
        info!("Duplicating {}", self.source.display());

        let Some(name) = self.choose_name(input, output)? else {
            info!("Duplication cancelled");
            return Ok(DuplicateOutcome::Cancelled);
        };
        validate_folder_name(&name)?;

        let service = FolderDuplicationService::new(self.system, NamingStrategy::Custom(name.clone()));
        let target_path = service.generate_target_path(&self.source);
        let available_path = service.find_available_path(&target_path);
        if available_path != target_path {
            debug!(
                "{} is taken, using {}",
                target_path.display(),
                available_path.display()
            );
        }

        if self.dry_run {
            self.check_source()?;
            self.report_plan(&available_path);
            return Ok(DuplicateOutcome::Planned(available_path));
        }

        let request = DuplicationRequest::new(
            self.source.clone(),
            available_path,
            self.exclude_patterns.clone(),
        );

        let spinner = self.spinner();
        let result = service.duplicate_folder(&request);
        spinner.finish_and_clear();
        let duplicated = result?;

        open_folder(&duplicated, &self.open_mode)?;

        info!("Folder duplicated successfully: {name}");
        Ok(DuplicateOutcome::Duplicated(duplicated))
    }

    /// Decide on the new folder name: given, prompted for, or suggested
    fn choose_name(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<Option<String>> {
        if let Some(name) = self.name.as_ref() {
            return Ok(Some(name.clone()));
        }

        let (_, base_name) = split_base_name(&self.source);
        let suggested = NamingStrategy::from(self.naming).generate_name(&base_name);
        debug!("Suggested name ({}): {suggested}", self.naming);

        if self.interactive {
            return prompt_for_name(input, output, &suggested).context("Failed to read folder name");
        }

        Ok(Some(suggested))
    }

    /// The source checks a real run makes, without copying anything
    fn check_source(&self) -> Result<(), DupError> {
        if !self.system.exists(&self.source) {
            return Err(DupError::source_not_found(&self.source));
        }
        if !self.system.is_dir(&self.source) {
            return Err(DupError::filesystem(
                format!("Failed to copy {}", self.source.display()),
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Source is not a directory: {}", self.source.display()),
                ),
            ));
        }
        Ok(())
    }

    fn report_plan(&self, target: &Path) {
        info!("Dry run preview - no files will be modified:");
        info!("  Source: {}", self.source.display());
        info!("  Target: {}", target.display());
        if self.exclude_patterns.is_empty() {
            info!("  Exclude patterns: (none)");
        } else {
            info!("  Exclude patterns: {}", self.exclude_patterns.join(", "));
        }
        match self.open_mode {
            OpenMode::Disabled => {}
            OpenMode::PlatformDefault => info!("  Would open the new folder"),
            OpenMode::Command(ref command) => info!("  Would open the new folder with: {command}"),
        }
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Duplicating folder...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

/// Merge CLI arguments into the loaded configuration
///
/// CLI exclude patterns are appended after configured ones.
pub fn merge_cli_args(config: &mut Config, args: &Args) {
    config.exclude_patterns.extend(args.excludes.iter().cloned());

    if let Some(naming) = args.naming {
        config.naming = naming;
    }
    if args.open {
        config.open = true;
    }
    if let Some(command) = args.open_with.as_ref() {
        config.open_command = Some(command.clone());
    }
}
