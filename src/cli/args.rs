use crate::naming::NamingKind;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for dupdir
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "dupdir")]
#[command(about = "A CLI tool for duplicating a folder next to itself under a new name")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Folder to duplicate (defaults to the current directory)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Name of the new folder, created next to the source
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Strategy used to suggest a name when --name is not given
    #[arg(long, value_name = "KIND", value_enum)]
    pub naming: Option<NamingKind>,

    /// Ask for the new name on the terminal, offering the suggested one
    #[arg(short, long, conflicts_with = "name")]
    pub interactive: bool,

    /// Skip entries with this base name; '*' matches any characters (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Configuration file path
    #[arg(long, value_name = "PATH", env = "DUPDIR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would be copied without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Open the new folder after copying
    #[arg(long)]
    pub open: bool,

    /// Open the new folder with this command; the path is appended as an argument
    #[arg(long, value_name = "COMMAND")]
    pub open_with: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
