use crate::constants::{
    verbosity, DEFAULT_APP_NAME, DEFAULT_BUILD_MODE, DEFAULT_BUNDLER, TEMPLATE_ENV_VAR,
};
use crate::package_manager::PackageManager;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for create-my-app.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory to create the project in.
    #[arg(value_name = "DESTINATION", default_value = DEFAULT_APP_NAME)]
    pub destination: PathBuf,

    /// Template directory. Defaults to `base-app` next to the executable.
    #[arg(short, long, value_name = "DIR", env = TEMPLATE_ENV_VAR)]
    pub template: Option<PathBuf>,

    /// Package manager to use instead of asking.
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Additional names to leave out of the copy (comma-separated, `prefix*` allowed).
    #[arg(short, long, value_name = "PATTERN", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Bundler executed by the build step.
    #[arg(long, default_value = DEFAULT_BUNDLER)]
    pub bundler: String,

    /// Mode passed to the bundler.
    #[arg(long, default_value = DEFAULT_BUILD_MODE)]
    pub mode: String,

    /// Do not install dependencies or build.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Do not initialize a git repository.
    #[arg(long = "skip-git")]
    pub skip_git: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parses the process arguments, exiting on `--help`, `--version` or errors.
pub fn parse_cli() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
