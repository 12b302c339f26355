//! Constants used throughout create-my-app

/// Destination used when no name is given on the command line
pub const DEFAULT_APP_NAME: &str = "my-app";

/// Template directory looked up next to the executable
pub const DEFAULT_TEMPLATE_DIR: &str = "base-app";

/// Environment variable overriding the template directory
pub const TEMPLATE_ENV_VAR: &str = "CREATE_MY_APP_TEMPLATE";

/// Per-template ignore file name
pub const IGNORE_FILE: &str = ".templateignore";

/// Template file renamed to `.gitignore` in the destination
pub const GITIGNORE_TEMPLATE: &str = "gitignore";

/// Name of the materialized gitignore file
pub const GITIGNORE: &str = ".gitignore";

/// Patterns always skipped during materialization
pub const DEFAULT_IGNORE_PATTERNS: &[&str] =
    &[".git", "node_modules", "dist", GITIGNORE_TEMPLATE, IGNORE_FILE];

/// Marker turning an ignore pattern into a prefix rule
pub const WILDCARD: char = '*';

/// Default bundler invoked by the build step
pub const DEFAULT_BUNDLER: &str = "webpack";

/// Default bundler mode
pub const DEFAULT_BUILD_MODE: &str = "development";

/// Subject of the first commit, followed by the project name
pub const COMMIT_MESSAGE_PREFIX: &str = "Initial commit from create-my-app for";

/// Script the generated project is started with
pub const START_SCRIPT: &str = "start:dev";

/// Lockfile names
pub mod lockfiles {
    pub const NPM: &str = "package-lock.json";
    pub const PNPM: &str = "pnpm-lock.yaml";
}

/// Interactive prompt texts
pub mod prompts {
    pub const PACKAGE_MANAGER: &str = "Which package manager do you want to use?";
    pub const INTERRUPTED: &str =
        "Prompt was interrupted. You can restart the setup by running the script again.";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
