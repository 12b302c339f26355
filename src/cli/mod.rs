pub mod args;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Args};
pub use runner::{entry_point_name, print_outcome, run, Runner};
