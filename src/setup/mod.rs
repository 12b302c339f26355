//! The setup pipeline: select a package manager, copy the template and
//! bring the copy to a runnable, committed state.

pub mod orchestrator;
pub mod step;

pub use orchestrator::{run_setup, SetupConfig, SetupOrchestrator, SetupOutcome, SetupSummary};
pub use step::{FailurePolicy, SetupStep};
