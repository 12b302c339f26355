//! Interactive selection of the package manager
//!
//! The module is structured in layers:
//! - `interface`: abstract prompt interface independent of any UI library
//! - `dialoguer`: terminal implementation using the dialoguer library
//! - `automatic`: preset answers for non-interactive runs and tests

use crate::{
    constants::prompts,
    error::{Error, Result},
    package_manager::PackageManager,
};

pub mod automatic;
pub mod dialoguer;
pub mod interface;

pub use automatic::AutomaticPrompter;
pub use self::dialoguer::DialoguerPrompter;
pub use interface::{SingleChoiceConfig, SingleChoicePrompter};

/// Asks which package manager the generated project should use.
pub fn select_package_manager<P>(prompter: &P) -> Result<PackageManager>
where
    P: SingleChoicePrompter + ?Sized,
{
    let config = SingleChoiceConfig {
        prompt: prompts::PACKAGE_MANAGER.to_string(),
        choices: PackageManager::CHOICES.iter().map(|pm| pm.to_string()).collect(),
        default_index: Some(0),
    };
    let index = prompter.prompt_single_choice(&config)?;
    PackageManager::CHOICES
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("no package manager at position {index}")))
}
