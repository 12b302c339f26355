//! Dialoguer-based implementation of the prompt interface

use super::interface::{SingleChoiceConfig, SingleChoicePrompter};
use crate::error::{Error, Result};
use dialoguer::Select;
use std::io;

/// Terminal prompter backed by dialoguer.
///
/// `Esc`, `q` and `Ctrl-C` all count as an interruption.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = Select::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        match select.interact_opt().map_err(io::Error::from) {
            Ok(Some(index)) => Ok(index),
            Ok(None) => Err(Error::PromptInterrupted),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(Error::PromptInterrupted),
            Err(e) => Err(Error::PromptError(e.to_string())),
        }
    }
}
