//! Non-interactive prompter answering from preset values

use super::interface::{SingleChoiceConfig, SingleChoicePrompter};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Answers prompts without a terminal.
///
/// Answers are given as choice labels and looked up per prompt text. A prompt
/// without a configured answer behaves as if the user had aborted it.
#[derive(Debug, Default, Clone)]
pub struct AutomaticPrompter {
    choice_responses: HashMap<String, String>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice_response(mut self, prompt: &str, choice: &str) -> Self {
        self.choice_responses.insert(prompt.to_string(), choice.to_string());
        self
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let Some(answer) = self.choice_responses.get(&config.prompt) else {
            return Err(Error::PromptInterrupted);
        };

        log::debug!("Answering '{}' with '{answer}'", config.prompt);
        config.choices.iter().position(|choice| choice == answer).ok_or_else(|| {
            Error::PromptError(format!(
                "'{answer}' is not one of {}",
                config.choices.join(", ")
            ))
        })
    }
}
