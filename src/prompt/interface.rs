//! Pure interfaces for prompting without external dependencies
//!
//! The setup pipeline only ever asks one single-choice question, so this is
//! the only seam it needs. Implementations report a user abort as
//! [`Error::PromptInterrupted`](crate::error::Error::PromptInterrupted).

use crate::error::Result;

/// Configuration for single choice selection
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub default_index: Option<usize>,
}

/// Abstract interface for single choice selection
pub trait SingleChoicePrompter {
    /// Returns the index of the selected entry in `config.choices`.
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize>;
}
