use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: directory '{destination}' already exists. Please choose a different name.")]
    DestinationExistsError { destination: String },

    #[error("Cannot proceed: parent directory '{parent}' of the destination does not exist.")]
    DestinationParentMissingError { parent: String },

    #[error("Cannot proceed: destination '{destination}' lies inside the template directory '{template_dir}'.")]
    DestinationInsideTemplateError { destination: String, template_dir: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// An external command could not be spawned or finished with a failure status.
    #[error("Failed to execute command: {command}. {detail}")]
    CommandExecutionError { command: String, detail: String, code: Option<i32> },

    /// The user aborted the interactive selection.
    #[error("Prompt was interrupted.")]
    PromptInterrupted,

    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// A failed external command hands its own exit code through, everything
    /// else maps to the generic failure status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandExecutionError { code: Some(code), .. } if *code != 0 => *code,
            Error::PromptInterrupted => exit_codes::SUCCESS,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Convenience type alias for Results with this crate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with [`Error::exit_code`].
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
