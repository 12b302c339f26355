use std::path::PathBuf;

/// A single decision taken while materializing a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOperation {
    CreateDirectory { target: PathBuf },
    Copy { source: PathBuf, target: PathBuf },
    /// Skipped because it is the running entry point or matched an ignore rule.
    Ignore { source: PathBuf, reason: IgnoreReason },
    /// The `gitignore` template written out as `.gitignore`.
    RenameGitignore { source: PathBuf, target: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    SelfExclusion,
    Rule,
}

impl CopyOperation {
    /// Gets a message describing the operation.
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self) -> String {
        match self {
            CopyOperation::CreateDirectory { target } => {
                format!("Creating directory '{}'", target.display())
            }
            CopyOperation::Copy { source, target } => {
                format!("Copying '{}' to '{}'", source.display(), target.display())
            }
            CopyOperation::Ignore { source, reason: IgnoreReason::SelfExclusion } => {
                format!("Skipping '{}' (running entry point)", source.display())
            }
            CopyOperation::Ignore { source, reason: IgnoreReason::Rule } => {
                format!("Skipping '{}' (matches an ignore rule)", source.display())
            }
            CopyOperation::RenameGitignore { source, target } => {
                format!("Copying '{}' to '{}' (renamed)", source.display(), target.display())
            }
        }
    }

    /// Ignored entries are only interesting when debugging.
    pub fn log(&self) {
        match self {
            CopyOperation::Ignore { .. } => log::debug!("{}", self.get_message()),
            _ => log::info!("{}", self.get_message()),
        }
    }
}
