use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};

/// Executes external commands on behalf of the setup pipeline.
pub trait CommandRunner {
    /// Runs `command` to completion inside `working_dir`.
    ///
    /// Returns normally only when the command exits successfully.
    fn run(&self, command: &str, working_dir: &Path) -> Result<()>;
}

/// Runs commands through the platform shell with the console inherited,
/// so installer, bundler and git output appear as they are produced.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<()> {
        log::info!("Running: {command}");
        log::debug!("Working directory: {}", working_dir.display());

        let status = Self::shell_command(command)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandExecutionError {
                command: command.to_string(),
                detail: e.to_string(),
                code: None,
            })?;

        check_status(command, status)
    }
}

/// Quotes `arg` so the shell used by [`ShellCommandRunner`] passes it to the
/// program as one literal argument.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if cfg!(windows) {
        // cmd has no escape for a quote inside a quoted argument.
        Cow::Owned(format!("\"{}\"", arg.replace('"', "")))
    } else {
        shell_words::quote(arg)
    }
}

fn check_status(command: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(Error::CommandExecutionError {
        command: command.to_string(),
        detail: format!("Process finished with {status}"),
        code: status.code(),
    })
}
