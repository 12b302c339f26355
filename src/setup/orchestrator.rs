use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::{
    command::{quote_arg, CommandRunner},
    constants::{COMMIT_MESSAGE_PREFIX, DEFAULT_BUILD_MODE, DEFAULT_BUNDLER},
    error::{Error, Result},
    ignore::IgnorePolicy,
    ioutils::{create_destination, ensure_destination_absent, ensure_outside_template, parent_dir},
    lockfile,
    package_manager::PackageManager,
    prompt::{select_package_manager, SingleChoicePrompter},
    setup::step::{FailurePolicy, SetupStep},
    template::materialize,
};

/// Immutable configuration for one setup run.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Directory the project is copied from.
    pub template_root: PathBuf,
    /// Directory to create; it must not exist yet.
    pub destination: PathBuf,
    /// Entry name never copied out of the template.
    pub self_name: String,
    pub ignore_policy: IgnorePolicy,
    pub bundler: String,
    pub build_mode: String,
    pub skip_install: bool,
    pub skip_git: bool,
}

impl SetupConfig {
    pub fn new<T, D, S>(template_root: T, destination: D, self_name: S) -> Self
    where
        T: Into<PathBuf>,
        D: Into<PathBuf>,
        S: Into<String>,
    {
        Self {
            template_root: template_root.into(),
            destination: destination.into(),
            self_name: self_name.into(),
            ignore_policy: IgnorePolicy::defaults(),
            bundler: DEFAULT_BUNDLER.to_string(),
            build_mode: DEFAULT_BUILD_MODE.to_string(),
            skip_install: false,
            skip_git: false,
        }
    }

    /// The name the project is referred to by in messages and the commit.
    pub fn project_name(&self) -> String {
        self.destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.destination.display().to_string())
    }

    /// Directory commands run in before the destination exists.
    fn invocation_dir(&self) -> &Path {
        parent_dir(&self.destination)
    }

    /// The git command recording the freshly copied project.
    pub fn commit_command(&self) -> String {
        let message = format!("{COMMIT_MESSAGE_PREFIX} {}", self.project_name());
        format!("git commit -m {}", quote_arg(&message))
    }
}

/// Result of a finished setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSummary {
    pub destination: PathBuf,
    pub package_manager: PackageManager,
    /// Steps that ran, in order.
    pub completed: Vec<SetupStep>,
}

impl SetupSummary {
    /// Shell command that starts the generated project.
    pub fn start_command(&self) -> String {
        format!("cd {} && {}", self.destination.display(), self.package_manager.start_command())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    Completed(SetupSummary),
    /// The package manager prompt was aborted; nothing was written.
    Interrupted,
}

/// Drives a template from selection to a committed, built project.
///
/// Commands run in an explicit directory, the process working directory is
/// never changed.
pub struct SetupOrchestrator<'a> {
    config: &'a SetupConfig,
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn SingleChoicePrompter,
    completed: Vec<SetupStep>,
}

impl<'a> SetupOrchestrator<'a> {
    pub fn new(
        config: &'a SetupConfig,
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn SingleChoicePrompter,
    ) -> Self {
        Self { config, runner, prompter, completed: Vec::new() }
    }

    /// Executes the complete setup workflow
    pub fn run(mut self) -> Result<SetupOutcome> {
        // Nothing may run, not even the prompt, against a destination that
        // cannot be created cleanly.
        ensure_destination_absent(&self.config.destination)?;
        ensure_outside_template(&self.config.destination, &self.config.template_root)?;

        let manager = match self.select_package_manager() {
            Ok(manager) => manager,
            Err(Error::PromptInterrupted) => {
                info!("Package manager selection was interrupted, nothing was written");
                return Ok(SetupOutcome::Interrupted);
            }
            Err(e) => return Err(e),
        };

        let mut next = SetupStep::SelectPackageManager.next();
        while let Some(step) = next {
            self.execute(step, manager)?;
            next = step.next();
        }

        Ok(SetupOutcome::Completed(SetupSummary {
            destination: self.config.destination.clone(),
            package_manager: manager,
            completed: self.completed,
        }))
    }

    fn execute(&mut self, step: SetupStep, manager: PackageManager) -> Result<()> {
        let config = self.config;
        if self.is_skipped(step) {
            info!("Skipping '{step}'");
            return Ok(());
        }

        match step {
            // Resolved before the pipeline starts.
            SetupStep::SelectPackageManager => Ok(()),
            SetupStep::VerifyOrInstall => self.verify_or_install(manager),
            SetupStep::CreateDestination => self.create_destination(),
            SetupStep::Materialize => self.materialize(),
            SetupStep::Reconcile => self.reconcile(manager),
            SetupStep::InstallDependencies => self.run_in_project(step, &manager.install_command()),
            SetupStep::Build => {
                let build = manager.build_command(&config.bundler, &config.build_mode);
                self.run_in_project(step, &build)
            }
            SetupStep::GitInit => self.run_in_project(step, "git init"),
            SetupStep::GitAdd => self.run_in_project(step, "git add ."),
            SetupStep::GitCommit => self.run_in_project(step, &config.commit_command()),
            SetupStep::Done => {
                self.enter(step);
                self.completed.push(step);
                Ok(())
            }
        }
    }

    fn is_skipped(&self, step: SetupStep) -> bool {
        match step {
            SetupStep::InstallDependencies | SetupStep::Build => self.config.skip_install,
            SetupStep::GitInit | SetupStep::GitAdd | SetupStep::GitCommit => self.config.skip_git,
            _ => false,
        }
    }

    fn enter(&self, step: SetupStep) {
        debug!("==> {step}");
    }

    fn select_package_manager(&mut self) -> Result<PackageManager> {
        self.enter(SetupStep::SelectPackageManager);
        let manager = select_package_manager(self.prompter)?;
        info!("Using {manager}");
        self.completed.push(SetupStep::SelectPackageManager);
        Ok(manager)
    }

    /// Checks the manager is installed, installing it globally through npm
    /// otherwise. The installation result is not checked again.
    fn verify_or_install(&mut self, manager: PackageManager) -> Result<()> {
        let config = self.config;
        let cwd = config.invocation_dir();
        if !self.run_step(SetupStep::VerifyOrInstall, &manager.version_command(), cwd)? {
            warn!("{manager} not found. Installing {manager}...");
            if let Err(e) = self.runner.run(&manager.global_install_command(), cwd) {
                warn!("{e}; continuing without {manager} being verified");
            }
            self.completed.push(SetupStep::VerifyOrInstall);
        }
        Ok(())
    }

    fn create_destination(&mut self) -> Result<()> {
        self.enter(SetupStep::CreateDestination);
        create_destination(&self.config.destination)?;
        info!("Created '{}'", self.config.destination.display());
        self.completed.push(SetupStep::CreateDestination);
        Ok(())
    }

    fn materialize(&mut self) -> Result<()> {
        self.enter(SetupStep::Materialize);
        let policy = &self.config.ignore_policy;
        materialize(
            &self.config.template_root,
            &self.config.destination,
            &self.config.self_name,
            |name| policy.should_ignore(name),
        )?;
        self.completed.push(SetupStep::Materialize);
        Ok(())
    }

    fn reconcile(&mut self, manager: PackageManager) -> Result<()> {
        self.enter(SetupStep::Reconcile);
        lockfile::reconcile(&self.config.destination, manager)?;
        self.completed.push(SetupStep::Reconcile);
        Ok(())
    }

    fn run_in_project(&mut self, step: SetupStep, command: &str) -> Result<()> {
        let config = self.config;
        self.run_step(step, command, &config.destination).map(|_| ())
    }

    /// Runs the command of a step and applies the step's failure policy.
    ///
    /// # Returns
    /// * `Ok(true)` - The command succeeded and the step is recorded
    /// * `Ok(false)` - The command failed but the step is recoverable
    fn run_step(&mut self, step: SetupStep, command: &str, cwd: &Path) -> Result<bool> {
        self.enter(step);
        match self.runner.run(command, cwd) {
            Ok(()) => {
                self.completed.push(step);
                Ok(true)
            }
            Err(e) => match step.failure_policy() {
                FailurePolicy::RecoverableWithFallback => {
                    debug!("Recoverable failure in '{step}': {e}");
                    Ok(false)
                }
                FailurePolicy::Fatal => {
                    error!("Step '{step}' failed");
                    Err(e)
                }
            },
        }
    }
}

/// Runs the full setup with the given collaborators.
pub fn run_setup(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    prompter: &dyn SingleChoicePrompter,
) -> Result<SetupOutcome> {
    SetupOrchestrator::new(config, runner, prompter).run()
}
