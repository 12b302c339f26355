use std::fmt::Display;

/// What happens to the run when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The error aborts the whole setup.
    Fatal,
    /// The failure is logged and a fallback action takes over.
    RecoverableWithFallback,
}

/// States of the setup pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    SelectPackageManager,
    VerifyOrInstall,
    CreateDestination,
    Materialize,
    Reconcile,
    InstallDependencies,
    Build,
    GitInit,
    GitAdd,
    GitCommit,
    Done,
}

impl SetupStep {
    pub const SEQUENCE: [SetupStep; 11] = [
        SetupStep::SelectPackageManager,
        SetupStep::VerifyOrInstall,
        SetupStep::CreateDestination,
        SetupStep::Materialize,
        SetupStep::Reconcile,
        SetupStep::InstallDependencies,
        SetupStep::Build,
        SetupStep::GitInit,
        SetupStep::GitAdd,
        SetupStep::GitCommit,
        SetupStep::Done,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SetupStep::SelectPackageManager => "select package manager",
            SetupStep::VerifyOrInstall => "verify package manager",
            SetupStep::CreateDestination => "create destination",
            SetupStep::Materialize => "copy template",
            SetupStep::Reconcile => "reconcile lockfiles",
            SetupStep::InstallDependencies => "install dependencies",
            SetupStep::Build => "build",
            SetupStep::GitInit => "git init",
            SetupStep::GitAdd => "git add",
            SetupStep::GitCommit => "git commit",
            SetupStep::Done => "done",
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        match self {
            SetupStep::VerifyOrInstall => FailurePolicy::RecoverableWithFallback,
            _ => FailurePolicy::Fatal,
        }
    }

    /// The state following this one; `None` after [`SetupStep::Done`].
    pub fn next(&self) -> Option<SetupStep> {
        let position = Self::SEQUENCE.iter().position(|step| step == self)?;
        Self::SEQUENCE.get(position + 1).copied()
    }
}

impl Display for SetupStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
