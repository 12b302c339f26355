//! Supported JavaScript package managers.

use clap::ValueEnum;
use std::fmt::Display;

use crate::constants::{lockfiles, START_SCRIPT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    /// Choices offered by the interactive prompt, in display order.
    pub const CHOICES: [PackageManager; 3] =
        [PackageManager::Pnpm, PackageManager::Npm, PackageManager::Yarn];

    /// The executable name, used as the prefix of every command.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Lockfile of the competing manager that has to go when this one is
    /// chosen. Only npm and pnpm templates ship each other's lockfile.
    pub fn conflicting_lockfile(&self) -> Option<&'static str> {
        match self {
            PackageManager::Npm => Some(lockfiles::PNPM),
            PackageManager::Pnpm => Some(lockfiles::NPM),
            PackageManager::Yarn => None,
        }
    }

    pub fn version_command(&self) -> String {
        format!("{self} --version")
    }

    /// Global installation through npm, used when the manager is missing.
    pub fn global_install_command(&self) -> String {
        format!("npm install -g {self}")
    }

    pub fn install_command(&self) -> String {
        format!("{self} install")
    }

    pub fn build_command(&self, bundler: &str, mode: &str) -> String {
        format!("{self} exec {bundler} --mode={mode}")
    }

    pub fn start_command(&self) -> String {
        format!("{self} run {START_SCRIPT}")
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
