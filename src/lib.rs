/// Handles argument parsing and wiring of the setup pipeline.
pub mod cli;

/// Runs external commands.
pub mod command;

/// Defaults shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Decides which template entries are left out of a copy.
pub mod ignore;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Locates the template directory.
pub mod loader;

/// Removes lockfiles of the package manager that was not chosen.
pub mod lockfile;

/// Supported package managers and their commands.
pub mod package_manager;

/// User input and interaction handling.
pub mod prompt;

/// Ordered setup steps turning a template into a runnable project.
pub mod setup;

/// Copies template trees into new projects.
pub mod template;
