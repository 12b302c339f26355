#![allow(dead_code)]

use create_my_app::command::CommandRunner;
use create_my_app::error::{Error, Result};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const TEMPLATE: &str = "tests/templates/express_app";
pub const EXPECTED: &str = "tests/expected/express_app";

/// Absolute path of a fixture directory.
pub fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

/// Relative paths of every file below `dir`.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = list_files(dir1);
    let files2 = list_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {dir1:?}");
    println!("Expected output: {dir2:?}");

    for file in files1.iter().filter(|f| !files2.contains(f)) {
        println!("  + {file:?} (only in actual)");
    }
    for file in files2.iter().filter(|f| !files1.contains(f)) {
        println!("  - {file:?} (only in expected)");
    }
    for file in files1.iter().filter(|f| files2.contains(f)) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("  ~ {file:?}");
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees hold the same files with the same content.
pub fn assert_dirs_equal(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// A single recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub command: String,
    pub working_dir: PathBuf,
}

/// Command runner that records invocations instead of spawning processes.
///
/// Commands registered through [`RecordingRunner::failing_on`] fail with a
/// `CommandExecutionError`; everything else succeeds.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Call>>,
    failing: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, command: &str) -> Self {
        self.failing.push(command.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|call| call.command.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, working_dir: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call { command: command.to_string(), working_dir: working_dir.to_path_buf() });
        if self.failing.iter().any(|failing| failing == command) {
            return Err(Error::CommandExecutionError {
                command: command.to_string(),
                detail: "Process finished with exit status: 1".to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }
}
