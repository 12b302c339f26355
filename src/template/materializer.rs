use crate::{
    constants::{GITIGNORE, GITIGNORE_TEMPLATE},
    error::Result,
    ioutils::{copy_file, create_dir_all},
    template::operation::{CopyOperation, IgnoreReason},
};
use std::{
    fs::{self, DirEntry},
    path::Path,
};

/// Recursively copies a template tree into a destination tree.
///
/// Entries named like the running entry point, or rejected by the ignore
/// predicate, are skipped at every level. A file called `gitignore` is
/// always written out as `.gitignore` once its level has been processed.
pub struct Materializer<'a, F> {
    self_name: &'a str,
    should_ignore: F,
}

impl<'a, F> Materializer<'a, F>
where
    F: Fn(&str) -> bool,
{
    pub fn new(self_name: &'a str, should_ignore: F) -> Self {
        Self { self_name, should_ignore }
    }

    /// Copies `source` into `target`, creating `target` if it is missing.
    ///
    /// Filesystem errors abort immediately; whatever was written so far stays.
    pub fn materialize(&self, source: &Path, target: &Path) -> Result<()> {
        let entries = fs::read_dir(source)?.collect::<std::io::Result<Vec<DirEntry>>>()?;

        if !target.exists() {
            CopyOperation::CreateDirectory { target: target.to_path_buf() }.log();
            create_dir_all(target)?;
        }

        for entry in entries {
            self.process_entry(&entry, target)?;
        }

        let gitignore = source.join(GITIGNORE_TEMPLATE);
        if gitignore.is_file() {
            let renamed = target.join(GITIGNORE);
            CopyOperation::RenameGitignore { source: gitignore.clone(), target: renamed.clone() }
                .log();
            copy_file(&gitignore, &renamed)?;
        }
        Ok(())
    }

    fn process_entry(&self, entry: &DirEntry, target_dir: &Path) -> Result<()> {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let source = entry.path();

        let reason = if *name == *self.self_name {
            Some(IgnoreReason::SelfExclusion)
        } else if (self.should_ignore)(&*name) {
            Some(IgnoreReason::Rule)
        } else {
            None
        };
        if let Some(reason) = reason {
            CopyOperation::Ignore { source, reason }.log();
            return Ok(());
        }

        let target = target_dir.join(&file_name);
        if entry.file_type()?.is_dir() {
            self.materialize(&source, &target)
        } else {
            CopyOperation::Copy { source: source.clone(), target: target.clone() }.log();
            copy_file(&source, &target)
        }
    }
}

/// Copies the tree at `src_root` into `dest_root`.
///
/// # Arguments
/// * `src_root` - Template directory, only ever read
/// * `dest_root` - Destination directory, created if missing
/// * `self_name` - Entry name that is never copied
/// * `should_ignore` - Predicate deciding which entry names are skipped
pub fn materialize<F>(
    src_root: &Path,
    dest_root: &Path,
    self_name: &str,
    should_ignore: F,
) -> Result<()>
where
    F: Fn(&str) -> bool,
{
    Materializer::new(self_name, should_ignore).materialize(src_root, dest_root)
}
