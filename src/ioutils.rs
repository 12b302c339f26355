use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Fails if the destination is already present or cannot be created because
/// its parent directory is missing.
pub fn ensure_destination_absent<P: AsRef<Path>>(destination: P) -> Result<PathBuf> {
    let destination = destination.as_ref();
    if destination.exists() {
        return Err(Error::DestinationExistsError {
            destination: destination.display().to_string(),
        });
    }
    let parent = parent_dir(destination);
    if !parent.is_dir() {
        return Err(Error::DestinationParentMissingError { parent: parent.display().to_string() });
    }
    Ok(destination.to_path_buf())
}

/// Directory containing `path`; `.` for a bare name.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Fails if the not yet created `destination` would end up inside
/// `template_root`, which would make the copy contain itself.
///
/// The parent of `destination` must exist.
pub fn ensure_outside_template<P: AsRef<Path>, T: AsRef<Path>>(
    destination: P,
    template_root: T,
) -> Result<()> {
    let destination = destination.as_ref();
    let template_root = std::fs::canonicalize(template_root.as_ref())?;
    let parent = std::fs::canonicalize(parent_dir(destination))?;
    let resolved = match destination.file_name() {
        Some(name) => parent.join(name),
        None => parent,
    };

    if resolved.starts_with(&template_root) {
        return Err(Error::DestinationInsideTemplateError {
            destination: destination.display().to_string(),
            template_dir: template_root.display().to_string(),
        });
    }
    Ok(())
}

/// Creates the destination root as a new, empty directory.
///
/// Unlike [`create_dir_all`] this never reuses an existing directory: if one
/// appeared since the pre-flight check the run stops.
pub fn create_destination<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    std::fs::create_dir(destination).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => Error::DestinationExistsError {
            destination: destination.display().to_string(),
        },
        _ => Error::IoError(e),
    })
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Copies a file byte for byte, replacing any existing target.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    std::fs::copy(source_path.as_ref(), dest_path.as_ref()).map(|_| ()).map_err(Error::IoError)
}

/// Removes a file, treating a missing file as already removed.
///
/// # Returns
/// * `Ok(true)` if the file existed and was deleted
pub fn remove_file_if_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    match std::fs::remove_file(path.as_ref()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::IoError(e)),
    }
}
