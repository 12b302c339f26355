use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{error::Result, ioutils::remove_file_if_exists, package_manager::PackageManager};

/// Removes the lockfile that belongs to the package manager that was not chosen.
///
/// # Returns
/// * `Ok(Some(path))` - The lockfile that was deleted
/// * `Ok(None)` - Nothing to delete for this manager, or the file was absent
pub fn reconcile<P: AsRef<Path>>(
    dest_root: P,
    manager: PackageManager,
) -> Result<Option<PathBuf>> {
    let Some(lockfile) = manager.conflicting_lockfile() else {
        debug!("No lockfile convention for {manager}, nothing to reconcile");
        return Ok(None);
    };

    let path = dest_root.as_ref().join(lockfile);
    if remove_file_if_exists(&path)? {
        info!("Removed '{}' (not used by {manager})", path.display());
        Ok(Some(path))
    } else {
        Ok(None)
    }
}
