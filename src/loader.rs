use crate::constants::DEFAULT_TEMPLATE_DIR;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Trait for locating the template a project is generated from.
pub trait TemplateLoader {
    /// Loads a template.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to the template directory
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }
        debug!("Using template at '{}'", path.display());
        Ok(path.to_path_buf())
    }
}

/// The template shipped alongside the executable.
pub fn default_template_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_TEMPLATE_DIR)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR))
}

/// Resolves the template root, falling back to [`default_template_root`].
pub fn get_template(template: Option<&Path>) -> Result<PathBuf> {
    match template {
        Some(path) => LocalLoader::new(path).load(),
        None => LocalLoader::new(default_template_root()).load(),
    }
}
