//! Site configuration discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::SiteConfig;
use crate::error::{FlickrsetError, Result};

/// Conventional site configuration file name.
pub const SITE_CONFIG_FILE: &str = "_config.yml";

/// Load and parse a site configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and `ConfigParse` if
/// the YAML is invalid.
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlickrsetError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FlickrsetError::Io(e)
        }
    })?;
    SiteConfig::from_yaml(&content, path)
}

/// Find the site configuration under a project root, if present.
pub fn find_site_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(SITE_CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}
