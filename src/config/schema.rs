//! Site configuration schema.
//!
//! The host site's YAML configuration carries a `flickr:` mapping with the
//! API credentials and an optional cache directory. The rest of the document
//! is kept around untyped so dotted variable references in tag markup
//! (e.g. `page.flickr_set`) can be resolved against it.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FlickrsetError, Result};

/// The `flickr:` section of the site configuration.
///
/// Every credential is optional here; [`Credentials::resolve`] decides which
/// ones are actually required, after environment overrides are applied.
///
/// [`Credentials::resolve`]: crate::config::Credentials::resolve
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlickrSection {
    pub api_key: Option<String>,
    pub shared_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_secret: Option<String>,
    /// Directory for cached photoset files. No caching when absent.
    pub cache_dir: Option<PathBuf>,
    /// REST endpoint override. Defaults to the public Flickr API.
    pub endpoint: Option<String>,
}

/// Parsed site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Typed `flickr:` section.
    pub flickr: FlickrSection,
    /// Full document, for dotted variable lookup.
    doc: serde_yaml::Value,
}

#[derive(Debug, Deserialize)]
struct RawSite {
    #[serde(default)]
    flickr: FlickrSection,
}

impl SiteConfig {
    /// Parse a site configuration from YAML text.
    ///
    /// `path` is only used for error reporting.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        let doc: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| FlickrsetError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let raw: RawSite =
            serde_yaml::from_value(doc.clone()).map_err(|e| FlickrsetError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self {
            flickr: raw.flickr,
            doc,
        })
    }

    /// An empty configuration (no credentials, no cache).
    pub fn empty() -> Self {
        Self {
            flickr: FlickrSection::default(),
            doc: serde_yaml::Value::Null,
        }
    }

    /// Look up a dotted reference (`section.key[.key…]`) in the document.
    ///
    /// Only scalar leaves resolve; mappings and sequences return `None`.
    pub fn lookup(&self, reference: &str) -> Option<String> {
        let mut node = &self.doc;
        for segment in reference.split('.') {
            node = node.get(segment)?;
        }
        match node {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
