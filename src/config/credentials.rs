//! Flickr API credential resolution.
//!
//! Credentials come from the site configuration's `flickr:` section, with
//! environment variables taking precedence when set. Resolution produces a
//! plain value that is passed explicitly into every API call; there is no
//! process-wide client state.

use std::collections::HashMap;

use crate::config::schema::FlickrSection;
use crate::error::{FlickrsetError, Result};

/// Environment override for `flickr.api_key`.
pub const ENV_API_KEY: &str = "FLICKR_API_KEY";
/// Environment override for `flickr.shared_secret`.
pub const ENV_SHARED_SECRET: &str = "FLICKR_SHARED_SECRET";
/// Environment override for `flickr.access_token`.
pub const ENV_ACCESS_TOKEN: &str = "FLICKR_ACCESS_TOKEN";
/// Environment override for `flickr.access_secret`.
pub const ENV_ACCESS_SECRET: &str = "FLICKR_ACCESS_SECRET";

/// A complete set of Flickr API credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub shared_secret: String,
    pub access_token: String,
    pub access_secret: String,
}

impl Credentials {
    /// Resolve credentials from the config section and the process
    /// environment.
    pub fn resolve(section: &FlickrSection) -> Result<Self> {
        Self::resolve_with(section, &std::env::vars().collect())
    }

    /// Resolve credentials with an explicit environment map.
    ///
    /// The map takes precedence over config values, mirroring how the
    /// process environment overrides the site configuration.
    pub fn resolve_with(
        section: &FlickrSection,
        env: &HashMap<String, String>,
    ) -> Result<Self> {
        let pick = |env_key: &str, config_value: &Option<String>, config_key: &str| {
            env.get(env_key)
                .cloned()
                .or_else(|| config_value.clone())
                .ok_or_else(|| FlickrsetError::MissingCredential {
                    key: config_key.to_string(),
                })
        };

        Ok(Self {
            api_key: pick(ENV_API_KEY, &section.api_key, "api_key")?,
            shared_secret: pick(ENV_SHARED_SECRET, &section.shared_secret, "shared_secret")?,
            access_token: pick(ENV_ACCESS_TOKEN, &section.access_token, "access_token")?,
            access_secret: pick(ENV_ACCESS_SECRET, &section.access_secret, "access_secret")?,
        })
    }
}
