//! Site configuration and credential resolution.
//!
//! # Architecture
//!
//! - [`schema`] - Typed `flickr:` section plus untyped document for
//!   dotted variable lookup
//! - [`loader`] - Config file discovery and loading
//! - [`credentials`] - Credential resolution with environment overrides

pub mod credentials;
pub mod loader;
pub mod schema;

pub use credentials::{
    Credentials, ENV_ACCESS_SECRET, ENV_ACCESS_TOKEN, ENV_API_KEY, ENV_SHARED_SECRET,
};
pub use loader::{find_site_config, load_site_config, SITE_CONFIG_FILE};
pub use schema::{FlickrSection, SiteConfig};
