//! flickrset - Flickr photoset tag renderer with a disk-backed cache.
//!
//! Given a `flickr_photoset` tag invocation, flickrset resolves the
//! photoset through the Flickr REST API, caches the resolved photo list as
//! YAML on disk, and renders an HTML gallery fragment for a static site.
//!
//! # Modules
//!
//! - [`tag`] - Tag-argument parsing (shell-word split, size-label defaults)
//! - [`config`] - Site configuration and credential resolution
//! - [`api`] - Blocking Flickr REST client
//! - [`fetcher`] - Photoset resolution into photo records
//! - [`cache`] - Disk-backed YAML cache keyed by photoset id and labels
//! - [`render`] - Pure HTML fragment rendering
//! - [`pipeline`] - The cache-then-fetch-then-render composition
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types and result alias
//!
//! # Example
//!
//! ```
//! use flickrset::tag::RenderRequest;
//!
//! // A tag body with quoted size-label overrides.
//! let request = RenderRequest::parse(r#"72157624158475427 "Square" "Medium 640""#).unwrap();
//! assert_eq!(request.labels.thumbnail, "Square");
//! // Omitted labels keep their defaults.
//! assert_eq!(request.labels.opened, "Large");
//! ```

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod photo;
pub mod pipeline;
pub mod render;
pub mod tag;

pub use error::{FlickrsetError, Result};
pub use photo::PhotoRecord;
pub use pipeline::{render_photoset, PipelineOptions};
