//! Error types for flickrset operations.
//!
//! This module defines [`FlickrsetError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FlickrsetError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FlickrsetError::Other`) for unexpected errors
//! - Missing size variants are *not* errors: they degrade to empty URL fields

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for flickrset operations.
#[derive(Debug, Error)]
pub enum FlickrsetError {
    /// Credential check against the Flickr API failed.
    ///
    /// Carries the access token that was rejected so a misconfigured site
    /// can be diagnosed from the message alone.
    #[error("Authentication failed for access token '{token}': {message}")]
    Authentication { token: String, message: String },

    /// The photoset lookup failed (unknown id or remote error).
    #[error("Photoset '{photoset}' could not be resolved: {message}")]
    PhotosetNotFound { photoset: String, message: String },

    /// Site configuration file not found at expected location.
    #[error("Site configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the site configuration file.
    #[error("Failed to parse site configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A required Flickr credential is absent from both the environment
    /// and the site configuration.
    #[error("Missing Flickr credential '{key}' (set it under the 'flickr' config key or via the environment)")]
    MissingCredential { key: String },

    /// A config-variable reference in the tag markup has no value.
    #[error("Unresolved config variable '{reference}' in photoset tag")]
    UnresolvedVariable { reference: String },

    /// The tag markup could not be parsed.
    #[error("Invalid photoset tag: {message}")]
    TagSyntax { message: String },

    /// Flickr API transport or envelope failure.
    #[error("Flickr API error: {message}")]
    Api { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flickrset operations.
pub type Result<T> = std::result::Result<T, FlickrsetError>;
