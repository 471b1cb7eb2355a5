//! Flickr REST API client and wire types.

pub mod client;
pub mod types;

pub use client::{FlickrClient, DEFAULT_ENDPOINT};
pub use types::{PhotosetPhoto, PhotosetPhotos, SizeEntry};
