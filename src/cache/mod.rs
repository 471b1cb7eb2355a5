//! Disk-backed photoset cache.
//!
//! # Architecture
//!
//! - [`key`] - Deterministic, order-sensitive cache key derivation
//! - [`store`] - YAML entry storage with atomic writes

pub mod key;
pub mod store;

pub use key::CacheKey;
pub use store::PhotosetCache;
