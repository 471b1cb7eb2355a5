//! Render pipeline: tag request in, HTML fragment out.
//!
//! Composes the components exactly as one tag invocation at site-build time
//! would: resolve the photoset designator against the site configuration,
//! consult the disk cache, fetch from the Flickr API on a miss, persist the
//! result, and render. Fetch and authentication failures propagate; there is
//! no placeholder output.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::{FlickrClient, DEFAULT_ENDPOINT};
use crate::cache::{CacheKey, PhotosetCache};
use crate::config::{Credentials, SiteConfig};
use crate::error::{FlickrsetError, Result};
use crate::fetcher::{FetchOptions, PhotosetFetcher};
use crate::photo::PhotoRecord;
use crate::render;
use crate::tag::{PhotosetRef, RenderRequest};

/// Per-invocation overrides for the pipeline.
///
/// Everything defaults to the site configuration; these knobs exist for the
/// CLI surface and for tests.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Cache directory override. `flickr.cache_dir` applies when unset;
    /// with neither, every render fetches live.
    pub cache_dir: Option<PathBuf>,
    /// Endpoint override (`flickr.endpoint` applies when unset).
    pub endpoint: Option<String>,
    /// Courtesy-delay override for the fetcher.
    pub courtesy_delay: Option<Duration>,
    /// Skip the cache read, forcing a live fetch. The fresh result still
    /// overwrites the cache entry.
    pub fresh: bool,
}

/// Render one photoset tag invocation into an HTML fragment.
pub fn render_photoset(
    request: &RenderRequest,
    config: &SiteConfig,
    options: &PipelineOptions,
) -> Result<String> {
    let photoset_id = resolve_photoset_id(&request.photoset, config)?;
    let records = resolve_records(&photoset_id, request, config, options)?;
    Ok(render::render(&records))
}

/// Resolve a photoset designator to a concrete id.
fn resolve_photoset_id(photoset: &PhotosetRef, config: &SiteConfig) -> Result<String> {
    match photoset {
        PhotosetRef::Literal(id) => Ok(id.clone()),
        PhotosetRef::Variable(reference) => {
            config
                .lookup(reference)
                .ok_or_else(|| FlickrsetError::UnresolvedVariable {
                    reference: reference.clone(),
                })
        }
    }
}

fn resolve_records(
    photoset_id: &str,
    request: &RenderRequest,
    config: &SiteConfig,
    options: &PipelineOptions,
) -> Result<Vec<PhotoRecord>> {
    let cache_dir = options
        .cache_dir
        .clone()
        .or_else(|| config.flickr.cache_dir.clone());

    let Some(cache_dir) = cache_dir else {
        tracing::debug!(photoset = photoset_id, "no cache directory, fetching live");
        return fetch_records(photoset_id, request, config, options);
    };

    let cache = PhotosetCache::new(cache_dir);
    let key = CacheKey::derive(photoset_id, &request.labels);

    if !options.fresh {
        if let Some(records) = cache.get(&key)? {
            tracing::debug!(%key, "cache hit");
            return Ok(records);
        }
    }

    tracing::debug!(%key, fresh = options.fresh, "cache miss, fetching");
    let records = fetch_records(photoset_id, request, config, options)?;
    cache.put(&key, &records)?;
    Ok(records)
}

fn fetch_records(
    photoset_id: &str,
    request: &RenderRequest,
    config: &SiteConfig,
    options: &PipelineOptions,
) -> Result<Vec<PhotoRecord>> {
    let credentials = Credentials::resolve(&config.flickr)?;
    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| config.flickr.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let client = FlickrClient::with_endpoint(credentials, endpoint);
    let fetcher = match options.courtesy_delay {
        Some(courtesy_delay) => {
            PhotosetFetcher::with_options(client, FetchOptions { courtesy_delay })
        }
        None => PhotosetFetcher::new(client),
    };

    fetcher.fetch(photoset_id, &request.labels)
}
