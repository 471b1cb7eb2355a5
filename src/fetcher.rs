//! Photoset resolution against the Flickr API.
//!
//! [`PhotosetFetcher`] turns a photoset id into an ordered list of
//! [`PhotoRecord`]s, one remote size lookup per photo, preserving the
//! service's ordering. Failures are fatal for the invocation: there are no
//! retries and no partial results.

use std::time::Duration;

use crate::api::{FlickrClient, SizeEntry};
use crate::error::{FlickrsetError, Result};
use crate::photo::PhotoRecord;
use crate::tag::SizeLabels;

/// Fixed pause after each full photoset fetch, so repeated site builds do
/// not hammer the Flickr servers.
pub const COURTESY_DELAY: Duration = Duration::from_secs(1);

/// Tunables for a fetch run.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Pause inserted once per photoset fetch. Tests set this to zero.
    pub courtesy_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            courtesy_delay: COURTESY_DELAY,
        }
    }
}

/// Resolves photoset ids into photo records via the Flickr API.
pub struct PhotosetFetcher {
    client: FlickrClient,
    options: FetchOptions,
}

impl PhotosetFetcher {
    /// Create a fetcher with the default courtesy delay.
    pub fn new(client: FlickrClient) -> Self {
        Self::with_options(client, FetchOptions::default())
    }

    /// Create a fetcher with explicit options.
    pub fn with_options(client: FlickrClient, options: FetchOptions) -> Self {
        Self { client, options }
    }

    /// Resolve a photoset into its ordered photo records.
    ///
    /// The credential check runs first; a failure there becomes
    /// [`FlickrsetError::Authentication`] carrying the offending access
    /// token. A failed photoset lookup becomes
    /// [`FlickrsetError::PhotosetNotFound`]. A missing size label on an
    /// individual photo is not an error: the corresponding URL field is
    /// left empty.
    pub fn fetch(&self, photoset_id: &str, labels: &SizeLabels) -> Result<Vec<PhotoRecord>> {
        self.client
            .test_login()
            .map_err(|e| FlickrsetError::Authentication {
                token: self.client.access_token().to_string(),
                message: e.to_string(),
            })?;

        let photoset = self.client.photoset_photos(photoset_id).map_err(|e| {
            FlickrsetError::PhotosetNotFound {
                photoset: photoset_id.to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            photoset = photoset_id,
            photos = photoset.photo.len(),
            "resolving photoset"
        );

        let mut records = Vec::with_capacity(photoset.photo.len());
        for photo in &photoset.photo {
            let sizes = self.client.photo_sizes(&photo.id)?;

            let video = find_size(&sizes, &labels.video);
            records.push(PhotoRecord {
                title: photo.title.clone(),
                thumbnail_url: source_or_empty(find_size(&sizes, &labels.thumbnail)),
                embedded_url: source_or_empty(find_size(&sizes, &labels.embedded)),
                opened_url: source_or_empty(find_size(&sizes, &labels.opened)),
                video_url: source_or_empty(video),
                flickr_page_url: video.map(|s| s.url.clone()).unwrap_or_default(),
            });
        }

        if !self.options.courtesy_delay.is_zero() {
            std::thread::sleep(self.options.courtesy_delay);
        }

        Ok(records)
    }
}

/// Case-sensitive exact label match over a photo's size variants.
fn find_size<'a>(sizes: &'a [SizeEntry], label: &str) -> Option<&'a SizeEntry> {
    sizes.iter().find(|s| s.label == label)
}

fn source_or_empty(size: Option<&SizeEntry>) -> String {
    size.map(|s| s.source.clone()).unwrap_or_default()
}
