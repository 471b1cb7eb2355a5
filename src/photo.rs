//! Resolved photo data model.

use serde::{Deserialize, Serialize};

/// One photo resolved from a photoset, carrying the URL captured for each
/// requested size label.
///
/// A URL field is the empty string when the photo has no size variant whose
/// label matches the requested one. Fields are never absent: the cache
/// format and the renderer both rely on every field being present, and
/// `#[serde(default)]` keeps hand-edited cache files loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Photo title as reported by the service.
    pub title: String,
    /// URL of the thumbnail-label variant (gallery grid).
    #[serde(default)]
    pub thumbnail_url: String,
    /// URL of the embedded-label variant (inline display, video poster).
    #[serde(default)]
    pub embedded_url: String,
    /// URL of the opened-label variant (full-size link target).
    #[serde(default)]
    pub opened_url: String,
    /// URL of the video-label variant; empty for plain photos.
    #[serde(default)]
    pub video_url: String,
    /// Flickr page URL of the video variant; empty whenever `video_url` is.
    #[serde(default)]
    pub flickr_page_url: String,
}

impl PhotoRecord {
    /// Whether this record carries a playable video variant.
    pub fn has_video(&self) -> bool {
        !self.video_url.is_empty()
    }
}
