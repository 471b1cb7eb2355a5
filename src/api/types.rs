//! Wire types for the Flickr REST API.
//!
//! Only the fields the fetcher consumes are modeled; everything else in the
//! responses is ignored by serde.

use serde::Deserialize;

/// Envelope fields present on every REST response.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub stat: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `flickr.photosets.getPhotos` response body.
#[derive(Debug, Deserialize)]
pub struct PhotosetPhotosResponse {
    pub photoset: PhotosetPhotos,
}

/// The photoset with its ordered photo list.
#[derive(Debug, Deserialize)]
pub struct PhotosetPhotos {
    pub id: String,
    #[serde(default)]
    pub photo: Vec<PhotosetPhoto>,
}

/// One photo entry inside a photoset listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotosetPhoto {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// `flickr.photos.getSizes` response body.
#[derive(Debug, Deserialize)]
pub struct SizesResponse {
    pub sizes: SizeList,
}

/// Container for the size variants of one photo.
#[derive(Debug, Deserialize)]
pub struct SizeList {
    #[serde(default)]
    pub size: Vec<SizeEntry>,
}

/// One named size variant.
///
/// `source` is the direct media URL; `url` is the photo's Flickr page for
/// that size (used as the "view on Flickr" link for videos).
#[derive(Debug, Clone, Deserialize)]
pub struct SizeEntry {
    pub label: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_photoset_photos_response() {
        let json = r#"{
            "photoset": {
                "id": "72157624158475427",
                "photo": [
                    {"id": "1", "title": "First"},
                    {"id": "2", "title": "Second"}
                ]
            },
            "stat": "ok"
        }"#;
        let parsed: PhotosetPhotosResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.photoset.id, "72157624158475427");
        assert_eq!(parsed.photoset.photo.len(), 2);
        assert_eq!(parsed.photoset.photo[0].title, "First");
    }

    #[test]
    fn parses_sizes_response() {
        let json = r#"{
            "sizes": {
                "size": [
                    {"label": "Square", "source": "https://s/sq.jpg", "url": "https://f/sq/"},
                    {"label": "Site MP4", "source": "https://s/v.mp4", "url": "https://f/v/"}
                ]
            },
            "stat": "ok"
        }"#;
        let parsed: SizesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sizes.size[1].label, "Site MP4");
        assert_eq!(parsed.sizes.size[1].source, "https://s/v.mp4");
    }

    #[test]
    fn parses_failure_envelope() {
        let json = r#"{"stat": "fail", "code": 1, "message": "Photoset not found"}"#;
        let parsed: Envelope = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.stat, "fail");
        assert_eq!(parsed.code, Some(1));
        assert_eq!(parsed.message.as_deref(), Some("Photoset not found"));
    }
}
