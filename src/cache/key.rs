//! Cache key derivation.

use crate::tag::SizeLabels;

/// Deterministic cache key for one photoset render.
///
/// The key concatenates the photoset id and the four size labels in a fixed
/// order, so requests that differ only in label order land in different
/// entries. The concatenation is sanitized into a filesystem-safe file stem;
/// label text itself stays readable in the file name (`72157…-Large
/// Square-Medium 800-Large-Site MP4.yml`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a photoset id and its resolved labels.
    pub fn derive(photoset_id: &str, labels: &SizeLabels) -> Self {
        let raw = format!(
            "{}-{}-{}-{}-{}",
            photoset_id, labels.thumbnail, labels.embedded, labels.opened, labels.video
        );
        CacheKey(sanitize(&raw))
    }

    /// The sanitized key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the backing cache entry.
    pub fn file_name(&self) -> String {
        format!("{}.yml", self.0)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace path-hostile characters with `_`.
///
/// Labels are service-defined short names ("Large Square", "Site MP4"), so
/// alphanumerics, spaces and a few punctuation characters cover the normal
/// case; anything else (path separators in particular) is neutralized.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() => c,
            ' ' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(thumb: &str, embed: &str, opened: &str, video: &str) -> SizeLabels {
        SizeLabels {
            thumbnail: thumb.into(),
            embedded: embed.into(),
            opened: opened.into(),
            video: video.into(),
        }
    }

    #[test]
    fn key_embeds_id_and_labels_in_order() {
        let key = CacheKey::derive(
            "72157624158475427",
            &labels("Large Square", "Medium 800", "Large", "Site MP4"),
        );
        assert_eq!(
            key.as_str(),
            "72157624158475427-Large Square-Medium 800-Large-Site MP4"
        );
        assert_eq!(
            key.file_name(),
            "72157624158475427-Large Square-Medium 800-Large-Site MP4.yml"
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let labels = SizeLabels::default();
        assert_eq!(
            CacheKey::derive("123", &labels),
            CacheKey::derive("123", &labels)
        );
    }

    #[test]
    fn label_order_is_significant() {
        let a = CacheKey::derive("123", &labels("Square", "Large", "Medium 800", "Site MP4"));
        let b = CacheKey::derive("123", &labels("Large", "Square", "Medium 800", "Site MP4"));
        assert_ne!(a, b);
    }

    #[test]
    fn path_separators_are_neutralized() {
        let key = CacheKey::derive("123", &labels("../etc", "a/b", "c\\d", "Site MP4"));
        assert!(!key.as_str().contains('/'));
        assert!(!key.as_str().contains('\\'));
        assert_eq!(key.as_str(), "123-.._etc-a_b-c_d-Site MP4");
    }
}
