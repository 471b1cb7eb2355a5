//! Photoset tag parsing.
//!
//! The tag body is a shell-word-split argument list:
//!
//! ```text
//! flickr_photoset 72157624158475427
//! flickr_photoset 72157624158475427 "Square" "Medium 640" "Large" "Site MP4"
//! flickr_photoset page.flickr_set
//! ```
//!
//! The first argument is the photoset id (or a dotted config-variable
//! reference resolved at render time); the remaining four optionally
//! override the size labels used for the thumbnail, embedded, opened and
//! video contexts.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FlickrsetError, Result};

/// Default label for gallery thumbnails.
pub const DEFAULT_THUMBNAIL_LABEL: &str = "Large Square";
/// Default label for the inline/embedded size.
pub const DEFAULT_EMBEDDED_LABEL: &str = "Medium 800";
/// Default label for the full-size link target.
pub const DEFAULT_OPENED_LABEL: &str = "Large";
/// Default label for the video variant.
pub const DEFAULT_VIDEO_LABEL: &str = "Site MP4";

/// Dotted `section.key` shape that marks a config-variable reference
/// rather than a literal photoset id.
static VARIABLE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\.\w+").expect("VARIABLE_REF must compile"));

/// The four size labels resolved for one tag invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeLabels {
    pub thumbnail: String,
    pub embedded: String,
    pub opened: String,
    pub video: String,
}

impl Default for SizeLabels {
    fn default() -> Self {
        Self {
            thumbnail: DEFAULT_THUMBNAIL_LABEL.into(),
            embedded: DEFAULT_EMBEDDED_LABEL.into(),
            opened: DEFAULT_OPENED_LABEL.into(),
            video: DEFAULT_VIDEO_LABEL.into(),
        }
    }
}

/// A photoset designator: either a literal id, or a dotted reference into
/// the site configuration (e.g. `page.flickr_set`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotosetRef {
    Literal(String),
    Variable(String),
}

impl PhotosetRef {
    /// Classify a raw tag argument.
    pub fn parse(raw: &str) -> Self {
        if VARIABLE_REF.is_match(raw) {
            PhotosetRef::Variable(raw.to_string())
        } else {
            PhotosetRef::Literal(raw.to_string())
        }
    }
}

/// Parsed tag invocation: the photoset designator plus resolved size labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub photoset: PhotosetRef,
    pub labels: SizeLabels,
}

impl RenderRequest {
    /// Parse a raw tag body (everything after the tag name).
    pub fn parse(markup: &str) -> Result<Self> {
        let words = split_words(markup)?;
        Self::from_args(&words)
    }

    /// Build a request from already-split arguments.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut args = args.iter();
        let photoset = args.next().ok_or_else(|| FlickrsetError::TagSyntax {
            message: "missing photoset id".into(),
        })?;

        let defaults = SizeLabels::default();
        let pick = |arg: Option<&String>, default: String| {
            arg.map(|s| s.to_string()).unwrap_or(default)
        };

        Ok(Self {
            photoset: PhotosetRef::parse(photoset),
            labels: SizeLabels {
                thumbnail: pick(args.next(), defaults.thumbnail),
                embedded: pick(args.next(), defaults.embedded),
                opened: pick(args.next(), defaults.opened),
                video: pick(args.next(), defaults.video),
            },
        })
    }
}

/// Split tag markup into shell words.
///
/// Double and single quotes group words ("Medium 640" is one argument);
/// backslash escapes the next character outside single quotes. An unclosed
/// quote is a syntax error.
pub fn split_words(markup: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = markup.chars();

    #[derive(PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }
    let mut quote = Quote::None;

    while let Some(c) = chars.next() {
        match quote {
            Quote::None => match c {
                '\'' => {
                    quote = Quote::Single;
                    in_word = true;
                }
                '"' => {
                    quote = Quote::Double;
                    in_word = true;
                }
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| FlickrsetError::TagSyntax {
                        message: "trailing backslash".into(),
                    })?;
                    current.push(escaped);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
            Quote::Single => match c {
                '\'' => quote = Quote::None,
                c => current.push(c),
            },
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => {
                    let escaped = chars.next().ok_or_else(|| FlickrsetError::TagSyntax {
                        message: "trailing backslash".into(),
                    })?;
                    current.push(escaped);
                }
                c => current.push(c),
            },
        }
    }

    if quote != Quote::None {
        return Err(FlickrsetError::TagSyntax {
            message: "unclosed quote".into(),
        });
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
