//! HTML fragment rendering.
//!
//! Pure string assembly over resolved [`PhotoRecord`]s, no I/O. The markup
//! mirrors the classic Foundation clearing-lightbox gallery:
//!
//! - one non-video photo: a centered inline `<img>`;
//! - one video: a poster-backed `<video>` with a caption link to its
//!   Flickr page;
//! - anything else: a `div.row` gallery of thumbnail anchors and video
//!   blocks.
//!
//! All titles and URLs pass through the escaping [`html::Markup`] builder,
//! so hostile photo titles cannot break out of the generated markup.

pub mod html;

use crate::photo::PhotoRecord;

use html::Markup;

/// Render a resolved photoset into an HTML fragment.
pub fn render(records: &[PhotoRecord]) -> String {
    match records {
        [only] if only.has_video() => render_single_video(only),
        [only] => render_single_photo(only),
        _ => render_gallery(records),
    }
}

fn render_single_photo(photo: &PhotoRecord) -> String {
    let mut m = Markup::new();
    m.raw("<p style=\"text-align: center;\"><img class=\"th\" src=\"")
        .attr(&photo.embedded_url)
        .raw("\" title=\"")
        .attr(&photo.title)
        .raw("\" longdesc=\"")
        .attr(&photo.title)
        .raw("\" alt=\"")
        .attr(&photo.title)
        .raw("\" /></p>\n");
    m.finish()
}

fn render_single_video(photo: &PhotoRecord) -> String {
    let mut m = Markup::new();
    m.raw("<p style=\"text-align: center;\">\n");
    video_block(&mut m, photo, "  ");
    m.raw("</p>\n");
    m.finish()
}

fn render_gallery(records: &[PhotoRecord]) -> String {
    let mut m = Markup::new();
    m.raw("<div class=\"row\">\n")
        .raw("  <div class=\"large-11 columns large-centered\">\n")
        .raw("    <ul class=\"clearing-thumbs\" data-clearing>\n");

    for photo in records {
        if photo.has_video() {
            m.raw("      <li>\n");
            video_block(&mut m, photo, "        ");
            m.raw("      </li>\n");
        } else {
            m.raw("      <li><a class=\"th\" href=\"")
                .attr(&photo.opened_url)
                .raw("\"><img src=\"")
                .attr(&photo.thumbnail_url)
                .raw("\"></a></li>\n");
        }
    }

    m.raw("    </ul>\n").raw("  </div>\n").raw("</div>\n");
    m.finish()
}

/// The shared `<video>` element plus its "view on Flickr" caption.
///
/// `indent` is the prefix of the `<video>` line; nested lines add to it.
fn video_block(m: &mut Markup, photo: &PhotoRecord, indent: &str) {
    m.raw(indent)
        .raw("<video controls poster=\"")
        .attr(&photo.embedded_url)
        .raw("\">\n")
        .raw(indent)
        .raw("  <source src=\"")
        .attr(&photo.video_url)
        .raw("\" type=\"video/mp4\" />\n")
        .raw(indent)
        .raw("</video>\n")
        .raw(indent)
        .raw("<br/><span class=\"alt-flickr\"><a href=\"")
        .attr(&photo.flickr_page_url)
        .raw("\" target=\"_blank\">Voir la video en grand</a></span>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(title: &str) -> PhotoRecord {
        PhotoRecord {
            title: title.into(),
            thumbnail_url: format!("https://s/{title}_sq.jpg"),
            embedded_url: format!("https://s/{title}_c.jpg"),
            opened_url: format!("https://s/{title}_b.jpg"),
            video_url: String::new(),
            flickr_page_url: String::new(),
        }
    }

    fn video(title: &str) -> PhotoRecord {
        PhotoRecord {
            video_url: format!("https://s/{title}.mp4"),
            flickr_page_url: format!("https://f/{title}/play/"),
            ..photo(title)
        }
    }

    #[test]
    fn single_photo_is_inline_image_not_gallery() {
        let out = render(&[photo("one")]);
        assert!(out.contains("<img class=\"th\" src=\"https://s/one_c.jpg\""));
        assert!(out.contains("title=\"one\""));
        assert!(out.contains("alt=\"one\""));
        assert!(out.contains("longdesc=\"one\""));
        assert!(!out.contains("clearing-thumbs"));
        assert!(!out.contains("<video"));
    }

    #[test]
    fn single_video_embeds_player_with_caption_link() {
        let out = render(&[video("clip")]);
        assert!(out.contains("<video controls poster=\"https://s/clip_c.jpg\">"));
        assert!(out.contains("<source src=\"https://s/clip.mp4\" type=\"video/mp4\" />"));
        assert!(out.contains("href=\"https://f/clip/play/\" target=\"_blank\""));
        assert!(!out.contains("clearing-thumbs"));
    }

    #[test]
    fn two_or_more_records_always_emit_gallery() {
        let out = render(&[photo("a"), photo("b")]);
        assert!(out.contains("<div class=\"row\">"));
        assert!(out.contains("<ul class=\"clearing-thumbs\" data-clearing>"));
        assert_eq!(out.matches("<li>").count(), 2);
    }

    #[test]
    fn gallery_of_three_photos_has_three_thumbnail_anchors() {
        let out = render(&[photo("a"), photo("b"), photo("c")]);
        assert_eq!(out.matches("<li><a class=\"th\"").count(), 3);
        assert!(out.contains("href=\"https://s/a_b.jpg\""));
        assert!(out.contains("<img src=\"https://s/a_sq.jpg\">"));
        assert!(!out.contains("<video"));
    }

    #[test]
    fn gallery_mixes_video_items_and_thumbnails() {
        let out = render(&[photo("a"), video("clip"), photo("b")]);
        assert_eq!(out.matches("<li><a class=\"th\"").count(), 2);
        assert_eq!(out.matches("<video controls").count(), 1);
        assert!(out.contains("https://s/clip.mp4"));
    }

    #[test]
    fn empty_photoset_renders_empty_gallery() {
        let out = render(&[]);
        assert!(out.contains("clearing-thumbs"));
        assert!(!out.contains("<li>"));
    }

    #[test]
    fn hostile_title_cannot_break_out_of_markup() {
        let mut p = photo("x");
        p.title = r#""><script>alert(1)</script>"#.into();
        let out = render(&[p]);
        assert!(!out.contains("<script>"));
        assert!(out.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn hostile_url_is_escaped_in_attribute() {
        let mut p = photo("a");
        p.opened_url = r#"https://x/" onclick="evil()"#.into();
        let out = render(&[p.clone(), photo("b")]);
        assert!(!out.contains(r#"" onclick="evil()"#));
        assert!(out.contains("&quot; onclick=&quot;evil()"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let set = [photo("a"), video("v"), photo("b")];
        assert_eq!(render(&set), render(&set));
    }
}
