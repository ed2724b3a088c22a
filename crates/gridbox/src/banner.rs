//! Title and subtitle banners spliced into the top and bottom borders.

use gridbox_ansi::{escape_line_feeds, pad_right, truncate_end, visible_width};

use crate::options::{Align, Banner};

/// Banners are only drawn when the content area is wider than this.
const MIN_BANNER_CONTENT: usize = 5;

/// The glyphs of one horizontal border.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BorderGlyphs {
    pub left: char,
    pub right: char,
    pub horizontal: char,
}

/// Builds a top or bottom border `content_length + 4` columns wide, with the
/// banner's text spliced in when there is one.
pub(crate) fn border(glyphs: BorderGlyphs, content_length: usize, banner: &Banner) -> String {
    let BorderGlyphs {
        left,
        right,
        horizontal,
    } = glyphs;
    let rule = |n: usize| horizontal.to_string().repeat(n);

    let text = escape_line_feeds(&banner.content);
    if text.is_empty() || content_length <= MIN_BANNER_CONTENT {
        return format!("{left}{}{right}", rule(content_length + 2));
    }

    let len = visible_width(&text);
    if len > content_length {
        let cut = pad_right(&truncate_end(&text, content_length, "..."), content_length);
        return format!("{left} {cut} {right}");
    }

    let fill = content_length - len;
    match banner.align {
        Align::Left => format!("{left} {text} {}{right}", rule(fill)),
        Align::Right => format!("{left}{} {text} {right}", rule(fill)),
        Align::Center => format!(
            "{left}{} {text} {}{right}",
            rule(fill.div_ceil(2)),
            rule(fill / 2)
        ),
    }
}
