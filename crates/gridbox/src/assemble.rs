//! Grid assembly: borders, rules and bordered content lines.
//!
//! The output of this stage has correct outer borders but no junctions yet;
//! those are fixed up by the stitcher.

use gridbox_ansi::is_blank;

use crate::banner::{border, BorderGlyphs};
use crate::options::Banner;
use crate::preset::BoxCharacters;
use crate::wrap::{SectorBlock, WrappedRow};

/// Lays out the wrapped rows between a top and a bottom border.
///
/// A content row is followed by a rule unless it is the last row. A rule row
/// adds its own rule, except at the very end where the bottom border takes its
/// place.
pub(crate) fn assemble(
    rows: &[WrappedRow],
    content_length: usize,
    chars: &BoxCharacters,
    title: &Banner,
    subtitle: &Banner,
) -> Vec<String> {
    let rule = format!(
        "{}{}{}",
        chars.left_junction,
        chars.horizontal.to_string().repeat(content_length + 2),
        chars.right_junction
    );

    let top = BorderGlyphs {
        left: chars.top_left,
        right: chars.top_right,
        horizontal: chars.horizontal,
    };
    let mut lines = vec![border(top, content_length, title)];

    for (index, row) in rows.iter().enumerate() {
        match row {
            WrappedRow::Rule => lines.push(rule.clone()),
            WrappedRow::Sectors(blocks) => {
                let height = blocks.first().map_or(0, |b| b.lines.len());
                lines.extend((0..height).map(|i| content_line(blocks, i, chars.vertical)));
                if index + 1 < rows.len() {
                    lines.push(rule.clone());
                }
            }
        }
    }

    if matches!(rows.last(), Some(WrappedRow::Rule)) {
        lines.pop();
    }

    let bottom = BorderGlyphs {
        left: chars.bottom_left,
        right: chars.bottom_right,
        horizontal: chars.horizontal,
    };
    lines.push(border(bottom, content_length, subtitle));
    lines
}

/// Joins line `i` of every sector, separated by `vertical`.
///
/// A blank sector is closed by a space rather than a separator; the next
/// non-blank sector turns that space back into a separator.
fn content_line(blocks: &[SectorBlock], i: usize, vertical: char) -> String {
    let mut line = String::from(vertical);

    for block in blocks {
        let text = block.lines.get(i).map(String::as_str).unwrap_or_default();
        let blank = is_blank(text);

        if !blank && line.ends_with(' ') {
            line.pop();
            line.push(vertical);
        }

        line.push(' ');
        line.push_str(text);
        line.push(' ');
        line.push(if blank { ' ' } else { vertical });
    }

    line
}
