//! Border stitching: fixing line ends and junction glyphs after assembly.
//!
//! Positions are compared by display column, so wide characters or escape
//! sequences inside content never shift a junction.

use gridbox_ansi::{char_columns, CharColumn};
use tracing::trace;

use crate::preset::BoxCharacters;

/// Repairs line ends, then promotes rule glyphs where a vertical separator
/// meets them.
pub(crate) fn stitch(lines: &mut [String], chars: &BoxCharacters) {
    repair_line_ends(lines, chars);
    correct_junctions(lines, chars);
}

/// Makes every line end in a right-hand border glyph.
fn repair_line_ends(lines: &mut [String], chars: &BoxCharacters) {
    let closing = [
        chars.vertical,
        chars.right_junction,
        chars.top_right,
        chars.bottom_right,
    ];

    for line in lines.iter_mut() {
        match line.chars().last() {
            Some(last) if !closing.contains(&last) => {
                line.pop();
                line.push(if line.starts_with(chars.left_junction) {
                    chars.right_junction
                } else {
                    chars.vertical
                });
            }
            _ => {}
        }
    }
}

/// Single top-to-bottom sweep over vertical separators.
///
/// Above a separator, `┴` becomes `┼` and `─` becomes `┬`; below it, `─`
/// becomes `┴`. Only border and rule lines are ever rewritten.
fn correct_junctions(lines: &mut [String], chars: &BoxCharacters) {
    if lines.len() < 2 {
        return;
    }

    let separators = vertical_columns(&lines[1], chars);
    for &column in &separators {
        promote(&mut lines[0], column, chars, &[(chars.horizontal, chars.top_junction)]);
    }

    for i in 1..lines.len() {
        let separators = vertical_columns(&lines[i], chars);
        if separators.is_empty() {
            continue;
        }
        trace!(line = i, separators = separators.len(), "stitching junctions");

        for &column in &separators {
            promote(
                &mut lines[i - 1],
                column,
                chars,
                &[
                    (chars.bottom_junction, chars.cross),
                    (chars.horizontal, chars.top_junction),
                ],
            );
            if let Some(below) = lines.get_mut(i + 1) {
                promote(below, column, chars, &[(chars.horizontal, chars.bottom_junction)]);
            }
        }
    }
}

fn vertical_columns(line: &str, chars: &BoxCharacters) -> Vec<usize> {
    char_columns(line)
        .into_iter()
        .filter(|c| c.ch == chars.vertical)
        .map(|c| c.column)
        .collect()
}

/// Replaces the glyph at `column` using the first matching `(from, to)` pair.
fn promote(line: &mut String, column: usize, chars: &BoxCharacters, rules: &[(char, char)]) {
    if !chars.is_rule_line(line) {
        return;
    }

    let Some(CharColumn { byte, ch, .. }) = char_columns(line)
        .into_iter()
        .find(|c| c.column == column)
    else {
        return;
    };

    if let Some(&(_, to)) = rules.iter().find(|(from, _)| *from == ch) {
        let mut buf = [0; 4];
        line.replace_range(byte..byte + ch.len_utf8(), to.encode_utf8(&mut buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    fn stitched(src: &[&str]) -> Vec<String> {
        let mut out = lines(src);
        stitch(&mut out, &BoxCharacters::LIGHT);
        out
    }

    #[test]
    fn two_by_two_grid_gets_all_junctions() {
        let out = stitched(&[
            "┌─────────┐",
            "│ a   │ b │",
            "├─────────┤",
            "│ c   │ d │",
            "└─────────┘",
        ]);
        assert_eq!(
            out,
            lines(&[
                "┌─────┬───┐",
                "│ a   │ b │",
                "├─────┼───┤",
                "│ c   │ d │",
                "└─────┴───┘",
            ])
        );
    }

    #[test]
    fn single_column_is_untouched() {
        let src = ["┌───┐", "│ a │", "├───┤", "│ b │", "└───┘"];
        assert_eq!(stitched(&src), lines(&src));
    }

    #[test]
    fn trailing_space_becomes_separator() {
        let out = stitched(&["┌───────┐", "│ a │    ", "└───────┘"]);
        assert_eq!(out[1], "│ a │   │");
        assert_eq!(out[0], "┌───┬───┐");
        assert_eq!(out[2], "└───┴───┘");
    }

    #[test]
    fn rule_line_end_becomes_right_junction() {
        let out = stitched(&["┌───┐", "├─── ", "└───┘"]);
        assert_eq!(out[1], "├───┤");
    }

    #[test]
    fn content_text_is_never_promoted() {
        // the second line carries a rule glyph inside its text
        let out = stitched(&["┌─────┐", "│ ─ │ │", "│ x │ │", "└─────┘"]);
        assert_eq!(out[1], "│ ─ │ │");
    }

    #[test]
    fn banner_text_is_left_alone() {
        let out = stitched(&["┌ Title ┐", "│ a │ b │", "└───────┘"]);
        assert_eq!(out[0], "┌ Title ┐");
        assert_eq!(out[2], "└───┴───┘");
    }

    #[test]
    fn columns_follow_display_width() {
        // "日" takes two columns, so the separator sits at column 5
        let out = stitched(&["┌────────┐", "│ 日 │ b │", "└────────┘"]);
        assert_eq!(out[0], "┌────┬───┐");
        assert_eq!(out[2], "└────┴───┘");
    }
}
