//! ANSI-aware measurement, chunking, truncation and padding.
//!
//! All functions in this module treat ANSI escape sequences as zero-width:
//! they are preserved in output but never count toward a width. Widths are
//! terminal columns, so CJK and emoji characters count as 2.

use console::{measure_text_width, pad_str, strip_ansi_codes, Alignment};
use unicode_width::UnicodeWidthChar;

use crate::error::{AnsiError, Result};

/// One piece of a string: an escape sequence or a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete escape sequence, e.g. `"\x1b[31m"`.
    Escape(&'a str),
    /// A character outside any escape sequence.
    Char(char),
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.char_indices();
        let (_, first) = chars.next()?;

        if first != '\x1b' {
            self.rest = &self.rest[first.len_utf8()..];
            return Some(Segment::Char(first));
        }

        // CSI and two-byte sequences both end with a letter (or `~`)
        let mut end = self.rest.len();
        for (i, c) in chars {
            if c.is_ascii_alphabetic() || c == '~' {
                end = i + c.len_utf8();
                break;
            }
        }

        let (sequence, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Escape(sequence))
    }
}

/// Splits a string into escape sequences and characters.
///
/// ```rust
/// use gridbox_ansi::{segments, Segment};
///
/// let parts: Vec<_> = segments("\x1b[31mA").collect();
/// assert_eq!(parts, vec![Segment::Escape("\x1b[31m"), Segment::Char('A')]);
/// ```
pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

/// Display width of a single character (control characters are 0).
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// ```rust
/// use gridbox_ansi::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(visible_width("日本"), 4);
/// ```
pub fn visible_width(s: &str) -> usize {
    measure_text_width(s)
}

/// A visible character together with where it sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharColumn {
    /// Display column of the character's first cell.
    pub column: usize,
    /// Byte offset of the character in the string.
    pub byte: usize,
    /// The character itself.
    pub ch: char,
}

/// Lists every character outside escape sequences with its display column
/// and byte offset.
pub fn char_columns(s: &str) -> Vec<CharColumn> {
    let mut columns = Vec::with_capacity(s.len());
    let mut column = 0;
    let mut byte = 0;

    for segment in segments(s) {
        match segment {
            Segment::Escape(sequence) => byte += sequence.len(),
            Segment::Char(ch) => {
                columns.push(CharColumn { column, byte, ch });
                column += char_width(ch);
                byte += ch.len_utf8();
            }
        }
    }

    columns
}

/// Divides a string into chunks of at most `max` display columns.
///
/// Chunks are filled greedily. Escape sequences travel with the character that
/// follows them; escapes trailing the last visible character stay in the last
/// chunk. A chunk narrower than `min` columns is not emitted, so a string with
/// no visible characters yields no chunks at all. A character wider than
/// `max` occupies a chunk of its own.
///
/// Fails with [`AnsiError::InvalidBounds`] when `max` is zero or below `min`.
///
/// ```rust
/// use gridbox_ansi::chunk_visible;
///
/// assert_eq!(chunk_visible("abcdefg", 1, 3).unwrap(), vec!["abc", "def", "g"]);
/// assert!(chunk_visible("", 1, 3).unwrap().is_empty());
/// assert!(chunk_visible("abc", 1, 0).is_err());
/// ```
pub fn chunk_visible(s: &str, min: usize, max: usize) -> Result<Vec<String>> {
    if max == 0 || min > max {
        return Err(AnsiError::InvalidBounds { min, max });
    }

    let min = min.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut pending = String::new();

    for segment in segments(s) {
        match segment {
            Segment::Escape(sequence) => pending.push_str(sequence),
            Segment::Char(ch) => {
                let width = char_width(ch);
                if current_width > 0 && current_width + width > max {
                    if current_width >= min {
                        chunks.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                    current_width = 0;
                }
                current.push_str(&pending);
                pending.clear();
                current.push(ch);
                current_width += width;
            }
        }
    }

    current.push_str(&pending);
    if current_width >= min {
        chunks.push(current);
    }

    Ok(chunks)
}

/// Truncates a string from the end to fit within `max_width` columns.
///
/// If the string already fits it is returned unchanged. Otherwise characters
/// are removed from the end and `ellipsis` is appended; when even the ellipsis
/// does not fit, the ellipsis itself is cut.
///
/// ```rust
/// use gridbox_ansi::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8, "..."), "Hello...");
/// assert_eq!(truncate_end("Short", 10, "..."), "Short");
/// assert_eq!(truncate_end("Hello", 2, "..."), "..");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    if visible_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    if max_width <= ellipsis_width {
        return truncate_to_width(ellipsis, max_width);
    }

    let mut result = truncate_to_width(s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

/// Keeps the longest prefix of `s` that fits in `max_width` columns.
/// Escape sequences inside the kept prefix are preserved.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for segment in segments(s) {
        match segment {
            Segment::Escape(sequence) => result.push_str(sequence),
            Segment::Char(ch) => {
                let w = char_width(ch);
                if width + w > max_width {
                    break;
                }
                result.push(ch);
                width += w;
            }
        }
    }

    result
}

/// Pads a string on the right with spaces to reach `width` columns.
/// Strings already at least that wide are returned unchanged.
///
/// ```rust
/// use gridbox_ansi::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Whether a string is empty once escapes and whitespace are removed.
pub fn is_blank(s: &str) -> bool {
    strip_ansi_codes(s).trim().is_empty()
}

/// Replaces every line feed with the two-character literal `\n`.
pub fn escape_line_feeds(s: &str) -> String {
    s.replace('\n', "\\n")
}
