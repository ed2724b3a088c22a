//! Options: the partial caller form and its resolved counterpart.
//!
//! [`BoxOptions`] is what callers build or load. Every field is optional, so
//! two option sets can be layered with [`BoxOptions::merge`]. Resolving fills
//! the gaps with defaults and validates every color exactly once, producing a
//! [`ResolvedOptions`] the pipeline reads from.
//!
//! # Defaults
//!
//! | Option           | Default    |
//! |------------------|------------|
//! | `maxWidth`       | `72`       |
//! | `overflow`       | `newline`  |
//! | `stripEmpty`     | `true`     |
//! | `parseLineFeeds` | `false`    |
//! | `autocorrect`    | `false`    |
//! | `title`          | empty, left aligned, text color |
//! | `subtitle`       | empty, left aligned, text color |
//! | `colors.grid`    | `#ffffff`  |
//! | `colors.text`    | `#ffffff`  |
//!
//! Only an absent option takes its default. Zero is a value like any other:
//! `maxWidth: 0` is kept, which fails with a layout error unless
//! `autocorrect` grows it, and a color of `0` is black for the grid, the
//! text, the title and the subtitle alike. A title or subtitle color inherits
//! the text color only when it is absent or a negative integer.
//!
//! # Example
//!
//! ```rust
//! use gridbox::{Align, BoxOptions, Overflow, TitleOptions};
//!
//! let options = BoxOptions::new()
//!     .max_width(40)
//!     .overflow(Overflow::Trim)
//!     .title(TitleOptions::new("Report").align(Align::Center))
//!     .grid_color(0xff0000u32);
//!
//! let resolved = options.resolve().unwrap();
//! assert_eq!(resolved.max_width, 40);
//! assert_eq!(resolved.title.content, "Report");
//! ```
//!
//! The same options as a JSON document:
//!
//! ```rust
//! use gridbox::BoxOptions;
//!
//! let options = BoxOptions::from_json(r#"{
//!     "maxWidth": 40,
//!     "overflow": "trim",
//!     "title": { "content": "Report", "align": "center" },
//!     "colors": { "grid": 16711680 }
//! }"#).unwrap();
//! assert_eq!(options.max_width, Some(40));
//! ```

use gridbox_ansi::{ColorInput, ColorSpec};
use serde::Deserialize;

use crate::error::{BoxError, Result};

pub const DEFAULT_MAX_WIDTH: usize = 72;

/// What to do with text wider than its sector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Break the text onto as many lines as needed.
    #[default]
    Newline,
    /// Cut the text and end it with `...`.
    Trim,
}

/// Horizontal placement of a title or subtitle in its border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

// ============================================================================
// Partial options
// ============================================================================

/// A title or subtitle banner, possibly partial.
///
/// Documents may give a bare string as shorthand for `{ "content": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "TitleRepr")]
pub struct TitleOptions {
    pub content: Option<String>,
    pub align: Option<Align>,
    /// `None` or a negative integer inherits the text color.
    pub color: Option<ColorInput>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TitleRepr {
    Text(String),
    Full(TitleFields),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct TitleFields {
    content: Option<String>,
    align: Option<Align>,
    color: Option<ColorInput>,
}

impl From<TitleRepr> for TitleOptions {
    fn from(repr: TitleRepr) -> Self {
        match repr {
            TitleRepr::Text(content) => TitleOptions::new(content),
            TitleRepr::Full(fields) => TitleOptions {
                content: fields.content,
                align: fields.align,
                color: fields.color,
            },
        }
    }
}

impl TitleOptions {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn color(mut self, color: impl Into<ColorInput>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Layers `overlay` on top of `self`, field by field.
    pub fn merge(self, overlay: TitleOptions) -> TitleOptions {
        TitleOptions {
            content: overlay.content.or(self.content),
            align: overlay.align.or(self.align),
            color: overlay.color.or(self.color),
        }
    }
}

impl From<&str> for TitleOptions {
    fn from(content: &str) -> Self {
        TitleOptions::new(content)
    }
}

impl From<String> for TitleOptions {
    fn from(content: String) -> Self {
        TitleOptions::new(content)
    }
}

/// Grid and text colors, possibly partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    pub grid: Option<ColorInput>,
    pub text: Option<ColorInput>,
}

impl ColorOptions {
    pub fn merge(self, overlay: ColorOptions) -> ColorOptions {
        ColorOptions {
            grid: overlay.grid.or(self.grid),
            text: overlay.text.or(self.text),
        }
    }
}

/// Caller-supplied options. Unset fields take their defaults on resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoxOptions {
    /// Total width of the box, borders included.
    pub max_width: Option<usize>,
    pub overflow: Option<Overflow>,
    /// Drop blank sectors, sub-lines and rows before layout.
    pub strip_empty: Option<bool>,
    /// Split text on `\n` instead of printing it as a literal `\n`.
    pub parse_line_feeds: Option<bool>,
    /// Grow `max_width` until the sectors fit instead of failing.
    pub autocorrect: Option<bool>,
    pub title: Option<TitleOptions>,
    pub subtitle: Option<TitleOptions>,
    pub colors: Option<ColorOptions>,
}

impl BoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = Some(overflow);
        self
    }

    pub fn strip_empty(mut self, strip_empty: bool) -> Self {
        self.strip_empty = Some(strip_empty);
        self
    }

    pub fn parse_line_feeds(mut self, parse_line_feeds: bool) -> Self {
        self.parse_line_feeds = Some(parse_line_feeds);
        self
    }

    pub fn autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = Some(autocorrect);
        self
    }

    pub fn title(mut self, title: impl Into<TitleOptions>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<TitleOptions>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn grid_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.colors.get_or_insert_with(ColorOptions::default).grid = Some(color.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<ColorInput>) -> Self {
        self.colors.get_or_insert_with(ColorOptions::default).text = Some(color.into());
        self
    }

    /// Layers `overlay` on top of `self`.
    ///
    /// Fields set in `overlay` win. Titles, subtitles and colors are merged
    /// field by field, so an overlay that only sets a title's alignment keeps
    /// the base title's content.
    pub fn merge(self, overlay: BoxOptions) -> BoxOptions {
        BoxOptions {
            max_width: overlay.max_width.or(self.max_width),
            overflow: overlay.overflow.or(self.overflow),
            strip_empty: overlay.strip_empty.or(self.strip_empty),
            parse_line_feeds: overlay.parse_line_feeds.or(self.parse_line_feeds),
            autocorrect: overlay.autocorrect.or(self.autocorrect),
            title: merge_nested(self.title, overlay.title, TitleOptions::merge),
            subtitle: merge_nested(self.subtitle, overlay.subtitle, TitleOptions::merge),
            colors: merge_nested(self.colors, overlay.colors, ColorOptions::merge),
        }
    }

    /// Parses options from JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses options from YAML.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Fills defaults and validates colors.
    ///
    /// Fails with [`BoxError::Configuration`] naming the first option whose
    /// color is not supported.
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let colors = self.colors.clone().unwrap_or_default();
        let grid = resolve_color(colors.grid.as_ref(), "grid")?;
        let text = resolve_color(colors.text.as_ref(), "text")?;

        let title = resolve_banner(self.title.as_ref(), text, "title")?;
        let subtitle = resolve_banner(self.subtitle.as_ref(), text, "subtitle")?;

        Ok(ResolvedOptions {
            max_width: self.max_width.unwrap_or(DEFAULT_MAX_WIDTH),
            overflow: self.overflow.unwrap_or_default(),
            strip_empty: self.strip_empty.unwrap_or(true),
            parse_line_feeds: self.parse_line_feeds.unwrap_or(false),
            autocorrect: self.autocorrect.unwrap_or(false),
            title,
            subtitle,
            grid,
            text,
        })
    }
}

fn merge_nested<T>(base: Option<T>, overlay: Option<T>, merge: fn(T, T) -> T) -> Option<T> {
    match (base, overlay) {
        (Some(base), Some(overlay)) => Some(merge(base, overlay)),
        (base, overlay) => overlay.or(base),
    }
}

fn resolve_color(input: Option<&ColorInput>, target: &'static str) -> Result<ColorSpec> {
    match input {
        None => Ok(ColorSpec::default()),
        Some(input) => ColorSpec::parse(input).map_err(|e| BoxError::configuration(target, e)),
    }
}

fn resolve_banner(
    options: Option<&TitleOptions>,
    text_color: ColorSpec,
    target: &'static str,
) -> Result<Banner> {
    let options = options.cloned().unwrap_or_default();

    let color = match &options.color {
        None => text_color,
        Some(ColorInput::Int(n)) if *n < 0 => text_color,
        Some(input) => ColorSpec::parse(input).map_err(|e| BoxError::configuration(target, e))?,
    };

    Ok(Banner {
        content: options.content.unwrap_or_default(),
        align: options.align.unwrap_or_default(),
        color,
    })
}

// ============================================================================
// Resolved options
// ============================================================================

/// A title or subtitle with every field decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub content: String,
    pub align: Align,
    pub color: ColorSpec,
}

/// Fully populated options with validated colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub max_width: usize,
    pub overflow: Overflow,
    pub strip_empty: bool,
    pub parse_line_feeds: bool,
    pub autocorrect: bool,
    pub title: Banner,
    pub subtitle: Banner,
    pub grid: ColorSpec,
    pub text: ColorSpec,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        let blank = Banner {
            content: String::new(),
            align: Align::Left,
            color: ColorSpec::default(),
        };
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            overflow: Overflow::Newline,
            strip_empty: true,
            parse_line_feeds: false,
            autocorrect: false,
            title: blank.clone(),
            subtitle: blank,
            grid: ColorSpec::default(),
            text: ColorSpec::default(),
        }
    }
}
