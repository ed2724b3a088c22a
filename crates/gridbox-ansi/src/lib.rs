//! # gridbox-ansi - color strategies and display-width primitives
//!
//! The terminal-facing helpers the `gridbox` layout engine is built on:
//!
//! - [`ColorSpec`] parses integers, hex strings and rainbow keywords into a
//!   closed color strategy; [`Painter`] applies it to text.
//! - [`visible_width`], [`chunk_visible`], [`truncate_end`] and
//!   [`pad_right`] measure and reshape text by terminal columns, treating ANSI
//!   escape sequences as zero-width.
//!
//! ```rust
//! use gridbox_ansi::{chunk_visible, pad_right, ColorInput, ColorSpec, Painter};
//!
//! let chunks = chunk_visible("Hello world", 1, 6).unwrap();
//! assert_eq!(chunks, vec!["Hello ", "world"]);
//! assert_eq!(pad_right(&chunks[1], 6), "world ");
//!
//! let spec = ColorSpec::parse(&ColorInput::from("#00ff00")).unwrap();
//! let mut green = Painter::new(&spec);
//! assert_eq!(green.paint("ok"), "\x1b[38;2;0;255;0mok");
//! ```

mod color;
mod error;
mod paint;
pub mod palette;
mod text;

pub use color::{is_color_supported, ColorInput, ColorSpec, RainbowKind, Rgb};
pub use error::{AnsiError, Result};
pub use paint::{Painter, TRUECOLOR_RAINBOW_SIZE};
pub use text::{
    char_columns, char_width, chunk_visible, escape_line_feeds, is_blank, pad_right, segments,
    truncate_end, visible_width, CharColumn, Segment, Segments,
};
