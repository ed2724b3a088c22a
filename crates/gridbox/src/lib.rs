//! # gridbox - nested text grids as terminal box drawings
//!
//! `gridbox` lays out a [`Template`] of rows and sectors into a fixed-width
//! grid, draws box characters around and between the cells, splices an
//! optional title and subtitle into the borders and colors the result with
//! 24-bit ANSI escapes.
//!
//! ```rust
//! use gridbox::{generate, BoxOptions, Template};
//!
//! let template = Template::new().row(["Hello", "World"]).row(["World", "Hello"]);
//! let output = generate(&template, &BoxOptions::new().max_width(12)).unwrap();
//!
//! let plain = console::strip_ansi_codes(&output).into_owned();
//! assert_eq!(
//!     plain,
//!     "┌───────┬───────┐\n\
//!      │ Hello │ World │\n\
//!      ├───────┼───────┤\n\
//!      │ World │ Hello │\n\
//!      └───────┴───────┘"
//! );
//! ```
//!
//! ## Pipeline
//!
//! Each call runs the same stages in order:
//!
//! 1. Options are resolved: defaults filled in, colors validated.
//! 2. Blank text, sectors and rows are stripped (unless `strip_empty` is off).
//! 3. The sector width is computed from `max_width` and the widest row, and
//!    every text value is wrapped or trimmed to it.
//! 4. Rows are assembled between the borders, with rules between rows.
//! 5. Junction glyphs are stitched in where separators meet rules.
//! 6. Border glyphs and content are colored separately.
//!
//! ## Presets
//!
//! [`BoxGenerator`] holds a list of [`BoxCharacters`] presets. The free
//! [`generate`] function uses a shared generator with the light preset.

mod assemble;
mod banner;
mod colorize;
mod error;
mod generator;
mod normalize;
mod options;
mod preset;
mod stitch;
mod template;
mod wrap;

use once_cell::sync::Lazy;

pub use error::{BoxError, Result};
pub use generator::BoxGenerator;
pub use options::{
    Align, Banner, BoxOptions, ColorOptions, Overflow, ResolvedOptions, TitleOptions,
    DEFAULT_MAX_WIDTH,
};
pub use preset::BoxCharacters;
pub use template::{Row, Sector, Template};

pub use gridbox_ansi::{ColorInput, ColorSpec, RainbowKind, Rgb};

static DEFAULT_GENERATOR: Lazy<BoxGenerator> = Lazy::new(BoxGenerator::new);

/// Renders `template` with a shared generator using the light preset.
pub fn generate(template: &Template, options: &BoxOptions) -> Result<String> {
    DEFAULT_GENERATOR.generate(template, options)
}
