//! Materialized color functions.
//!
//! A [`Painter`] is built once from a validated [`ColorSpec`] and then applied
//! to any number of text runs. Fixed colors prefix the run with a single
//! escape. Rainbow variants shuffle their palette on every call and give each
//! visible character the next color of the cycle.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::color::{ColorSpec, RainbowKind, Rgb};
use crate::palette;
use crate::text::{segments, Segment};

/// Number of random colors drawn for a true-color rainbow.
pub const TRUECOLOR_RAINBOW_SIZE: usize = 30;

/// Applies a color strategy to text.
#[derive(Debug, Clone)]
pub struct Painter {
    spec: ColorSpec,
    palette: Vec<Rgb>,
    rng: StdRng,
}

impl Painter {
    /// Creates a painter seeded from system entropy.
    pub fn new(spec: &ColorSpec) -> Self {
        Self::with_rng(spec, StdRng::from_entropy())
    }

    /// Creates a painter with a fixed seed, for reproducible rainbows.
    pub fn seeded(spec: &ColorSpec, seed: u64) -> Self {
        Self::with_rng(spec, StdRng::seed_from_u64(seed))
    }

    fn with_rng(spec: &ColorSpec, mut rng: StdRng) -> Self {
        let palette = match spec {
            ColorSpec::Fixed(_) => Vec::new(),
            ColorSpec::Rainbow(RainbowKind::Basic | RainbowKind::Ansi16) => palette::xterm_16(),
            ColorSpec::Rainbow(RainbowKind::Ansi256) => palette::xterm_256(),
            ColorSpec::Rainbow(RainbowKind::TrueColor) => {
                palette::random_truecolor(TRUECOLOR_RAINBOW_SIZE, &mut rng)
            }
        };

        Self {
            spec: *spec,
            palette,
            rng,
        }
    }

    /// The color strategy this painter applies.
    pub fn spec(&self) -> &ColorSpec {
        &self.spec
    }

    /// The escape a fixed-color painter puts in front of every run.
    /// Rainbow painters have no single prefix.
    pub fn prefix(&self) -> Option<String> {
        match self.spec {
            ColorSpec::Fixed(rgb) => Some(rgb.escape()),
            ColorSpec::Rainbow(_) => None,
        }
    }

    /// Colors a run of text.
    ///
    /// Escape sequences already in `text` are passed through and do not
    /// consume a palette entry. No reset sequence is appended.
    ///
    /// ```rust
    /// use gridbox_ansi::{ColorSpec, Painter, Rgb};
    ///
    /// let mut red = Painter::new(&ColorSpec::Fixed(Rgb(255, 0, 0)));
    /// assert_eq!(red.paint("hi"), "\x1b[38;2;255;0;0mhi");
    /// ```
    pub fn paint(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        match self.spec {
            ColorSpec::Fixed(rgb) => format!("{}{}", rgb.escape(), text),
            ColorSpec::Rainbow(_) => self.rainbowify(text),
        }
    }

    fn rainbowify(&mut self, text: &str) -> String {
        let mut colors = self.palette.clone();
        colors.shuffle(&mut self.rng);
        if colors.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() * 20);
        let mut cycle = colors.iter().cycle();
        for segment in segments(text) {
            match segment {
                Segment::Escape(sequence) => out.push_str(sequence),
                Segment::Char(ch) => {
                    if let Some(rgb) = cycle.next() {
                        out.push_str(&rgb.escape());
                    }
                    out.push(ch);
                }
            }
        }
        out
    }
}
