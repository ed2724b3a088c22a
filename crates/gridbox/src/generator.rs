//! The box generator and its preset list.

use std::borrow::Cow;

use tracing::debug;

use crate::assemble::assemble;
use crate::colorize::{colorize, Painters};
use crate::error::Result;
use crate::normalize::strip_empty;
use crate::options::{BoxOptions, ResolvedOptions};
use crate::preset::BoxCharacters;
use crate::stitch::stitch;
use crate::template::Template;
use crate::wrap::{wrap_rows, Geometry};

/// Renders templates into box drawings.
///
/// A generator owns an ordered list of character presets and the index of the
/// active one. It starts with [`BoxCharacters::LIGHT`] at index 0.
///
/// # Example
///
/// ```rust
/// use gridbox::{BoxCharacters, BoxGenerator, BoxOptions, Template};
///
/// let mut generator = BoxGenerator::new();
/// let double = generator.add_preset(BoxCharacters::DOUBLE);
/// assert!(generator.set_preset(double));
///
/// let template = Template::new().row(["Hello"]);
/// let output = generator
///     .generate(&template, &BoxOptions::new().max_width(20))
///     .unwrap();
/// assert!(output.contains('╔'));
/// ```
#[derive(Debug, Clone)]
pub struct BoxGenerator {
    presets: Vec<BoxCharacters>,
    active: usize,
}

impl Default for BoxGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxGenerator {
    pub fn new() -> Self {
        Self {
            presets: vec![BoxCharacters::LIGHT],
            active: 0,
        }
    }

    /// Adds a preset and returns its index. The active preset is unchanged.
    pub fn add_preset(&mut self, preset: BoxCharacters) -> usize {
        self.presets.push(preset);
        self.presets.len() - 1
    }

    /// Activates the preset at `index`. Returns `false`, changing nothing, if
    /// there is no such preset.
    pub fn set_preset(&mut self, index: usize) -> bool {
        if index < self.presets.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn presets(&self) -> &[BoxCharacters] {
        &self.presets
    }

    pub fn active_preset(&self) -> usize {
        self.active
    }

    /// The glyphs of the active preset.
    pub fn characters(&self) -> &BoxCharacters {
        &self.presets[self.active]
    }

    /// Renders `template` as a box.
    ///
    /// # Errors
    ///
    /// - [`BoxError::Configuration`](crate::BoxError::Configuration) when a
    ///   color is not supported.
    /// - [`BoxError::Layout`](crate::BoxError::Layout) when `max_width` is too
    ///   small for the widest row and auto-correction is off.
    pub fn generate(&self, template: &Template, options: &BoxOptions) -> Result<String> {
        let resolved = options.resolve()?;
        let mut painters = Painters::new(&resolved);
        self.render(template, &resolved, &mut painters)
    }

    /// Like [`generate`](Self::generate), with rainbow colors drawn from a
    /// fixed seed so the output is reproducible.
    pub fn generate_seeded(
        &self,
        template: &Template,
        options: &BoxOptions,
        seed: u64,
    ) -> Result<String> {
        let resolved = options.resolve()?;
        let mut painters = Painters::seeded(&resolved, seed);
        self.render(template, &resolved, &mut painters)
    }

    fn render(
        &self,
        template: &Template,
        options: &ResolvedOptions,
        painters: &mut Painters,
    ) -> Result<String> {
        let chars = *self.characters();

        let template = if options.strip_empty {
            Cow::Owned(strip_empty(template))
        } else {
            Cow::Borrowed(template)
        };

        let geometry = Geometry::compute(
            options.max_width,
            template.max_sectors(),
            options.autocorrect,
        )?;
        debug!(
            max_width = geometry.max_width,
            sectors = geometry.sectors,
            sector_width = geometry.sector_width,
            "box geometry"
        );

        let rows = wrap_rows(&template, &geometry, options)?;
        let mut lines = assemble(
            &rows,
            geometry.content_length(),
            &chars,
            &options.title,
            &options.subtitle,
        );
        stitch(&mut lines, &chars);
        debug!(rows = rows.len(), lines = lines.len(), "box assembled");

        Ok(colorize(&lines, &chars, painters))
    }
}
