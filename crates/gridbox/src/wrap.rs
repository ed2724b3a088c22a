//! Geometry and cell wrapping.
//!
//! Every sector in a box has the same width. [`Geometry`] derives it from the
//! maximum width and the widest row; [`wrap_rows`] then turns each sector's
//! text into a block of lines that are exactly that wide, and squares each row
//! off so all of its sectors have the same number of lines.

use gridbox_ansi::{chunk_visible, escape_line_feeds, pad_right, truncate_end};
use tracing::debug;

use crate::error::{BoxError, Result};
use crate::options::{Overflow, ResolvedOptions};
use crate::template::{Row, Sector, Template};

/// Columns a box spends on borders and separators besides its sectors:
/// `│ ` on the left, ` │` on the right and ` │ ` between sectors.
fn border_overhead(sectors: usize) -> usize {
    4 + 3 * (sectors - 1)
}

/// The global layout dimensions of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    /// The maximum width after any auto-correction.
    pub max_width: usize,
    /// Sectors per row.
    pub sectors: usize,
    /// Width of every sector.
    pub sector_width: usize,
}

impl Geometry {
    /// Computes the sector width for `sectors` columns in `max_width`.
    ///
    /// When the sectors do not fit, either grows the width (with
    /// `autocorrect`) or fails with [`BoxError::Layout`] carrying the width
    /// the same growth would have reached.
    pub fn compute(max_width: usize, sectors: usize, autocorrect: bool) -> Result<Self> {
        let sectors = sectors.max(1);

        if let Some(sector_width) = sector_width(max_width, sectors) {
            return Ok(Self {
                max_width,
                sectors,
                sector_width,
            });
        }

        let minimum = grow_until_fit(max_width, sectors);
        if !autocorrect {
            return Err(BoxError::Layout {
                max_width,
                sectors,
                minimum,
            });
        }

        debug!(
            requested = max_width,
            corrected = minimum,
            sectors,
            "max width auto-corrected"
        );
        Ok(Self {
            max_width: minimum,
            sectors,
            sector_width: minimum - border_overhead(sectors),
        })
    }

    /// Width of the area between the outer `│ ` and ` │`.
    pub fn content_length(&self) -> usize {
        self.sector_width * self.sectors + 3 * (self.sectors - 1)
    }
}

fn sector_width(max_width: usize, sectors: usize) -> Option<usize> {
    max_width
        .checked_sub(border_overhead(sectors))
        .filter(|width| *width >= 1)
}

/// Grows by a tenth (rounded up, at least one column) until the sectors fit.
fn grow_until_fit(mut max_width: usize, sectors: usize) -> usize {
    while sector_width(max_width, sectors).is_none() {
        max_width += max_width.div_ceil(10).max(1);
    }
    max_width
}

// ============================================================================
// Wrapping
// ============================================================================

/// The wrapped lines of one sector, each exactly `width` columns wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectorBlock {
    pub width: usize,
    pub lines: Vec<String>,
}

impl SectorBlock {
    fn blank(width: usize) -> Self {
        Self {
            width,
            lines: vec![" ".repeat(width)],
        }
    }
}

/// A row after wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WrappedRow {
    /// One block per sector, all with the same line count.
    Sectors(Vec<SectorBlock>),
    Rule,
}

/// Wraps every sector of `template` to the geometry's sector width.
pub(crate) fn wrap_rows(
    template: &Template,
    geometry: &Geometry,
    options: &ResolvedOptions,
) -> Result<Vec<WrappedRow>> {
    template
        .rows()
        .iter()
        .map(|row| match row {
            Row::Rule => Ok(WrappedRow::Rule),
            Row::Content(sectors) => wrap_row(sectors, geometry, options).map(WrappedRow::Sectors),
        })
        .collect()
}

fn wrap_row(
    sectors: &[Sector],
    geometry: &Geometry,
    options: &ResolvedOptions,
) -> Result<Vec<SectorBlock>> {
    let width = geometry.sector_width;

    let mut blocks = sectors
        .iter()
        .map(|sector| wrap_sector(sector, width, options))
        .collect::<Result<Vec<_>>>()?;
    blocks.resize_with(geometry.sectors.max(blocks.len()), || {
        SectorBlock::blank(width)
    });

    let height = blocks.iter().map(|b| b.lines.len()).max().unwrap_or(1);
    for block in &mut blocks {
        block.lines.resize(height, " ".repeat(block.width));
    }

    Ok(blocks)
}

fn wrap_sector(sector: &Sector, width: usize, options: &ResolvedOptions) -> Result<SectorBlock> {
    let mut lines = Vec::new();
    for value in sector.values() {
        for line in split_value(value, options.parse_line_feeds) {
            match options.overflow {
                Overflow::Newline => {
                    let chunks = chunk_visible(&line, 1, width)?;
                    lines.extend(chunks.iter().map(|chunk| fit_line(chunk, width)));
                }
                Overflow::Trim => lines.push(fit_line(&line, width)),
            }
        }
    }

    if lines.is_empty() {
        return Ok(SectorBlock::blank(width));
    }
    Ok(SectorBlock { width, lines })
}

fn split_value(value: &str, parse_line_feeds: bool) -> Vec<String> {
    if parse_line_feeds {
        value.split('\n').map(String::from).collect()
    } else {
        vec![escape_line_feeds(value)]
    }
}

/// Truncates with `...` or pads so the line is exactly `width` columns.
/// A lone character wider than `width` becomes the ellipsis cut to `width`.
fn fit_line(line: &str, width: usize) -> String {
    pad_right(&truncate_end(line, width, "..."), width)
}
