//! Template normalization: dropping blank content before layout.

use gridbox_ansi::is_blank;

use crate::template::{Row, Sector, Template};

/// Removes blank text values, sectors and rows.
///
/// A value is blank when it is empty or whitespace once escape sequences are
/// ignored. A sub-line sector loses its blank sub-lines and is dropped when
/// none remain; a content row left without sectors is dropped. Rules are kept
/// unconditionally.
pub(crate) fn strip_empty(template: &Template) -> Template {
    template
        .rows()
        .iter()
        .filter_map(|row| match row {
            Row::Rule => Some(Row::Rule),
            Row::Content(sectors) => {
                let kept: Vec<Sector> = sectors.iter().filter_map(strip_sector).collect();
                (!kept.is_empty()).then_some(Row::Content(kept))
            }
        })
        .collect()
}

fn strip_sector(sector: &Sector) -> Option<Sector> {
    match sector {
        Sector::Text(text) if is_blank(text) => None,
        Sector::Text(text) => Some(Sector::Text(text.clone())),
        Sector::Lines(lines) => {
            let kept: Vec<String> = lines.iter().filter(|l| !is_blank(l)).cloned().collect();
            (!kept.is_empty()).then_some(Sector::Lines(kept))
        }
    }
}
