//! Colorizing finished lines.

use gridbox_ansi::Painter;

use crate::options::ResolvedOptions;
use crate::preset::BoxCharacters;

/// The four painters a box is colored with.
#[derive(Debug, Clone)]
pub(crate) struct Painters {
    pub grid: Painter,
    pub text: Painter,
    pub title: Painter,
    pub subtitle: Painter,
}

impl Painters {
    pub fn new(options: &ResolvedOptions) -> Self {
        Self {
            grid: Painter::new(&options.grid),
            text: Painter::new(&options.text),
            title: Painter::new(&options.title.color),
            subtitle: Painter::new(&options.subtitle.color),
        }
    }

    /// Painters whose rainbows are reproducible for a given seed.
    pub fn seeded(options: &ResolvedOptions, seed: u64) -> Self {
        Self {
            grid: Painter::seeded(&options.grid, seed),
            text: Painter::seeded(&options.text, seed.wrapping_add(1)),
            title: Painter::seeded(&options.title.color, seed.wrapping_add(2)),
            subtitle: Painter::seeded(&options.subtitle.color, seed.wrapping_add(3)),
        }
    }
}

/// Colors each line and joins them with newlines.
///
/// Runs of preset glyphs get the grid color and everything else the text
/// color, except that the first content run of the top line is the title and
/// the first content run of the bottom line is the subtitle.
pub(crate) fn colorize(lines: &[String], chars: &BoxCharacters, painters: &mut Painters) -> String {
    let last = lines.len().saturating_sub(1);

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut out = String::with_capacity(line.len() * 2);
            let mut banner_pending = i == 0 || i == last;

            for (is_border, run) in runs(line, chars) {
                let painter = if is_border {
                    &mut painters.grid
                } else if banner_pending {
                    banner_pending = false;
                    if i == 0 {
                        &mut painters.title
                    } else {
                        &mut painters.subtitle
                    }
                } else {
                    &mut painters.text
                };
                out.push_str(&painter.paint(run));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a line into maximal runs of border glyphs and of content.
fn runs<'a>(line: &'a str, chars: &BoxCharacters) -> Vec<(bool, &'a str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (byte, c) in line.char_indices() {
        let is_border = chars.is_glyph(c);
        match current {
            Some(kind) if kind != is_border => {
                runs.push((kind, &line[start..byte]));
                start = byte;
                current = Some(is_border);
            }
            None => current = Some(is_border),
            _ => {}
        }
    }

    if let Some(kind) = current {
        runs.push((kind, &line[start..]));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BoxOptions;

    const WHITE: &str = "\x1b[38;2;255;255;255m";
    const RED: &str = "\x1b[38;2;255;0;0m";
    const GREEN: &str = "\x1b[38;2;0;255;0m";

    fn painters(options: BoxOptions) -> Painters {
        Painters::seeded(&options.resolve().unwrap(), 0)
    }

    #[test]
    fn runs_split_on_glyph_boundaries() {
        let parts = runs("│ ab │ c │", &BoxCharacters::LIGHT);
        assert_eq!(
            parts,
            vec![
                (true, "│"),
                (false, " ab "),
                (true, "│"),
                (false, " c "),
                (true, "│"),
            ]
        );
    }

    #[test]
    fn runs_of_empty_line() {
        assert!(runs("", &BoxCharacters::LIGHT).is_empty());
    }

    #[test]
    fn default_colors_are_white() {
        let lines = vec!["┌──┐".to_string(), "│ a│".to_string(), "└──┘".to_string()];
        let out = colorize(&lines, &BoxCharacters::LIGHT, &mut painters(BoxOptions::new()));
        assert_eq!(
            out,
            format!("{WHITE}┌──┐\n{WHITE}│{WHITE} a{WHITE}│\n{WHITE}└──┘")
        );
    }

    #[test]
    fn grid_and_text_colors() {
        let lines = vec!["┌─┐".to_string(), "│a│".to_string(), "└─┘".to_string()];
        let options = BoxOptions::new().grid_color(0xff0000u32).text_color(0x00ff00u32);
        let out = colorize(&lines, &BoxCharacters::LIGHT, &mut painters(options));
        assert_eq!(out.lines().nth(1), Some(format!("{RED}│{GREEN}a{RED}│").as_str()));
    }

    #[test]
    fn title_and_subtitle_use_their_colors() {
        let lines = vec![
            "┌ T ─┐".to_string(),
            "│ a  │".to_string(),
            "└ S ─┘".to_string(),
        ];
        let options = BoxOptions::new()
            .title(crate::TitleOptions::new("T").color(0xff0000u32))
            .subtitle(crate::TitleOptions::new("S").color(0x00ff00u32));
        let out = colorize(&lines, &BoxCharacters::LIGHT, &mut painters(options));
        let out: Vec<&str> = out.lines().collect();
        assert_eq!(out[0], format!("{WHITE}┌{RED} T {WHITE}─┐"));
        assert_eq!(out[1], format!("{WHITE}│{WHITE} a  {WHITE}│"));
        assert_eq!(out[2], format!("{WHITE}└{GREEN} S {WHITE}─┘"));
    }

    #[test]
    fn only_first_top_run_is_the_title() {
        let lines = vec!["┌ T ┬ x ┐".to_string(), "└───────┘".to_string()];
        let options = BoxOptions::new()
            .text_color(0x00ff00u32)
            .title(crate::TitleOptions::new("T").color(0xff0000u32));
        let out = colorize(&lines, &BoxCharacters::LIGHT, &mut painters(options));
        let top = out.lines().next().unwrap_or_default();
        assert_eq!(top, format!("{WHITE}┌{RED} T {WHITE}┬{GREEN} x {WHITE}┐"));
    }
}
