//! Character presets: the eleven glyphs a box is drawn with.

use serde::Deserialize;

/// Box-drawing characters for one preset.
///
/// Presets deserialize from documents using the glyph names `TopLeft`,
/// `TopRight`, `BottomLeft`, `BottomRight`, `HorizontalSeparator`,
/// `VerticalSeparator`, `TopJunction`, `BottomJunction`, `MiddleJunction`,
/// `LeftJunction` and `RightJunction`.
///
/// Every glyph is expected to occupy one terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoxCharacters {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    #[serde(rename = "HorizontalSeparator")]
    pub horizontal: char,
    #[serde(rename = "VerticalSeparator")]
    pub vertical: char,
    /// `┬`
    pub top_junction: char,
    /// `┴`
    pub bottom_junction: char,
    /// `┼`
    #[serde(rename = "MiddleJunction")]
    pub cross: char,
    /// `├`
    pub left_junction: char,
    /// `┤`
    pub right_junction: char,
}

impl BoxCharacters {
    /// Light box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    pub const LIGHT: BoxCharacters = BoxCharacters {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
        top_junction: '┬',
        bottom_junction: '┴',
        cross: '┼',
        left_junction: '├',
        right_junction: '┤',
    };

    /// Double-line box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    pub const DOUBLE: BoxCharacters = BoxCharacters {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
        top_junction: '╦',
        bottom_junction: '╩',
        cross: '╬',
        left_junction: '╠',
        right_junction: '╣',
    };

    /// Heavy box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    pub const HEAVY: BoxCharacters = BoxCharacters {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
        top_junction: '┳',
        bottom_junction: '┻',
        cross: '╋',
        left_junction: '┣',
        right_junction: '┫',
    };

    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    pub const ROUNDED: BoxCharacters = BoxCharacters {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::LIGHT
    };

    /// ASCII borders: +, -, |
    pub const ASCII: BoxCharacters = BoxCharacters {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
        top_junction: '+',
        bottom_junction: '+',
        cross: '+',
        left_junction: '+',
        right_junction: '+',
    };

    /// All eleven glyphs.
    pub fn glyphs(&self) -> [char; 11] {
        [
            self.top_right,
            self.top_left,
            self.bottom_right,
            self.bottom_left,
            self.horizontal,
            self.vertical,
            self.top_junction,
            self.bottom_junction,
            self.cross,
            self.left_junction,
            self.right_junction,
        ]
    }

    /// Whether `c` is one of this preset's glyphs.
    pub fn is_glyph(&self, c: char) -> bool {
        self.glyphs().contains(&c)
    }

    /// Whether a line is a horizontal border: the top or bottom border, or a
    /// rule between rows.
    pub(crate) fn is_rule_line(&self, line: &str) -> bool {
        line.starts_with(self.top_left)
            || line.starts_with(self.left_junction)
            || line.starts_with(self.bottom_left)
    }
}

impl Default for BoxCharacters {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_is_default() {
        assert_eq!(BoxCharacters::default(), BoxCharacters::LIGHT);
    }

    #[test]
    fn rounded_differs_only_in_corners() {
        let rounded = BoxCharacters::ROUNDED;
        assert_eq!(rounded.top_left, '╭');
        assert_eq!(rounded.cross, BoxCharacters::LIGHT.cross);
        assert_eq!(rounded.horizontal, BoxCharacters::LIGHT.horizontal);
    }

    #[test]
    fn glyph_membership() {
        let light = BoxCharacters::LIGHT;
        assert!(light.is_glyph('┼'));
        assert!(light.is_glyph('│'));
        assert!(!light.is_glyph(' '));
        assert!(!light.is_glyph('║'));
    }

    #[test]
    fn rule_lines() {
        let light = BoxCharacters::LIGHT;
        assert!(light.is_rule_line("┌──┐"));
        assert!(light.is_rule_line("├──┤"));
        assert!(light.is_rule_line("└──┘"));
        assert!(!light.is_rule_line("│ a │"));
    }

    #[test]
    fn deserializes_from_glyph_names() {
        let json = r#"{
            "TopRight": "╗", "TopLeft": "╔", "BottomRight": "╝", "BottomLeft": "╚",
            "HorizontalSeparator": "═", "VerticalSeparator": "║",
            "TopJunction": "╦", "BottomJunction": "╩", "MiddleJunction": "╬",
            "LeftJunction": "╠", "RightJunction": "╣"
        }"#;
        let preset: BoxCharacters = serde_json::from_str(json).unwrap();
        assert_eq!(preset, BoxCharacters::DOUBLE);
    }
}
