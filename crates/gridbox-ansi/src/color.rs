//! Color specification parsing.
//!
//! Supported formats:
//!
//! - 24-bit integers: `0xff6b35`
//! - RGB hex: `"#ff6b35"`, `"ff6b35"`, `"#fff"` or `"fff"` (3 or 6 digits)
//! - Rainbow keywords: `rainbow`, `rainbow4`, `rainbow16`, `rainbow24`
//!
//! Parsing happens once, turning the loosely typed [`ColorInput`] into the
//! closed [`ColorSpec`] variant that painters are built from.
//!
//! # Example
//!
//! ```rust
//! use gridbox_ansi::{ColorInput, ColorSpec, RainbowKind, Rgb};
//!
//! let hex = ColorSpec::parse(&ColorInput::from("#ff6b35")).unwrap();
//! assert_eq!(hex, ColorSpec::Fixed(Rgb(255, 107, 53)));
//!
//! let int = ColorSpec::parse(&ColorInput::from(0x00ff00u32)).unwrap();
//! assert_eq!(int, ColorSpec::Fixed(Rgb(0, 255, 0)));
//!
//! let rainbow = ColorSpec::parse(&ColorInput::from("rainbow16")).unwrap();
//! assert_eq!(rainbow, ColorSpec::Rainbow(RainbowKind::Ansi256));
//! ```

use std::fmt;

use serde::Deserialize;

use crate::error::{AnsiError, Result};

/// A true-color RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// White, the color used when none is configured.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Splits a `0xRRGGBB` integer into its components.
    ///
    /// Bits above the lowest 24 are ignored.
    pub fn from_hex_int(value: u32) -> Self {
        Rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// The SGR foreground sequence selecting this color.
    ///
    /// ```rust
    /// use gridbox_ansi::Rgb;
    ///
    /// assert_eq!(Rgb(255, 0, 0).escape(), "\x1b[38;2;255;0;0m");
    /// ```
    pub fn escape(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// A color value as supplied by a caller or an options document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// A numeric `0xRRGGBB` value. Negative values are never renderable.
    Int(i64),
    /// A hex string or a rainbow keyword.
    Text(String),
}

impl From<u32> for ColorInput {
    fn from(value: u32) -> Self {
        ColorInput::Int(value as i64)
    }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        ColorInput::Text(value.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        ColorInput::Text(value)
    }
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorInput::Int(n) if *n >= 0 => write!(f, "{:#08x}", n),
            ColorInput::Int(n) => write!(f, "{}", n),
            ColorInput::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// The rainbow variants, each cycling a palette per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RainbowKind {
    /// `rainbow`: the 16 base terminal colors.
    Basic,
    /// `rainbow4`: the 16 base terminal colors.
    Ansi16,
    /// `rainbow16`: the 240 extended colors of the 256-color palette.
    Ansi256,
    /// `rainbow24`: random true colors, drawn once per painter.
    TrueColor,
}

impl RainbowKind {
    /// Looks up a rainbow keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "rainbow" => Some(RainbowKind::Basic),
            "rainbow4" => Some(RainbowKind::Ansi16),
            "rainbow16" => Some(RainbowKind::Ansi256),
            "rainbow24" => Some(RainbowKind::TrueColor),
            _ => None,
        }
    }

    /// The keyword naming this variant.
    pub fn keyword(&self) -> &'static str {
        match self {
            RainbowKind::Basic => "rainbow",
            RainbowKind::Ansi16 => "rainbow4",
            RainbowKind::Ansi256 => "rainbow16",
            RainbowKind::TrueColor => "rainbow24",
        }
    }
}

/// A validated color strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// One color for the whole run.
    Fixed(Rgb),
    /// A per-character color cycle.
    Rainbow(RainbowKind),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Fixed(Rgb::WHITE)
    }
}

impl ColorSpec {
    /// Parses a caller-supplied color.
    ///
    /// Integers are `0xRRGGBB`, so `0` is black rather than a default.
    pub fn parse(input: &ColorInput) -> Result<Self> {
        match input {
            ColorInput::Int(n) => {
                if (0..=0xff_ffff).contains(n) {
                    Ok(ColorSpec::Fixed(Rgb::from_hex_int(*n as u32)))
                } else {
                    Err(AnsiError::unsupported(input.to_string()))
                }
            }
            ColorInput::Text(s) => Self::parse_string(s),
        }
    }

    /// Parses a hex string or rainbow keyword.
    pub fn parse_string(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(kind) = RainbowKind::from_keyword(s) {
            return Ok(ColorSpec::Rainbow(kind));
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        parse_hex(hex)
            .map(ColorSpec::Fixed)
            .ok_or_else(|| AnsiError::unsupported(s))
    }
}

/// Whether a color can be rendered.
pub fn is_color_supported(input: &ColorInput) -> bool {
    ColorSpec::parse(input).is_ok()
}

/// Parses 3 or 6 hex digits (without the `#` prefix).
fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex color tests
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(
            ColorSpec::parse_string("#ff6b35").unwrap(),
            ColorSpec::Fixed(Rgb(255, 107, 53))
        );
        assert_eq!(
            ColorSpec::parse_string("000000").unwrap(),
            ColorSpec::Fixed(Rgb(0, 0, 0))
        );
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(
            ColorSpec::parse_string("#fff").unwrap(),
            ColorSpec::Fixed(Rgb(255, 255, 255))
        );
        assert_eq!(
            ColorSpec::parse_string("f80").unwrap(),
            ColorSpec::Fixed(Rgb(255, 136, 0))
        );
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(
            ColorSpec::parse_string("#FF6B35").unwrap(),
            ColorSpec::Fixed(Rgb(255, 107, 53))
        );
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(ColorSpec::parse_string("#ff").is_err());
        assert!(ColorSpec::parse_string("#ffff").is_err());
        assert!(ColorSpec::parse_string("#gggggg").is_err());
        assert!(ColorSpec::parse_string("red").is_err());
        assert!(ColorSpec::parse_string("").is_err());
    }

    #[test]
    fn test_parse_hex_rejects_multibyte() {
        // Three bytes but two chars; must not panic on slicing.
        assert!(ColorSpec::parse_string("#é1").is_err());
    }

    // =========================================================================
    // Integer tests
    // =========================================================================

    #[test]
    fn test_parse_int() {
        assert_eq!(
            ColorSpec::parse(&ColorInput::from(0xff0000u32)).unwrap(),
            ColorSpec::Fixed(Rgb(255, 0, 0))
        );
        assert_eq!(
            ColorSpec::parse(&ColorInput::Int(0)).unwrap(),
            ColorSpec::Fixed(Rgb(0, 0, 0))
        );
    }

    #[test]
    fn test_parse_int_out_of_range() {
        assert!(ColorSpec::parse(&ColorInput::Int(0x1000000)).is_err());
        assert!(ColorSpec::parse(&ColorInput::Int(-1)).is_err());
    }

    // =========================================================================
    // Rainbow tests
    // =========================================================================

    #[test]
    fn test_parse_rainbow_keywords() {
        for kind in [
            RainbowKind::Basic,
            RainbowKind::Ansi16,
            RainbowKind::Ansi256,
            RainbowKind::TrueColor,
        ] {
            assert_eq!(
                ColorSpec::parse_string(kind.keyword()).unwrap(),
                ColorSpec::Rainbow(kind)
            );
        }
        assert!(ColorSpec::parse_string("rainbow8").is_err());
    }

    #[test]
    fn test_is_color_supported() {
        assert!(is_color_supported(&"#abc".into()));
        assert!(is_color_supported(&"rainbow".into()));
        assert!(!is_color_supported(&"blue".into()));
    }

    #[test]
    fn test_unsupported_error_names_value() {
        let err = ColorSpec::parse_string("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_deserialize_untagged() {
        let int: ColorInput = serde_json::from_str("16711680").unwrap();
        assert_eq!(int, ColorInput::Int(0xff0000));
        let text: ColorInput = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(text, ColorInput::Text("#00ff00".into()));
    }

    #[test]
    fn test_escape() {
        assert_eq!(Rgb::WHITE.escape(), "\x1b[38;2;255;255;255m");
        assert_eq!(Rgb::from_hex_int(0x0a0b0c), Rgb(10, 11, 12));
    }
}
