//! Fixed palettes for the rainbow color variants.
//!
//! The base 16 colors use xterm's default RGB values. The extended palette is
//! the 6×6×6 color cube plus the 24-step grayscale ramp that occupy indices
//! 16–255 of the 256-color palette.

use rand::Rng;

use crate::color::Rgb;

/// Channel values of the 6-level color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// xterm's default RGB values for the 16 base colors.
pub fn xterm_16() -> Vec<Rgb> {
    vec![
        Rgb(0, 0, 0),
        Rgb(205, 0, 0),
        Rgb(0, 205, 0),
        Rgb(205, 205, 0),
        Rgb(0, 0, 238),
        Rgb(205, 0, 205),
        Rgb(0, 205, 205),
        Rgb(229, 229, 229),
        Rgb(127, 127, 127),
        Rgb(255, 0, 0),
        Rgb(0, 255, 0),
        Rgb(255, 255, 0),
        Rgb(92, 92, 255),
        Rgb(255, 0, 255),
        Rgb(0, 255, 255),
        Rgb(255, 255, 255),
    ]
}

/// The 240 extended colors (indices 16–255) of the 256-color palette.
pub fn xterm_256() -> Vec<Rgb> {
    let mut palette = Vec::with_capacity(240);

    for r in CUBE_LEVELS {
        for g in CUBE_LEVELS {
            for b in CUBE_LEVELS {
                palette.push(Rgb(r, g, b));
            }
        }
    }

    for i in 0..24u8 {
        let level = 8 + 10 * i;
        palette.push(Rgb(level, level, level));
    }

    palette
}

/// Draws `count` uniformly random true colors.
pub fn random_truecolor<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Rgb> {
    (0..count)
        .map(|_| Rgb(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn base_palette_has_16_entries() {
        let palette = xterm_16();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette[0], Rgb(0, 0, 0));
        assert_eq!(palette[15], Rgb(255, 255, 255));
    }

    #[test]
    fn extended_palette_layout() {
        let palette = xterm_256();
        assert_eq!(palette.len(), 240);
        // index 16 + 36*5 = 196 is pure red
        assert_eq!(palette[180], Rgb(255, 0, 0));
        // last cube entry is white, then the grayscale ramp starts
        assert_eq!(palette[215], Rgb(255, 255, 255));
        assert_eq!(palette[216], Rgb(8, 8, 8));
        assert_eq!(palette[239], Rgb(238, 238, 238));
    }

    #[test]
    fn random_truecolor_count_and_determinism() {
        let a = random_truecolor(30, &mut StdRng::seed_from_u64(7));
        let b = random_truecolor(30, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
    }
}
