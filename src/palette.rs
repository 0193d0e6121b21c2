//! Neon colour palette.

use rand::Rng;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend; `t = 0` is `self`, `t = 1` is `other`.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    /// CSS `rgba(...)` string with the alpha clamped to `[0, 1]`.
    pub fn css(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// The tubes a bulb can be made of. Each hue pairs a saturated body colour
/// with the softer halo it throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Neon {
    Cyan,
    Magenta,
    Violet,
    Amber,
    Lime,
}

impl Neon {
    pub const ALL: [Neon; 5] = [Neon::Cyan, Neon::Magenta, Neon::Violet, Neon::Amber, Neon::Lime];

    pub fn main(self) -> Rgb {
        match self {
            Neon::Cyan => Rgb::new(0, 255, 255),
            Neon::Magenta => Rgb::new(255, 0, 255),
            Neon::Violet => Rgb::new(170, 90, 255),
            Neon::Amber => Rgb::new(255, 200, 40),
            Neon::Lime => Rgb::new(120, 255, 80),
        }
    }

    pub fn glow(self) -> Rgb {
        match self {
            Neon::Cyan => Rgb::new(0, 140, 255),
            Neon::Magenta => Rgb::new(190, 0, 255),
            Neon::Violet => Rgb::new(110, 40, 220),
            Neon::Amber => Rgb::new(255, 110, 0),
            Neon::Lime => Rgb::new(0, 200, 90),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Neon {
        Neon::ALL[rng.gen_range(0..Neon::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Neon::Cyan.main();
        let b = Neon::Magenta.main();
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb::new(128, 128, 255));
    }

    #[test]
    fn css_clamps_alpha() {
        assert_eq!(Rgb::new(1, 2, 3).css(1.7), "rgba(1, 2, 3, 1.000)");
        assert_eq!(Rgb::new(1, 2, 3).css(-0.2), "rgba(1, 2, 3, 0.000)");
        assert_eq!(Rgb::WHITE.css(0.25), "rgba(255, 255, 255, 0.250)");
    }
}
