use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use crate::{Color, ColorParseError, HslFormula, RGBColor};

/// Number of colors in a generated [`Palette`].
pub const PALETTE_SIZE: usize = 5;

/// Default variance of [`crate::HarmonyGenerator::add_random_variation`].
pub const DEFAULT_RANDOM_FACTOR: f64 = 0.1;

/// Color-theory rule used to derive companion hues from a base hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HarmonyType {
    /// Neighbors at ±30° and ±60° on the wheel.
    Analogous,
    /// The base hue and its 180° opposite, with lighter and darker
    /// variants of both.
    Complementary,
    /// The base hue and the two neighbors of its complement (+150°,
    /// +210°).
    SplitComplementary,
    /// Three hues 120° apart.
    Triadic,
    /// Four hues 90° apart.
    Square,
    /// A single hue swept through saturation and lightness.
    Monochromatic,
    /// A rectangle on the wheel: +60°, +180° and +240°.  The fifth
    /// slot is a jittered copy of one of the four.
    Tetradic,
}

impl HarmonyType {
    pub const ALL: [HarmonyType; 7] = [
        Self::Analogous,
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Square,
        Self::Monochromatic,
        Self::Tetradic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Square => "square",
            Self::Monochromatic => "monochromatic",
            Self::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyType {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|h| h.name() == t)
            .ok_or_else(|| ColorParseError::UnknownHarmony(s.to_string()))
    }
}


/// Five colors in slot order.  The slot index is the index of a
/// [`LockMask`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette([Color; PALETTE_SIZE]);

impl Palette {
    pub fn new(colors: [Color; PALETTE_SIZE]) -> Self { Palette(colors) }

    /// The swatches the palette page opens with: light salmon, sky blue,
    /// medium sea green, goldenrod and medium orchid.
    pub fn starter() -> Self {
        Palette([Color::from_rgb8(255, 160, 122),
                 Color::from_rgb8(135, 206, 235),
                 Color::from_rgb8(60, 179, 113),
                 Color::from_rgb8(218, 165, 32),
                 Color::from_rgb8(186, 85, 211)])
    }

    #[inline]
    pub fn as_slice(&self) -> &[Color] { &self.0 }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.0.iter() }

    /// Returns the colors of the palette in the caller's encoding.
    pub fn colors<C: RGBColor>(&self) -> Vec<C> {
        self.0.iter().map(|&c| C::from_color(c)).collect()
    }

    pub fn into_inner(self) -> [Color; PALETTE_SIZE] { self.0 }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, i: usize) -> &Color { &self.0[i] }
}

impl From<[Color; PALETTE_SIZE]> for Palette {
    fn from(colors: [Color; PALETTE_SIZE]) -> Self { Palette(colors) }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::array::IntoIter<Color, PALETTE_SIZE>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}


/// Per-slot locks.  A locked slot keeps its color when the palette is
/// regenerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct LockMask([bool; PALETTE_SIZE]);

impl LockMask {
    /// No slot locked.
    pub fn new() -> Self { Self::default() }

    /// Every slot locked.
    pub fn all() -> Self { LockMask([true; PALETTE_SIZE]) }

    /// Panics if `slot >= PALETTE_SIZE`.
    pub fn lock(mut self, slot: usize) -> Self {
        self.0[slot] = true;
        self
    }

    /// Panics if `slot >= PALETTE_SIZE`.
    pub fn unlock(mut self, slot: usize) -> Self {
        self.0[slot] = false;
        self
    }

    /// Flip the lock of `slot` in place.
    pub fn toggle(&mut self, slot: usize) { self.0[slot] = !self.0[slot] }

    pub fn is_locked(&self, slot: usize) -> bool { self.0[slot] }

    /// Number of locked slots.
    pub fn count(&self) -> usize { self.0.iter().filter(|&&l| l).count() }

    #[inline]
    pub fn as_slice(&self) -> &[bool] { &self.0 }
}

impl From<[bool; PALETTE_SIZE]> for LockMask {
    fn from(locks: [bool; PALETTE_SIZE]) -> Self { LockMask(locks) }
}


/// Where padding draws the color it jitters when a rule yields fewer
/// than [`PALETTE_SIZE`] colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadSampling {
    /// Uniformly among the colors accumulated so far.
    #[default]
    Accumulated,
    /// Legacy quirk: the index bound is the length of the caller's
    /// existing palette (when given) rather than of the accumulated
    /// list.  Indices past the end wrap around.
    LegacyLockedBound,
}

/// Settings of a [`crate::HarmonyGenerator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorOptions {
    /// Formula of the HSL → RGB conversion.
    pub hsl_formula: HslFormula,
    /// Sampling of the padding step.
    pub pad_sampling: PadSampling,
    /// When set, unlocked slots closer than this perceptual distance
    /// to another slot are re-jittered (up to 50 attempts each).
    pub distinct_threshold: Option<f64>,
    /// Variance used by [`crate::generate`] and
    /// [`crate::HarmonyGenerator::regenerate`].
    pub random_factor: f64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            hsl_formula: HslFormula::Legacy,
            pad_sampling: PadSampling::Accumulated,
            distinct_threshold: None,
            random_factor: DEFAULT_RANDOM_FACTOR,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hsl_formula(mut self, formula: HslFormula) -> Self {
        self.hsl_formula = formula;
        self
    }

    pub fn pad_sampling(mut self, sampling: PadSampling) -> Self {
        self.pad_sampling = sampling;
        self
    }

    pub fn distinct_threshold(mut self, threshold: f64) -> Self {
        self.distinct_threshold = Some(threshold);
        self
    }

    pub fn random_factor(mut self, factor: f64) -> Self {
        self.random_factor = factor;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmony_names_round_trip() {
        for h in HarmonyType::ALL {
            assert_eq!(h.to_string().parse::<HarmonyType>(), Ok(h));
        }
        assert_eq!("Split_Complementary".parse::<HarmonyType>(),
                   Ok(HarmonyType::SplitComplementary));
        assert_eq!("pentadic".parse::<HarmonyType>(),
                   Err(ColorParseError::UnknownHarmony("pentadic".into())));
    }

    #[test]
    fn lock_mask() {
        let mut m = LockMask::new().lock(0).lock(3);
        assert!(m.is_locked(0) && !m.is_locked(1));
        assert_eq!(m.count(), 2);
        m.toggle(0);
        m.toggle(4);
        assert_eq!(m.as_slice(), &[false, false, false, true, true]);
        assert_eq!(LockMask::all().unlock(2).count(), 4);
    }

    #[test]
    fn options_builder() {
        let o = GeneratorOptions::new()
            .hsl_formula(HslFormula::Standard)
            .distinct_threshold(18.)
            .random_factor(0.3);
        assert_eq!(o.hsl_formula, HslFormula::Standard);
        assert_eq!(o.pad_sampling, PadSampling::Accumulated);
        assert_eq!(o.distinct_threshold, Some(18.));
        assert_eq!(o.random_factor, 0.3);
    }
}
