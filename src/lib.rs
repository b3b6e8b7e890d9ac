//! Color harmony palettes and palette sorting.
//!
//! - [`HarmonyGenerator`] derives a five-color [`Palette`] from a
//!   random base color and a [`HarmonyType`], keeping the slots set in
//!   a [`LockMask`] across regenerations.
//! - [`sort`] reorders any list of colors by a [`SortStrategy`].
//!
//! Colors are [`Color`]s with channels in \[0, 1\].  The [`RGBColor`]
//! trait converts them from and to the pixel types of the [`rgb`]
//! crate, and [`hex`] handles `#RRGGBB`/`#AARRGGBB` strings.  Nothing
//! here does I/O; randomness comes from a caller-provided
//! [`RandomSource`] (any [`rand::Rng`]).
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use color_harmony::{HarmonyGenerator, HarmonyType, LockMask, SortStrategy};
//! let mut rng = StdRng::seed_from_u64(1);
//! let gen = HarmonyGenerator::new();
//! let palette = gen.generate(HarmonyType::SplitComplementary, 0.1,
//!                            None, None, &mut rng);
//! let locks = LockMask::new().lock(2);
//! let next = gen.regenerate(HarmonyType::SplitComplementary, &palette,
//!                           &locks, &mut rng);
//! assert_eq!(next[2], palette[2]);
//! let shown = SortStrategy::CoolorsStyle.sort(next.as_slice().to_vec());
//! assert_eq!(shown.len(), 5);
//! ```

use rgb::{RGB, RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod color;
mod error;
mod harmony;
pub mod hex;
mod random;
pub mod sort;

pub use color::{are_too_similar, Color, Hsl, HslFormula};
pub use error::ColorParseError;
pub use harmony::{generate, GeneratorOptions, HarmonyGenerator, HarmonyType,
                  LockMask, PadSampling, Palette, DEFAULT_RANDOM_FACTOR,
                  PALETTE_SIZE};
pub use random::RandomSource;
pub use sort::{sort, SortStrategy};

/// Specifies the conversions a RGB color encoding must provide to be
/// generated or sorted.
pub trait RGBColor: Sized {
    /// Return the color with channels in \[0, 1\].
    fn to_color(&self) -> Color;

    /// Create an opaque color of this encoding.
    fn from_color(c: Color) -> Self;

    /// Convert the color to grayscale (by luminance).
    fn to_gray(&self) -> Self {
        let x = self.to_color().luminance();
        Self::from_color(Color::new(x, x, x))
    }
}

impl RGBColor for Color {
    #[inline]
    fn to_color(&self) -> Color { *self }

    #[inline]
    fn from_color(c: Color) -> Self { c }
}

impl RGBColor for RGB<f64> {
    /// Channels are in \[0, 255\].
    #[inline]
    fn to_color(&self) -> Color {
        Color::new(self.r / 255., self.g / 255., self.b / 255.)
    }

    #[inline]
    fn from_color(c: Color) -> Self {
        RGB { r: 255. * c.r(), g: 255. * c.g(), b: 255. * c.b() }
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_color(&self) -> Color { Color::from_rgb8(self.r, self.g, self.b) }

    #[inline]
    fn from_color(c: Color) -> Self {
        let [r, g, b] = c.to_rgb8();
        RGB8 { r, g, b }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_color(&self) -> Color {
        Color::new(self.r as f64 / 65535., self.g as f64 / 65535.,
                   self.b as f64 / 65535.)
    }

    #[inline]
    fn from_color(c: Color) -> Self {
        let word = |x: f64| (x * 65535.).round() as u16;
        RGB16 { r: word(c.r()), g: word(c.g()), b: word(c.b()) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_color(&self) -> Color { Color::from_rgb8(self.r, self.g, self.b) }

    #[inline]
    fn from_color(c: Color) -> Self {
        let [r, g, b] = c.to_rgb8();
        RGBA8 { r, g, b, a: 255 }
    }

    fn to_gray(&self) -> Self {
        let RGB8 { r, g, b } = RGB8 { r: self.r, g: self.g, b: self.b }.to_gray();
        RGBA8 { r, g, b, a: self.a }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_color(&self) -> Color {
        RGB16 { r: self.r, g: self.g, b: self.b }.to_color()
    }

    #[inline]
    fn from_color(c: Color) -> Self {
        let RGB16 { r, g, b } = RGB16::from_color(c);
        RGBA16 { r, g, b, a: 65535 }
    }

    fn to_gray(&self) -> Self {
        let RGB16 { r, g, b } = RGB16 { r: self.r, g: self.g, b: self.b }.to_gray();
        RGBA16 { r, g, b, a: self.a }
    }
}

impl RGBColor for RGBA<f64> {
    /// Channels are in \[0, 255\]; alpha is ignored.
    #[inline]
    fn to_color(&self) -> Color {
        Color::new(self.r / 255., self.g / 255., self.b / 255.)
    }

    #[inline]
    fn from_color(c: Color) -> Self {
        RGBA { r: 255. * c.r(), g: 255. * c.g(), b: 255. * c.b(), a: 255. }
    }

    fn to_gray(&self) -> Self {
        let x = 255. * self.to_color().luminance();
        RGBA { r: x, g: x, b: x, a: self.a }
    }
}
