//! The engine's color type and the HSL model harmony math is done in.

use std::fmt;

/// An sRGB color with channels in \[0, 1\].  There is no alpha.
///
/// Equality is exact equality of the channel values.  It serializes as
/// `[r, g, b]`; deserialized channels are clamped like [`Color::new`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize),
           serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

/// Hue (in degrees, \[0, 360)), saturation and lightness (in \[0, 1\]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// How [`Hsl::to_rgb`] computes the `p` term of the conversion.
///
/// `Legacy` computes `p = 2·1 − q` (it drops `l`), the formula older
/// palettes were generated with.  Chromatic colors therefore come out
/// paler than their HSL coordinates say.  `Standard` is the textbook
/// `p = 2·l − q` and round-trips with [`Color::to_hsl`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HslFormula {
    #[default]
    Legacy,
    Standard,
}

const ONE_THIRD: f64 = 1. / 3.;
const ONE_SIXTH: f64 = 1. / 6.;
const TWO_THIRDS: f64 = 2. / 3.;

impl Color {
    /// Pure red, the seed of [`crate::SortStrategy::SmoothTransitions`].
    pub const RED: Color = Color { r: 1., g: 0., b: 0. };
    pub const BLACK: Color = Color { r: 0., g: 0., b: 0. };
    pub const WHITE: Color = Color { r: 1., g: 1., b: 1. };

    /// Create a color from channels in \[0, 1\].  Values outside this
    /// range are clamped; NaN becomes 0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r: unit(r), g: unit(g), b: unit(b) }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color { r: r as f64 / 255., g: g as f64 / 255., b: b as f64 / 255. }
    }

    /// Return the channels scaled and rounded to \[0, 255\].
    pub fn to_rgb8(&self) -> [u8; 3] {
        [byte(self.r), byte(self.g), byte(self.b)]
    }

    #[inline]
    pub fn r(&self) -> f64 { self.r }
    #[inline]
    pub fn g(&self) -> f64 { self.g }
    #[inline]
    pub fn b(&self) -> f64 { self.b }

    /// Convert to HSL.  Achromatic colors get `h = 0` and `s = 0`.
    pub fn to_hsl(&self) -> Hsl {
        let Color { r, g, b } = *self;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.;
        if max == min {
            return Hsl { h: 0., s: 0., l };
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
        Hsl { h: hue_of(r, g, b, max, d), s, l }
    }

    /// The hue in degrees, in \[0, 360).  Grays have hue 0.
    pub fn hue(&self) -> f64 {
        let Color { r, g, b } = *self;
        let max = r.max(g).max(b);
        let d = max - r.min(g).min(b);
        if d == 0. { 0. } else { hue_of(r, g, b, max, d) }
    }

    /// The HSV saturation `(max − min) / max`, 0 for black.
    pub fn saturation(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        if max == 0. { return 0. }
        (max - self.r.min(self.g).min(self.b)) / max
    }

    /// Perceived brightness `0.299 r + 0.587 g + 0.114 b`, in \[0, 1\].
    pub fn luminance(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Euclidean distance in RGB space (0–1 units; multiply by 255 to
    /// get the distance between 8-bit colors).
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Weighted HSL difference on a 0–100 scale per component: hue
    /// (circular) counts twice, saturation and lightness once.
    pub fn perceptual_distance(&self, other: &Color) -> f64 {
        let c1 = self.to_hsl();
        let c2 = other.to_hsl();
        let mut dh = (c1.h - c2.h).abs();
        if dh > 180. { dh = 360. - dh }
        2. * (dh / 180. * 100.)
            + (c1.s - c2.s).abs() * 100.
            + (c1.l - c2.l).abs() * 100.
    }
}

/// Says whether [`Color::perceptual_distance`] between `c1` and `c2`
/// is below `threshold`.  Palette editors typically use 18.
pub fn are_too_similar(c1: &Color, c2: &Color, threshold: f64) -> bool {
    c1.perceptual_distance(c2) < threshold
}

/// Hue of a chromatic color, `d = max − min > 0`.
fn hue_of(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r { (g - b) / d + if g < b { 6. } else { 0. } }
            else if max == g { (b - r) / d + 2. }
            else { (r - g) / d + 4. };
    let h = 60. * h;
    if h < 0. { h + 360. }
    else if h >= 360. { h - 360. }
    else { h }
}

#[inline]
fn unit(x: f64) -> f64 {
    if x.is_nan() { 0. } else { x.clamp(0., 1.) }
}

#[inline]
fn byte(x: f64) -> u8 { (x * 255.).round() as u8 }

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self { Hsl { h, s, l } }

    /// Convert to RGB using `formula` for the `p` term.  Channels are
    /// clamped to \[0, 1\].
    pub fn to_rgb(&self, formula: HslFormula) -> Color {
        let Hsl { h, s, l } = *self;
        if s == 0. {
            return Color::new(l, l, l);
        }
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = match formula {
            HslFormula::Legacy => 2. * 1. - q,
            HslFormula::Standard => 2. * l - q,
        };
        let t = h / 360.;
        Color::new(hue_to_rgb(p, q, t + ONE_THIRD),
                   hue_to_rgb(p, q, t),
                   hue_to_rgb(p, q, t - ONE_THIRD))
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.);
    if t < ONE_SIXTH { p + (q - p) * 6. * t }
    else if t < 0.5 { q }
    else if t < TWO_THIRDS { p + (q - p) * (TWO_THIRDS - t) * 6. }
    else { p }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self { Color::new(r, g, b) }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self { [c.r, c.g, c.b] }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

    #[test]
    fn primaries_to_hsl() {
        let Hsl { h, s, l } = Color::RED.to_hsl();
        assert_eq!((h, s, l), (0., 1., 0.5));
        assert!(close(Color::new(0., 1., 0.).to_hsl().h, 120.));
        assert!(close(Color::new(0., 0., 1.).to_hsl().h, 240.));
        // Magenta is on the red branch with g < b.
        assert!(close(Color::new(1., 0., 1.).to_hsl().h, 300.));
    }

    #[test]
    fn hue_rounding_to_360_folds_to_0() {
        // g < b with a tiny gap: 6 − 1e-17 rounds to 6, that is 360°.
        let c = Color::new(1., 0., 1e-17);
        assert_eq!(c.to_hsl().h, 0.);
        assert_eq!(c.hue(), 0.);
    }

    #[test]
    fn gray_is_achromatic() {
        for x in [0., 0.25, 0.5, 1.] {
            assert_eq!(Color::new(x, x, x).to_hsl(), Hsl::new(0., 0., x));
        }
    }

    #[test]
    fn standard_round_trip() {
        let c = Color::new(0.2, 0.6, 0.9);
        let back = c.to_hsl().to_rgb(HslFormula::Standard);
        assert!(c.distance(&back) < 1e-9, "{c:?} ≉ {back:?}");
    }

    #[test]
    fn legacy_formula_pales_chromatic_colors() {
        // With `p = 2 − q`, mid red (h=0, s=0.5, l=0.5) gives q = 0.75 and
        // p = 1.25: the "dark" channels overshoot and are clamped up.
        let c = Hsl::new(0., 0.5, 0.5).to_rgb(HslFormula::Legacy);
        assert!(close(c.r(), 0.75), "{c:?}");
        assert_eq!((c.g(), c.b()), (1., 1.));
        let c = Hsl::new(0., 0.5, 0.5).to_rgb(HslFormula::Standard);
        assert!(close(c.r(), 0.75) && close(c.g(), 0.25), "{c:?}");
        // Grays do not go through `p`.
        let gray = Color::new(0.3, 0.3, 0.3);
        assert_eq!(gray.to_hsl().to_rgb(HslFormula::Legacy), gray);
    }

    #[test]
    fn new_clamps() {
        let c = Color::new(-1., 2., f64::NAN);
        assert_eq!((c.r(), c.g(), c.b()), (0., 1., 0.));
    }

    #[test]
    fn from_array_clamps() {
        let c = Color::from([f64::NAN, 1.5, -0.5]);
        assert_eq!(<[f64; 3]>::from(c), [0., 1., 0.]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_clamps() {
        let c: Color = serde_json::from_str("[2.0, 0.5, -1.0]").unwrap();
        assert_eq!(c, Color::new(1., 0.5, 0.));
        assert_eq!(serde_json::to_string(&Color::RED).unwrap(), "[1.0,0.0,0.0]");
    }

    #[test]
    fn metrics() {
        assert_eq!(Color::BLACK.saturation(), 0.);
        assert_eq!(Color::RED.saturation(), 1.);
        assert!(close(Color::WHITE.luminance(), 1.));
        assert!(close(Color::RED.distance(&Color::new(0., 0., 0.)), 1.));
    }

    #[test]
    fn perceptual_distance_is_circular() {
        let a = Hsl::new(350., 0.5, 0.5).to_rgb(HslFormula::Standard);
        let b = Hsl::new(10., 0.5, 0.5).to_rgb(HslFormula::Standard);
        let d = a.perceptual_distance(&b);
        // 20° apart → 2 · 20/180 · 100 ≈ 22.2
        assert!((d - 2. * 20. / 180. * 100.).abs() < 0.01, "{d}");
        assert!(!are_too_similar(&a, &b, 18.));
        assert!(are_too_similar(&a, &a, 18.));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::from_rgb8(255, 160, 122).to_string(), "#FFA07A");
    }
}
