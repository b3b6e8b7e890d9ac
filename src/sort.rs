//! Reordering of color lists for display.
//!
//! Every strategy is a permutation: colors are neither added, dropped
//! nor altered, and the caller's values are handed back untouched (the
//! metrics are computed on their [`Color`] view).  Comparison sorts
//! are stable.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use crate::{Color, ColorParseError, RGBColor};

/// Saturation below which a color counts as a neutral.
pub const NEUTRAL_SATURATION: f64 = 0.1;

/// Width, in degrees, of the hue families of [`SortStrategy::CoolorsStyle`].
pub const HUE_FAMILY_WIDTH: f64 = 30.;

/// How to order a list of colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortStrategy {
    /// Keep the input order.
    #[default]
    None,
    /// Rainbow order, by ascending hue.
    Hue,
    /// Dark to light, by ascending luminance.
    Brightness,
    /// Muted to vibrant, by ascending saturation.
    Saturation,
    /// Twelve 30° hue families in wheel order; within a family, by
    /// saturation then luminance.
    CoolorsStyle,
    /// Greedy nearest-neighbor path starting from the color closest
    /// to pure red.
    SmoothTransitions,
    /// Chromatic colors by hue (then saturation, most vivid first),
    /// followed by the neutrals from dark to light.
    Professional,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 7] = [
        Self::None,
        Self::Hue,
        Self::Brightness,
        Self::Saturation,
        Self::CoolorsStyle,
        Self::SmoothTransitions,
        Self::Professional,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hue => "hue",
            Self::Brightness => "brightness",
            Self::Saturation => "saturation",
            Self::CoolorsStyle => "coolors-style",
            Self::SmoothTransitions => "smooth-transitions",
            Self::Professional => "professional",
        }
    }

    /// Return `colors` reordered by this strategy.
    pub fn sort<C: RGBColor>(self, colors: Vec<C>) -> Vec<C> {
        match self {
            Self::None => colors,
            Self::Hue => by_hue(colors),
            Self::Brightness => by_brightness(colors),
            Self::Saturation => by_saturation(colors),
            Self::CoolorsStyle => coolors_style(colors),
            Self::SmoothTransitions => smooth_transitions(colors),
            Self::Professional => professional(colors),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|st| st.name() == t)
            .ok_or_else(|| ColorParseError::UnknownStrategy(s.to_string()))
    }
}

/// Return `colors` reordered by `strategy`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use color_harmony::{sort, SortStrategy};
/// let colors = vec![RGB8::new(0, 0, 255), RGB8::new(255, 0, 0)];
/// assert_eq!(sort(colors, SortStrategy::Hue),
///            [RGB8::new(255, 0, 0), RGB8::new(0, 0, 255)]);
/// ```
pub fn sort<C: RGBColor>(colors: Vec<C>, strategy: SortStrategy) -> Vec<C> {
    strategy.sort(colors)
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn keyed<C: RGBColor>(colors: Vec<C>) -> Vec<(Color, C)> {
    colors.into_iter().map(|c| (c.to_color(), c)).collect()
}

fn sorted_by<C, F>(colors: Vec<C>, mut cmp: F) -> Vec<C>
where C: RGBColor, F: FnMut(&Color, &Color) -> Ordering {
    let mut colors = keyed(colors);
    colors.sort_by(|(a, _), (b, _)| cmp(a, b));
    colors.into_iter().map(|(_, c)| c).collect()
}

pub fn by_hue<C: RGBColor>(colors: Vec<C>) -> Vec<C> {
    sorted_by(colors, |a, b| cmp_f64(a.hue(), b.hue()))
}

pub fn by_brightness<C: RGBColor>(colors: Vec<C>) -> Vec<C> {
    sorted_by(colors, |a, b| cmp_f64(a.luminance(), b.luminance()))
}

pub fn by_saturation<C: RGBColor>(colors: Vec<C>) -> Vec<C> {
    sorted_by(colors, |a, b| cmp_f64(a.saturation(), b.saturation()))
}

/// Group by hue family (`⌊hue / 30⌋`), families in wheel order, each
/// family sorted by saturation then luminance.
pub fn coolors_style<C: RGBColor>(colors: Vec<C>) -> Vec<C> {
    if colors.len() <= 1 { return colors }
    let mut families: BTreeMap<u32, Vec<(Color, C)>> = BTreeMap::new();
    for (color, c) in keyed(colors) {
        let family = (color.hue() / HUE_FAMILY_WIDTH).floor() as u32;
        families.entry(family).or_default().push((color, c));
    }
    families.into_values()
        .flat_map(|mut family| {
            family.sort_by(|(a, _), (b, _)| {
                cmp_f64(a.saturation(), b.saturation())
                    .then_with(|| cmp_f64(a.luminance(), b.luminance()))
            });
            family.into_iter().map(|(_, c)| c)
        })
        .collect()
}

/// Start from the color closest to pure red and always jump to the
/// closest remaining color (Euclidean RGB distance).  Ties go to the
/// earliest color of the input.  Lists of at most 2 colors are
/// returned as they are.
pub fn smooth_transitions<C: RGBColor>(colors: Vec<C>) -> Vec<C> {
    if colors.len() <= 2 { return colors }
    let mut remaining = keyed(colors);
    let mut path = Vec::with_capacity(remaining.len());
    let mut current = Color::RED;
    while !remaining.is_empty() {
        let next = remaining.iter()
            .enumerate()
            .min_by(|(_, (a, _)), (_, (b, _))| {
                cmp_f64(current.distance(a), current.distance(b))
            })
            .map(|(i, _)| i)
            .unwrap_or(0);
        let (color, c) = remaining.remove(next);
        current = color;
        path.push(c);
    }
    path
}

/// Chromatic colors (saturation ≥ 0.1) by ascending hue then
/// descending saturation, followed by the neutrals by ascending
/// luminance.
pub fn professional<C: RGBColor>(colors: Vec<C>) -> Vec<C> {
    let (mut neutrals, mut chromatic): (Vec<_>, Vec<_>) = keyed(colors)
        .into_iter()
        .partition(|(color, _)| color.saturation() < NEUTRAL_SATURATION);
    chromatic.sort_by(|(a, _), (b, _)| {
        cmp_f64(a.hue(), b.hue())
            .then_with(|| cmp_f64(b.saturation(), a.saturation()))
    });
    neutrals.sort_by(|(a, _), (b, _)| cmp_f64(a.luminance(), b.luminance()));
    chromatic.into_iter().chain(neutrals).map(|(_, c)| c).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::{RGB8, RGBA8};

    fn rgb(r: u8, g: u8, b: u8) -> Color { Color::from_rgb8(r, g, b) }

    #[test]
    fn hue_is_a_rainbow() {
        let blue = rgb(0, 0, 255);
        let green = rgb(0, 255, 0);
        let red = rgb(255, 0, 0);
        assert_eq!(by_hue(vec![blue, green, red]), [red, green, blue]);
    }

    #[test]
    fn hue_sort_is_stable() {
        let grays = vec![rgb(200, 200, 200), rgb(10, 10, 10), rgb(90, 90, 90)];
        assert_eq!(by_hue(grays.clone()), grays);
    }

    #[test]
    fn brightness_dark_to_light() {
        let colors = vec![Color::WHITE, rgb(0, 0, 255), Color::BLACK,
                          rgb(0, 255, 0)];
        assert_eq!(by_brightness(colors),
                   [Color::BLACK, rgb(0, 0, 255), rgb(0, 255, 0), Color::WHITE]);
    }

    #[test]
    fn saturation_muted_to_vibrant() {
        let colors = vec![rgb(255, 0, 0), rgb(128, 128, 128), rgb(255, 128, 128)];
        assert_eq!(by_saturation(colors),
                   [rgb(128, 128, 128), rgb(255, 128, 128), rgb(255, 0, 0)]);
    }

    #[test]
    fn coolors_groups_hue_families() {
        let red = rgb(255, 0, 0); // 0°
        let orange = rgb(255, 128, 0); // ≈ 30°, next family
        let blue = Color::new(0., 1. / 3., 1.); // 220°
        assert_eq!(coolors_style(vec![blue, orange, red]), [red, orange, blue]);
    }

    #[test]
    fn coolors_within_family() {
        // All in the reds family: grays by luminance, then by saturation.
        let vivid = rgb(255, 0, 0);
        let muted = rgb(255, 128, 128);
        let gray = rgb(128, 128, 128);
        let colors = vec![vivid, Color::WHITE, muted, Color::BLACK, gray];
        assert_eq!(coolors_style(colors),
                   [Color::BLACK, gray, Color::WHITE, muted, vivid]);
    }

    #[test]
    fn smooth_starts_at_red() {
        let red = rgb(255, 0, 0);
        let colors = vec![rgb(0, 0, 255), rgb(0, 255, 0), red];
        assert_eq!(smooth_transitions(colors)[0], red);
    }

    #[test]
    fn smooth_follows_nearest() {
        let colors = vec![rgb(0, 0, 250), rgb(240, 10, 10), rgb(0, 0, 200),
                          rgb(200, 40, 40)];
        assert_eq!(smooth_transitions(colors),
                   [rgb(240, 10, 10), rgb(200, 40, 40), rgb(0, 0, 200),
                    rgb(0, 0, 250)]);
    }

    #[test]
    fn smooth_ties_go_to_input_order() {
        // Alpha is ignored by the metrics, so these are exact ties.
        let red = |a| RGBA8 { r: 255, g: 0, b: 0, a };
        let green = |a| RGBA8 { r: 0, g: 255, b: 0, a };
        let colors = vec![green(7), red(2), red(1), green(9)];
        assert_eq!(smooth_transitions(colors),
                   [red(2), red(1), green(7), green(9)]);
    }

    #[test]
    fn smooth_keeps_short_lists() {
        let two = vec![rgb(0, 0, 255), rgb(255, 0, 0)];
        assert_eq!(smooth_transitions(two.clone()), two);
    }

    #[test]
    fn professional_puts_neutrals_last() {
        let gray = rgb(128, 128, 128);
        let white = Color::WHITE;
        let blue = rgb(0, 0, 255);
        let red = rgb(255, 0, 0);
        let pale_red = rgb(255, 128, 128);
        assert_eq!(professional(vec![white, blue, gray, pale_red, red]),
                   [red, pale_red, blue, gray, white]);
    }

    #[test]
    fn none_is_identity() {
        let colors = vec![Color::WHITE, Color::BLACK, Color::RED];
        assert_eq!(SortStrategy::None.sort(colors.clone()), colors);
    }

    #[test]
    fn pixel_types_come_back_unchanged() {
        let colors = vec![RGB8::new(3, 7, 250), RGB8::new(251, 2, 1)];
        assert_eq!(sort(colors, SortStrategy::Hue),
                   [RGB8::new(251, 2, 1), RGB8::new(3, 7, 250)]);
    }

    #[test]
    fn names_round_trip() {
        for s in SortStrategy::ALL {
            assert_eq!(s.to_string().parse::<SortStrategy>(), Ok(s));
        }
        assert_eq!("Coolors_Style".parse::<SortStrategy>(),
                   Ok(SortStrategy::CoolorsStyle));
        assert!("zigzag".parse::<SortStrategy>().is_err());
    }
}
