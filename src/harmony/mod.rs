//! Five-color palettes derived from a random base color by a
//! color-theory rule, with per-slot locking across regenerations.

use log::{debug, trace};
use crate::{are_too_similar, Color, Hsl, RandomSource};

pub(crate) mod ty;
pub use ty::{GeneratorOptions, HarmonyType, LockMask, PadSampling, Palette,
             DEFAULT_RANDOM_FACTOR, PALETTE_SIZE};

// Bounds of the saturation and lightness shifts of the harmony rules.
const SAT_MIN: f64 = 0.1;
const SAT_MAX: f64 = 0.9;
const LIGHT_MIN: f64 = 0.2;
const LIGHT_MAX: f64 = 0.8;

// Bounds of `add_random_variation`.
const JITTER_HUE: f64 = 5.;
const JITTER_SL: f64 = 0.15;
const JITTER_LIGHT_MIN: f64 = 0.1;

const MAX_DISTINCT_ATTEMPTS: u32 = 50;

const UNLOCKED: [bool; PALETTE_SIZE] = [false; PALETTE_SIZE];

/// Palette generator.  It holds no state besides its options; the
/// randomness is supplied by the caller at each call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HarmonyGenerator {
    options: GeneratorOptions,
}

impl HarmonyGenerator {
    pub fn new() -> Self { Self::default() }

    pub fn with_options(options: GeneratorOptions) -> Self {
        HarmonyGenerator { options }
    }

    pub fn options(&self) -> &GeneratorOptions { &self.options }

    /// Convert `hsl` with the configured [`crate::HslFormula`].
    #[inline]
    pub fn hsl_to_rgb(&self, hsl: Hsl) -> Color {
        hsl.to_rgb(self.options.hsl_formula)
    }

    /// A color with hue, saturation and lightness drawn uniformly from
    /// \[0, 360) × \[0, 1) × \[0, 1).
    pub fn random_color<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Color {
        let h = rng.uniform(0., 360.);
        let s = rng.next_f64();
        let l = rng.next_f64();
        self.hsl_to_rgb(Hsl::new(h, s, l))
    }

    /// Generate a palette following `harmony` from a random base color.
    ///
    /// When `existing` and `locks` are both given and both have
    /// [`PALETTE_SIZE`] elements, slot `i` keeps `existing[i]` if
    /// `locks[i]`.  Otherwise they are ignored and a fresh palette is
    /// returned.  `random_factor` scales the jitter of padded slots and
    /// is not bounded.
    ///
    /// # Example
    ///
    /// ```
    /// use color_harmony::{HarmonyGenerator, HarmonyType, LockMask};
    /// let gen = HarmonyGenerator::new();
    /// let mut rng = rand::rng();
    /// let p = gen.generate(HarmonyType::Analogous, 0.1, None, None, &mut rng);
    /// let locks = LockMask::new().lock(0).lock(3);
    /// let q = gen.generate(HarmonyType::Analogous, 0.1, Some(p.as_slice()),
    ///                      Some(locks.as_slice()), &mut rng);
    /// assert_eq!((p[0], p[3]), (q[0], q[3]));
    /// ```
    pub fn generate<R: RandomSource + ?Sized>(
        &self, harmony: HarmonyType, random_factor: f64,
        existing: Option<&[Color]>, locks: Option<&[bool]>, rng: &mut R,
    ) -> Palette {
        let base = self.random_color(rng);
        self.generate_from_base(base, harmony, random_factor,
                                existing, locks, rng)
    }

    /// Same as [`Self::generate`] with a given base color.
    pub fn generate_from_base<R: RandomSource + ?Sized>(
        &self, base: Color, harmony: HarmonyType, random_factor: f64,
        existing: Option<&[Color]>, locks: Option<&[bool]>, rng: &mut R,
    ) -> Palette {
        debug!("generating {harmony} palette from {base} \
                (random factor {random_factor})");
        let mut colors = self.harmony_colors(base, harmony, rng);
        self.fit_to_size(&mut colors, random_factor,
                         existing.map(|e| e.len()), rng);
        let mut fresh = [Color::default(); PALETTE_SIZE];
        fresh.copy_from_slice(&colors);

        let locks: &[bool] = match (existing, locks) {
            (Some(existing), Some(locks))
                if existing.len() == PALETTE_SIZE
                && locks.len() == PALETTE_SIZE => {
                    for (i, c) in fresh.iter_mut().enumerate() {
                        if locks[i] { *c = existing[i] }
                    }
                    debug!("kept {} locked slot(s)",
                           locks.iter().filter(|&&l| l).count());
                    locks
                }
            (None, None) => &UNLOCKED,
            _ => {
                debug!("ignoring mis-sized or partial lock arguments");
                &UNLOCKED
            }
        };
        if let Some(threshold) = self.options.distinct_threshold {
            self.spread_unlocked(&mut fresh, locks, threshold,
                                 random_factor, rng);
        }
        Palette::new(fresh)
    }

    /// Regenerate the unlocked slots of `previous` with the configured
    /// random factor.
    pub fn regenerate<R: RandomSource + ?Sized>(
        &self, harmony: HarmonyType, previous: &Palette, locks: &LockMask,
        rng: &mut R,
    ) -> Palette {
        self.generate(harmony, self.options.random_factor,
                      Some(previous.as_slice()), Some(locks.as_slice()), rng)
    }

    /// The colors of `harmony` around `base`, `base` first.  The list is
    /// not yet fitted to [`PALETTE_SIZE`].
    pub fn harmony_colors<R: RandomSource + ?Sized>(
        &self, base: Color, harmony: HarmonyType, rng: &mut R,
    ) -> Vec<Color> {
        let Hsl { h, s, l } = base.to_hsl();
        // A hue rotation keeping saturation and lightness.
        let at = |dh: f64| self.hsl_to_rgb(Hsl::new(wrap(h + dh), s, l));
        // A rotation with bounded saturation and lightness shifts.
        let shifted = |dh: f64, ds: f64, dl: f64| self.hsl_to_rgb(Hsl::new(
            wrap(h + dh),
            (s + ds).clamp(SAT_MIN, SAT_MAX),
            (l + dl).clamp(LIGHT_MIN, LIGHT_MAX)));
        let mut colors = vec![base];
        use HarmonyType::*;
        match harmony {
            Analogous => {
                for dh in [-60., -30., 0., 30., 60.] {
                    let s = (s + rng.uniform(-1., 1.) * 0.1)
                        .clamp(SAT_MIN, SAT_MAX);
                    // Lightness is jittered around 1, hence always close
                    // to the upper bound.
                    let l = (1. + rng.uniform(-1., 1.) * 0.1)
                        .clamp(LIGHT_MIN, LIGHT_MAX);
                    colors.push(self.hsl_to_rgb(Hsl::new(wrap(h + dh), s, l)));
                }
            }
            Complementary => colors.extend([
                base,
                at(180.),
                shifted(0., -0.2, 0.15),
                shifted(180., 0.1, -0.15),
                shifted(180., -0.1, 0.2)]),
            SplitComplementary => colors.extend([
                base,
                at(150.),
                at(210.),
                shifted(0., -0.15, 0.15),
                shifted(0., 0.15, -0.15)]),
            Triadic => colors.extend([
                at(0.),
                at(120.),
                at(240.),
                shifted(0., -0.1, 0.1),
                shifted(0., 0.1, -0.1)]),
            Square => colors.extend([
                at(0.),
                at(90.),
                at(180.),
                at(270.),
                shifted(0., -0.1, 0.1)]),
            Monochromatic => colors.extend((0 .. 5).map(|k| {
                let t = k as f64 / 4.;
                shifted(0., -0.3 + 0.6 * t, 0.1 - 0.2 * t)
            })),
            Tetradic => colors.extend([at(60.), at(180.), at(240.)]),
        }
        colors
    }

    /// Truncate `colors` to [`PALETTE_SIZE`] or pad it with jittered
    /// copies of its own colors.  `existing_len` is the length of the
    /// caller's existing palette, used by [`PadSampling::LegacyLockedBound`].
    fn fit_to_size<R: RandomSource + ?Sized>(
        &self, colors: &mut Vec<Color>, random_factor: f64,
        existing_len: Option<usize>, rng: &mut R,
    ) {
        colors.truncate(PALETTE_SIZE);
        while colors.len() < PALETTE_SIZE {
            let n = colors.len();
            let i = match self.options.pad_sampling {
                PadSampling::Accumulated => rng.index(n),
                PadSampling::LegacyLockedBound => {
                    let bound = existing_len.filter(|&b| b > 0).unwrap_or(n);
                    rng.index(bound) % n
                }
            };
            trace!("padding slot {n} from slot {i}");
            let c = self.add_random_variation(colors[i], random_factor, rng);
            colors.push(c);
        }
    }

    /// Jitter `color` in HSL: hue by up to ±5°·`random_factor`,
    /// saturation and lightness by up to ±0.15·`random_factor` (half
    /// that near their extremes).
    pub fn add_random_variation<R: RandomSource + ?Sized>(
        &self, color: Color, random_factor: f64, rng: &mut R,
    ) -> Color {
        let Hsl { h, s, l } = color.to_hsl();
        let h = wrap(h + rng.uniform(-JITTER_HUE, JITTER_HUE) * random_factor);
        let s_scale = if s > 0.7 { 0.5 } else { 1. };
        let s = (s + rng.uniform(-1., 1.) * random_factor * JITTER_SL * s_scale)
            .clamp(SAT_MIN, SAT_MAX);
        let l_scale = if l < 0.3 || l > 0.7 { 0.5 } else { 1. };
        let l = (l + rng.uniform(-1., 1.) * random_factor * JITTER_SL * l_scale)
            .clamp(JITTER_LIGHT_MIN, LIGHT_MAX);
        self.hsl_to_rgb(Hsl::new(h, s, l))
    }

    /// Re-jitter unlocked slots that are perceptually too close to
    /// another slot.  Locked slots are left as they are.
    fn spread_unlocked<R: RandomSource + ?Sized>(
        &self, colors: &mut [Color; PALETTE_SIZE], locks: &[bool],
        threshold: f64, random_factor: f64, rng: &mut R,
    ) {
        let crowded = |colors: &[Color; PALETTE_SIZE], i: usize| {
            colors.iter().enumerate()
                .any(|(j, c)| j != i && are_too_similar(&colors[i], c, threshold))
        };
        for i in 0 .. PALETTE_SIZE {
            if locks[i] { continue }
            let origin = colors[i];
            let mut attempt = 0;
            while attempt < MAX_DISTINCT_ATTEMPTS && crowded(colors, i) {
                let factor = random_factor * (1. + 0.1 * attempt as f64);
                colors[i] = self.add_random_variation(origin, factor, rng);
                attempt += 1;
            }
            if attempt > 0 {
                trace!("slot {i} re-jittered {attempt} time(s)");
            }
        }
    }
}

#[inline]
fn wrap(h: f64) -> f64 { h.rem_euclid(360.) }

/// Generate a palette with default options and the thread-local
/// random generator.  See [`HarmonyGenerator::generate`].
pub fn generate(harmony: HarmonyType, random_factor: f64,
                existing: Option<&[Color]>, locks: Option<&[bool]>) -> Palette {
    HarmonyGenerator::new().generate(harmony, random_factor, existing, locks,
                                     &mut rand::rng())
}
