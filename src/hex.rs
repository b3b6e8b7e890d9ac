//! Hex codes and color names: the string boundary of the engine.
//!
//! Accepted forms, with or without the leading `#`: `RGB`, `ARGB`,
//! `RRGGBB` and `AARRGGBB`.  Alpha digits are checked and dropped.
//! Names from a small table (case-insensitive) are accepted as well.

use std::collections::HashMap;
use std::str::FromStr;
use lazy_static::lazy_static;
use crate::{Color, ColorParseError};

lazy_static! {
    static ref NAMED: HashMap<&'static str, Color> = {
        let table: [(&'static str, [u8; 3]); 17] = [
            ("black", [0, 0, 0]),
            ("white", [255, 255, 255]),
            ("gray", [128, 128, 128]),
            ("red", [255, 0, 0]),
            ("orange", [255, 165, 0]),
            ("yellow", [255, 255, 0]),
            ("green", [0, 128, 0]),
            ("cyan", [0, 255, 255]),
            ("blue", [0, 0, 255]),
            ("purple", [128, 0, 128]),
            ("magenta", [255, 0, 255]),
            // Initial swatches of the palette page.
            ("lightsalmon", [255, 160, 122]),
            ("skyblue", [135, 206, 235]),
            ("mediumseagreen", [60, 179, 113]),
            ("goldenrod", [218, 165, 32]),
            ("mediumorchid", [186, 85, 211]),
            ("grey", [128, 128, 128]),
        ];
        table.iter()
            .map(|&(name, [r, g, b])| (name, Color::from_rgb8(r, g, b)))
            .collect()
    };
}

/// Look up a named color, ignoring ASCII case.
pub fn named(name: &str) -> Option<Color> {
    NAMED.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Parse a hex code or a color name.
///
/// # Example
///
/// ```
/// use color_harmony::{hex, Color};
/// assert_eq!(hex::parse("#FFA07A"), Ok(Color::from_rgb8(255, 160, 122)));
/// assert_eq!(hex::parse("ff0000"), Ok(Color::RED));
/// assert_eq!(hex::parse("LightSalmon"), hex::parse("#ffa07a"));
/// ```
pub fn parse(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.is_empty() { return Err(ColorParseError::Empty) }
    match s.strip_prefix('#') {
        Some(digits) => parse_hex(digits),
        None => match named(s) {
            Some(c) => Ok(c),
            None if s.bytes().all(|b| b.is_ascii_alphanumeric())
                && !s.bytes().all(|b| b.is_ascii_hexdigit()) =>
                Err(ColorParseError::UnknownName(s.to_string())),
            None => parse_hex(s),
        }
    }
}

fn nibble(c: char) -> Result<u8, ColorParseError> {
    c.to_digit(16).map(|d| d as u8).ok_or(ColorParseError::InvalidDigit(c))
}

fn parse_hex(digits: &str) -> Result<Color, ColorParseError> {
    let n: Vec<u8> = digits.chars().map(nibble).collect::<Result<_, _>>()?;
    // Drop the alpha nibbles in front.
    let [r, g, b] = match n.len() {
        3 | 4 => {
            let n = &n[n.len() - 3 ..];
            [n[0] * 17, n[1] * 17, n[2] * 17]
        }
        6 | 8 => {
            let n = &n[n.len() - 6 ..];
            [n[0] << 4 | n[1], n[2] << 4 | n[3], n[4] << 4 | n[5]]
        }
        len => return Err(ColorParseError::InvalidLength(len)),
    };
    Ok(Color::from_rgb8(r, g, b))
}

impl Color {
    /// Format as `#RRGGBB` (uppercase).
    pub fn to_rgb_hex(&self) -> String { self.to_string() }

    /// Format as `#AARRGGBB` with an opaque alpha, the form palettes
    /// are stored in.
    pub fn to_argb_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#FF{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse(s) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        let salmon = Color::from_rgb8(255, 160, 122);
        assert_eq!(parse("#FFA07A"), Ok(salmon));
        assert_eq!(parse("#ffa07a"), Ok(salmon));
        assert_eq!(parse("#FFFFA07A"), Ok(salmon));
        assert_eq!(parse("#80FFA07A"), Ok(salmon)); // alpha dropped
        assert_eq!(parse("#f00"), Ok(Color::RED));
        assert_eq!(parse("#8f00"), Ok(Color::RED));
        assert_eq!(parse("  00FF00 "), Ok(Color::new(0., 1., 0.)));
    }

    #[test]
    fn errors() {
        assert_eq!(parse(""), Err(ColorParseError::Empty));
        assert_eq!(parse("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(parse("#12G456"), Err(ColorParseError::InvalidDigit('G')));
        assert_eq!(parse("chartreuse"),
                   Err(ColorParseError::UnknownName("chartreuse".into())));
    }

    #[test]
    fn names() {
        assert_eq!(parse("Goldenrod"), parse("#DAA520"));
        assert_eq!(named("GREY"), named("gray"));
        assert_eq!(named("nope"), None);
    }

    #[test]
    fn formatting() {
        let c: Color = "#3cb371".parse().unwrap();
        assert_eq!(c.to_rgb_hex(), "#3CB371");
        assert_eq!(c.to_argb_hex(), "#FF3CB371");
        assert_eq!(parse(&c.to_argb_hex()), Ok(c));
    }
}
