use thiserror::Error;

/// Errors of the string boundary: hex codes, color names, and the
/// names of harmony rules and sort strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),

    #[error("unknown color name {0:?}")]
    UnknownName(String),

    #[error("unknown harmony type {0:?}")]
    UnknownHarmony(String),

    #[error("unknown sort strategy {0:?}")]
    UnknownStrategy(String),
}
