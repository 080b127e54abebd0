use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 3, 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Color, ColorParseError> {
        let s = hex.trim_start_matches('#');
        // the slices below are byte-indexed
        if !s.is_ascii() {
            return Err(ColorParseError::BadDigit(hex.to_string()));
        }
        let byte = |range: &str| -> Result<u8, ColorParseError> {
            u8::from_str_radix(range, 16).map_err(|_| ColorParseError::BadDigit(hex.to_string()))
        };
        match s.len() {
            3 => {
                // shorthand: each digit doubles
                let nibble = |d: &str| byte(d).map(|v| v * 16 + v);
                Ok(Color(
                    nibble(&s[0..1])?,
                    nibble(&s[1..2])?,
                    nibble(&s[2..3])?,
                    255,
                ))
            }
            6 => Ok(Color(byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?, 255)),
            8 => Ok(Color(
                byte(&s[0..2])?,
                byte(&s[2..4])?,
                byte(&s[4..6])?,
                byte(&s[6..8])?,
            )),
            n => Err(ColorParseError::BadLength(n)),
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
}
