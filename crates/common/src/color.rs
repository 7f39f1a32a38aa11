use serde::{Deserialize, Serialize};

/// Errors from parsing a hex color string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 3 or 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// An RGB color with f32 channels in `[0, 1]`.
///
/// Controls present colors as `#rrggbb` strings; the scene stores them as
/// float channels. Round-tripping through hex quantizes each channel to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` presentation of this color.
    pub fn hex_string(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b)
        )
    }

    /// Parse a hex color string.
    ///
    /// Accepts an optional leading `#` and either 3 (`#8ac`) or 6 (`#88aacc`)
    /// hex digits, case-insensitive.
    pub fn from_hex_str(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.is_ascii() {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let bytes = match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let d = c
                        .to_digit(16)
                        .ok_or_else(|| ColorParseError::BadDigit(s.to_string()))?
                        as u8;
                    out[i] = d * 16 + d;
                }
                out
            }
            6 => {
                let mut out = [0u8; 3];
                for (i, chunk) in out.iter_mut().enumerate() {
                    *chunk = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                        .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
                }
                out
            }
            n => return Err(ColorParseError::BadLength(n)),
        };
        Ok(Self::new(
            f32::from(bytes[0]) / 255.0,
            f32::from(bytes[1]) / 255.0,
            f32::from(bytes[2]) / 255.0,
        ))
    }
}

fn channel_to_byte(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
