use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a textual color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is not of the form `#rrggbb`
    #[error("Expected a '#' followed by 6 hex digits, got {0:?}")]
    MalformedHex(String),

    /// A channel pair contained a non-hexadecimal character
    #[error("Invalid hex digit in color channel {0:?}")]
    InvalidDigit(String),
}

/// An RGBA color with 8 bits per channel.
///
/// Equality is exact per-channel comparison, alpha included — two colors
/// differing only in alpha are different colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::from_channels(0, 0, 0, 0);

    /// Create a color from explicit channel values
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a `#rrggbb` hex string into a fully opaque color.
    ///
    /// The input must be exactly a `#` followed by 6 hex digits; anything
    /// else is rejected rather than silently mapped to a default.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MalformedHex(s.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::MalformedHex(s.to_string()));
        }

        // from_str_radix tolerates a leading '+', which is not a hex digit
        let channel = |pair: &str| {
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidDigit(pair.to_string()));
            }
            u8::from_str_radix(pair, 16)
                .map_err(|_| ColorParseError::InvalidDigit(pair.to_string()))
        };

        Ok(Self {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
            a: 255,
        })
    }

    /// Format the RGB channels as a `#rrggbb` string. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_preserves_rgb() {
        let color = Color::rgb(0x12, 0xab, 0xef);
        assert_eq!(Color::from_hex(&color.to_hex()), Ok(color));
    }

    #[test]
    fn parse_forces_opaque_alpha() {
        let color = Color::from_hex("#000000").unwrap();
        assert_eq!(color.a, 255);
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn to_hex_drops_alpha() {
        let translucent = Color::from_channels(0xff, 0x00, 0x00, 128);
        assert_eq!(translucent.to_hex(), "#ff0000");
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        for bad in ["", "#", "ffffff", "#fff", "#fffffff", "#ggg000", "#ff ff0", "#+f0000"] {
            assert!(Color::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn alpha_participates_in_equality() {
        let opaque = Color::rgb(10, 20, 30);
        let faded = Color::from_channels(10, 20, 30, 254);
        assert_ne!(opaque, faded);
    }
}
