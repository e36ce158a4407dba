//! Color representation with WCAG contrast calculations.

use serde::{Deserialize, Serialize};

/// RGBA color with components in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(
                f32::from(channel(0..2)?) / 255.0,
                f32::from(channel(2..4)?) / 255.0,
                f32::from(channel(4..6)?) / 255.0,
            )),
            8 => Ok(Self::new(
                f32::from(channel(0..2)?) / 255.0,
                f32::from(channel(2..4)?) / 255.0,
                f32::from(channel(4..6)?) / 255.0,
                f32::from(channel(6..8)?) / 255.0,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// Calculate relative luminance per WCAG 2.1.
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    #[must_use]
    pub fn relative_luminance(&self) -> f32 {
        let r = Self::linearize(self.r);
        let g = Self::linearize(self.g);
        let b = Self::linearize(self.b);

        0.2126f32.mul_add(r, 0.7152f32.mul_add(g, 0.0722 * b))
    }

    /// Calculate contrast ratio between two colors per WCAG 2.1.
    ///
    /// Returns a value between 1.0 (no contrast) and 21.0 (maximum contrast).
    ///
    /// See: <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>
    #[must_use]
    pub fn contrast_ratio(&self, other: &Self) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Linear interpolation toward another color.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
            (other.a - self.a).mul_add(t, self.a),
        )
    }

    fn linearize(channel: f32) -> f32 {
        if channel <= 0.039_28 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }
}

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// String was not 6 or 8 hex digits.
    InvalidLength,
    /// A component was not valid hexadecimal.
    InvalidHex,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "hex color must be 6 or 8 digits"),
            Self::InvalidHex => write!(f, "invalid hexadecimal digit in color"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);

        let c2 = Color::from_hex("00ff00").unwrap();
        assert_eq!(c2.g, 1.0);
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert!((c.a - 0.502).abs() < 0.01); // 128/255
    }

    #[test]
    fn test_from_hex_invalid() {
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert!(Color::from_hex("nonsense").is_err());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let c = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(c.to_hex(), "#ff0000");
        assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Color::BLACK.relative_luminance(), 0.0);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.1); // WCAG max contrast is 21:1
    }

    #[test]
    fn test_lerp_endpoints() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
        assert_eq!(Color::BLACK.lerp(&Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(&Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_parse_error_display() {
        let s = ColorParseError::InvalidLength.to_string();
        assert!(s.contains("6 or 8"));
    }

    proptest! {
        #[test]
        fn prop_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
            let c = Color::new(r, g, b, a);
            prop_assert!((0.0..=1.0).contains(&c.r));
            prop_assert!((0.0..=1.0).contains(&c.g));
            prop_assert!((0.0..=1.0).contains(&c.b));
            prop_assert!((0.0..=1.0).contains(&c.a));
        }

        #[test]
        fn prop_contrast_ratio_at_least_one(
            r1 in 0.0f32..1.0, g1 in 0.0f32..1.0, b1 in 0.0f32..1.0,
            r2 in 0.0f32..1.0, g2 in 0.0f32..1.0, b2 in 0.0f32..1.0
        ) {
            let c1 = Color::rgb(r1, g1, b1);
            let c2 = Color::rgb(r2, g2, b2);
            prop_assert!(c1.contrast_ratio(&c2) >= 1.0);
            prop_assert!((c1.contrast_ratio(&c2) - c2.contrast_ratio(&c1)).abs() < 0.001);
        }
    }
}
