//! Color conversion helpers.
//!
//! Figma stores fill colors as floating point channels in `[0, 1]`; extracted
//! artifacts and generated styles use 8-bit channels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel sum below which a label on the swatch is drawn white.
pub const CONTRAST_THRESHOLD: u32 = 400;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0 - 255)
    pub r: u8,
    /// Green channel (0 - 255)
    pub g: u8,
    /// Blue channel (0 - 255)
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert unit-range channels to 8-bit channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_oxide::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_unit(0.2, 0.5, 0.8), Rgb::new(51, 128, 204));
    /// ```
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
    }

    /// Sum of the three channels.
    pub fn channel_sum(&self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }
}

/// CSS functional notation, e.g. `rgb(51, 128, 204)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Scale a `[0, 1]` channel to `[0, 255]`, rounding half up.
///
/// Out-of-range and NaN inputs are clamped.
pub fn unit_to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    // floor(x + 0.5) rather than round(): half-up even for negative inputs
    let scaled = (value * 255.0 + 0.5).floor();
    scaled.clamp(0.0, 255.0) as u8
}

/// Label color to draw on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    /// Light label for dark backgrounds
    White,
    /// Dark label for light backgrounds
    Black,
}

impl LabelColor {
    /// CSS color keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// Pick a readable label color for an 8-bit background.
///
/// # Examples
///
/// ```
/// use figma_oxide::color::{contrast_label, LabelColor};
///
/// assert_eq!(contrast_label(0, 0, 0), LabelColor::White);
/// assert_eq!(contrast_label(255, 255, 255), LabelColor::Black);
/// ```
pub fn contrast_label(r: u8, g: u8, b: u8) -> LabelColor {
    if Rgb::new(r, g, b).channel_sum() < CONTRAST_THRESHOLD {
        LabelColor::White
    } else {
        LabelColor::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_rounding_half_up() {
        assert_eq!(unit_to_channel(0.2), 51);
        assert_eq!(unit_to_channel(0.5), 128);
        assert_eq!(unit_to_channel(0.8), 204);
    }

    #[test]
    fn test_channel_bounds() {
        assert_eq!(unit_to_channel(0.0), 0);
        assert_eq!(unit_to_channel(1.0), 255);
        assert_eq!(unit_to_channel(1.7), 255);
        assert_eq!(unit_to_channel(-0.3), 0);
        assert_eq!(unit_to_channel(f64::NAN), 0);
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(Rgb::new(51, 128, 204).to_string(), "rgb(51, 128, 204)");
    }

    #[test]
    fn test_contrast_threshold_edges() {
        // 399 is dark enough for a white label, 400 is not
        assert_eq!(contrast_label(133, 133, 133), LabelColor::White);
        assert_eq!(contrast_label(134, 133, 133), LabelColor::Black);
        assert_eq!(contrast_label(200, 100, 100), LabelColor::Black);
    }

    #[test]
    fn test_label_css() {
        assert_eq!(LabelColor::White.as_css(), "white");
        assert_eq!(LabelColor::Black.as_css(), "black");
    }
}
