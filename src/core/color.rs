/// Color representation for PDF shading (DeviceRGB)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,  // 0.0 to 1.0
    pub g: f64,
    pub b: f64,
}

/// Clamp a channel to [0, 1]. Anything not above zero, NaN included, becomes 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Color {
    /// Create an RGB color, clamping every channel to [0, 1]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r: clamp_unit(r), g: clamp_unit(g), b: clamp_unit(b) }
    }

    // Common colors
    pub fn black() -> Self { Color::rgb(0.0, 0.0, 0.0) }
    pub fn white() -> Self { Color::rgb(1.0, 1.0, 1.0) }
    pub fn red() -> Self { Color::rgb(1.0, 0.0, 0.0) }
    pub fn green() -> Self { Color::rgb(0.0, 1.0, 0.0) }
    pub fn blue() -> Self { Color::rgb(0.0, 0.0, 1.0) }
    pub fn gray(intensity: f64) -> Self { Color::rgb(intensity, intensity, intensity) }

    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for [f64; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped() {
        let c = Color::rgb(1.5, -0.2, 0.25);
        assert_eq!(c.to_array(), [1.0, 0.0, 0.25]);
        assert_eq!(Color::rgb(f64::NAN, 0.0, 0.0).r, 0.0);
    }

    #[test]
    fn test_deserialize_clamps() {
        let c: Color = serde_json::from_str("[2.0, 0.5, -1.0]").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.5, 0.0));
        assert_eq!(serde_json::to_string(&Color::blue()).unwrap(), "[0.0,0.0,1.0]");
    }
}
