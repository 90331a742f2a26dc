//! RGB colors and diverging color ramps.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::HeatmapError;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse "#RRGGBB" or "RRGGBB".
    pub fn from_hex(hex: &str) -> Result<Self, HeatmapError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(HeatmapError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HeatmapError::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase "#rrggbb" form used in SVG fill attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = HeatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Red-yellow-blue diverging ramp, warm to cool.
const RD_YL_BU: [Color; 11] = [
    Color::new(0xa5, 0x00, 0x26),
    Color::new(0xd7, 0x30, 0x27),
    Color::new(0xf4, 0x6d, 0x43),
    Color::new(0xfd, 0xae, 0x61),
    Color::new(0xfe, 0xe0, 0x90),
    Color::new(0xff, 0xff, 0xbf),
    Color::new(0xe0, 0xf3, 0xf8),
    Color::new(0xab, 0xd9, 0xe9),
    Color::new(0x74, 0xad, 0xd1),
    Color::new(0x45, 0x75, 0xb4),
    Color::new(0x31, 0x36, 0x95),
];

/// An ordered list of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRamp(Vec<Color>);

impl ColorRamp {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// The 11-class red-yellow-blue ramp, listed warm to cool.
    pub fn red_yellow_blue() -> Self {
        Self(RD_YL_BU.to_vec())
    }

    /// Same colors in the opposite order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::red_yellow_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::new(0, 255, 0));
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#fff").is_err());
    }

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(Color::new(0xA5, 0, 0x26).to_hex(), "#a50026");
    }

    #[test]
    fn test_reversed_ramp_starts_cool() {
        let ramp = ColorRamp::red_yellow_blue().reversed();
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp.colors()[0].to_hex(), "#313695");
        assert_eq!(ramp.colors()[10].to_hex(), "#a50026");
    }

    #[test]
    fn test_ramp_deserializes_from_hex_list() {
        let ramp: ColorRamp = serde_json::from_str(r##"["#000000", "#ffffff"]"##).unwrap();
        assert_eq!(ramp.colors(), &[Color::new(0, 0, 0), Color::new(255, 255, 255)]);
    }
}
