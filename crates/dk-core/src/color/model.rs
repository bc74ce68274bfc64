use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ToolError;

/// 24-bit sRGB color, the canonical color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in whole degrees `0..360`, saturation and lightness in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the channels into `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks the low 24 bits of `value`.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::hex_to_rgb(s)
            .ok_or_else(|| ToolError::invalid_format(format!("not a 6-digit hex color: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks() {
        let rgb = Rgb::new(0x3B, 0x82, 0xF6);
        assert_eq!(rgb.to_u32(), 0x3B82F6);
        assert_eq!(Rgb::from_u32(0x3B82F6), rgb);
        assert_eq!(Rgb::from_u32(0xFF3B82F6), rgb);
    }

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000AFF");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000AFF");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("#3b82f6".parse::<Rgb>().unwrap(), Rgb::new(59, 130, 246));
        assert!("blue".parse::<Rgb>().is_err());
    }
}
