use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A 32-bit color with 8-bit alpha, red, green and blue channels.
///
/// The packed form matches the platform-native ARGB word layout: alpha in
/// bits 24..=31, red in 16..=23, green in 8..=15, blue in 0..=7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: a={:02X}, r={:02X}, g={:02X}, b={:02X}}}", self.a, self.r, self.g, self.b)
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::argb(0, 0, 0, 0);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color { a, r, g, b }
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 0xFF, r, g, b }
    }

    /// Pack into a single ARGB word.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from a single ARGB word.
    pub const fn from_argb(word: u32) -> Self {
        Color {
            a: (word >> 24) as u8,
            r: (word >> 16) as u8,
            g: (word >> 8) as u8,
            b: word as u8,
        }
    }

    pub fn get_argb(&self) -> (u8, u8, u8, u8) {
        (self.a, self.r, self.g, self.b)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::rgb(value.0, value.1, value.2)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Color::argb(value.0, value.1, value.2, value.3)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::argb(value[0], value[1], value[2], value[3])
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::from_argb(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> u32 {
        value.to_argb()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn test_argb_packing() {
        let color = Color::argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(0x1234_5678, color.to_argb());
        assert_eq!(color, Color::from_argb(0x1234_5678));
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(0xFF00_0000, Color::argb(0xFF, 0, 0, 0).to_argb());
        assert_eq!(0x00FF_0000, Color::argb(0, 0xFF, 0, 0).to_argb());
        assert_eq!(0x0000_FF00, Color::argb(0, 0, 0xFF, 0).to_argb());
        assert_eq!(0x0000_00FF, Color::argb(0, 0, 0, 0xFF).to_argb());
    }

    #[test]
    fn test_constants() {
        assert_eq!(0xFFFF_FFFF, Color::WHITE.to_argb());
        assert_eq!(0, Color::TRANSPARENT.to_argb());
        assert_eq!(Color::TRANSPARENT, Color::default());
    }
}
