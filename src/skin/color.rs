//! RGB color values for skin cells and palette entries
//!
//! Colors are exchanged in canonical `#rrggbb` form. All arithmetic (jitter,
//! color picking) works on the three 8-bit channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SkinError;

/// Opaque 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, hex digits are case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self, SkinError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SkinError::InvalidColor(s.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| SkinError::InvalidColor(s.to_string()))?;
        Ok(Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    /// Canonical lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Add the same offset to every channel, clamping to 0..=255
    pub fn shifted(self, delta: i16) -> Self {
        let shift = |c: u8| (c as i32 + delta as i32).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Fully opaque RGBA bytes
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Replace one channel (0 = R, 1 = G, 2 = B)
    pub fn with_channel(mut self, channel: usize, value: u8) -> Self {
        match channel {
            0 => self.r = value,
            1 => self.g = value,
            _ => self.b = value,
        }
        self
    }

    pub fn channel(&self, channel: usize) -> u8 {
        match channel {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = SkinError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}
