//! Color representation

use std::fmt;

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "80FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Convert to ARGB hex string (8 characters, used by XLSX)
    pub fn to_argb_hex(&self) -> String {
        match self {
            Color::Auto => "FF000000".to_string(),
            Color::Rgb { r, g, b } => format!("FF{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => format!("{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            _ => write!(f, "#{}", self.to_argb_hex()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("ffffff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("80FF0000"), Some(Color::argb(0x80, 255, 0, 0)));
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("GG0000"), None);
        assert_eq!(Color::from_hex("+F0000"), None);
        assert_eq!(Color::from_hex("ééé"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn test_to_argb_hex() {
        assert_eq!(Color::RED.to_argb_hex(), "FFFF0000");
        assert_eq!(Color::argb(0x80, 0x12, 0x34, 0x56).to_argb_hex(), "80123456");
        assert_eq!(Color::Auto.to_argb_hex(), "FF000000");
    }
}
