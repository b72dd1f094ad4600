//! Font style types

use super::Color;

/// Default font family for new workbooks
pub const DEFAULT_FONT_NAME: &str = "Calibri";

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Font style settings
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    /// Font family name
    pub name: String,
    /// Font size in points
    pub size: f64,
    /// Bold
    pub bold: bool,
    /// Font color
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            size: DEFAULT_FONT_SIZE,
            bold: false,
            color: Color::Auto,
        }
    }
}

impl std::hash::Hash for FontStyle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.bold.hash(state);
        self.color.hash(state);
    }
}

// Sizes are validated finite before they reach a style.
impl Eq for FontStyle {}
