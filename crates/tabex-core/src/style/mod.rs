//! Cell styling types
//!
//! A [`Style`] is the compiled, spreadsheet-ready form of a request's
//! [`CellStyle`](crate::CellStyle). Worksheets intern styles in a
//! [`StylePool`] and cells carry only the resulting [`StyleId`].

mod alignment;
mod color;
mod fill;
mod font;
mod pool;

pub use alignment::{Alignment, HorizontalAlignment};
pub use color::Color;
pub use fill::FillStyle;
pub use font::FontStyle;
pub use pool::{StyleId, StylePool};

/// Complete cell style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Text alignment
    pub alignment: Alignment,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = size;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Check whether this is the workbook default style
    pub fn is_default(&self) -> bool {
        *self == Style::default()
    }
}
