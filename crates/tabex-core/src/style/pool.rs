//! Style pool for deduplication

use super::Style;
use ahash::AHashMap;

/// Handle to a style interned in a [`StylePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StyleId(u32);

impl StyleId {
    /// The workbook default style (always index 0)
    pub const DEFAULT: StyleId = StyleId(0);

    /// Index of the style within its pool
    pub fn index(self) -> u32 {
        self.0
    }

    /// Check if this is the default style
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

/// Style pool for deduplicating styles
///
/// Every cell of a styled range shares one pool entry, so a header style
/// applied to 50 columns is stored once.
#[derive(Debug)]
pub struct StylePool {
    /// All unique styles (index 0 is default)
    styles: Vec<Style>,
    index_map: AHashMap<Style, StyleId>,
}

impl StylePool {
    /// Create a new style pool with default style at index 0
    pub fn new() -> Self {
        let mut index_map = AHashMap::with_capacity(8);
        index_map.insert(Style::default(), StyleId::DEFAULT);

        Self {
            styles: vec![Style::default()],
            index_map,
        }
    }

    /// Get or create a style, returning its handle
    pub fn get_or_insert(&mut self, style: Style) -> StyleId {
        if let Some(&id) = self.index_map.get(&style) {
            return id;
        }

        let id = StyleId(self.styles.len() as u32);
        self.styles.push(style.clone());
        self.index_map.insert(style, id);
        id
    }

    /// Get a style by handle
    pub fn get(&self, id: StyleId) -> Option<&Style> {
        self.styles.get(id.0 as usize)
    }

    /// Get the number of styles, including the default
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool holds only the default style
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Iterate over all styles with their handles, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &Style)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, s)| (StyleId(i as u32), s))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
