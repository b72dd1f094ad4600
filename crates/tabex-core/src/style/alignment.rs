//! Text alignment types

/// Text alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    /// Horizontal alignment
    pub horizontal: HorizontalAlignment,
}

impl Alignment {
    /// Check if no alignment override is set
    pub fn is_default(&self) -> bool {
        self.horizontal == HorizontalAlignment::General
    }
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// General alignment (text left, numbers right)
    #[default]
    General,
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
}

impl HorizontalAlignment {
    /// Parse `left`, `center` or `right`, ignoring case.
    ///
    /// Anything else yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(HorizontalAlignment::Left),
            "center" => Some(HorizontalAlignment::Center),
            "right" => Some(HorizontalAlignment::Right),
            _ => None,
        }
    }

    /// The OOXML attribute value, or `None` for general alignment
    pub fn as_xml_str(&self) -> Option<&'static str> {
        match self {
            HorizontalAlignment::General => None,
            HorizontalAlignment::Left => Some("left"),
            HorizontalAlignment::Center => Some("center"),
            HorizontalAlignment::Right => Some("right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HorizontalAlignment::parse("left"), Some(HorizontalAlignment::Left));
        assert_eq!(HorizontalAlignment::parse("CENTER"), Some(HorizontalAlignment::Center));
        assert_eq!(HorizontalAlignment::parse("Right"), Some(HorizontalAlignment::Right));
        assert_eq!(HorizontalAlignment::parse("justify"), None);
        assert_eq!(HorizontalAlignment::parse(""), None);
    }

    #[test]
    fn test_xml_str() {
        assert_eq!(HorizontalAlignment::General.as_xml_str(), None);
        assert_eq!(HorizontalAlignment::Center.as_xml_str(), Some("center"));
    }
}
