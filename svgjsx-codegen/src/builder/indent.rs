//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (2, 4 or 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, used for converted markup.
    pub const MARKUP: Self = Self::Spaces(2);

    /// 4-space indentation, used for component modules.
    pub const COMPONENT: Self = Self::Spaces(4);

    /// Indentation for a configured width, where `0` selects tabs.
    ///
    /// Returns `None` for widths other than 0, 2, 4 or 8.
    pub fn from_width(width: u8) -> Option<Self> {
        match width {
            0 => Some(Self::Tab),
            2 | 4 | 8 => Some(Self::Spaces(width)),
            _ => None,
        }
    }

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(8) => "        ",
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::COMPONENT
    }
}
