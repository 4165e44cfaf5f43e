//! Output file extensions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Extension of a generated component file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    /// Plain JavaScript with JSX.
    Jsx,
    /// TypeScript with JSX.
    Tsx,
}

impl Extension {
    /// The extension including its leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Jsx => ".jsx",
            Extension::Tsx => ".tsx",
        }
    }

    /// Whether components with this extension carry static types.
    pub fn is_typed(&self) -> bool {
        matches!(self, Extension::Tsx)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Extension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "jsx" => Ok(Extension::Jsx),
            "tsx" => Ok(Extension::Tsx),
            _ => Err(format!("unknown extension '{}', expected 'jsx' or 'tsx'", s)),
        }
    }
}
