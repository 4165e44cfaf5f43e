//! Export statement builder.

use crate::{CodeFragment, Renderable};

/// Builder for ES module export statements.
#[derive(Debug, Clone, Default)]
pub struct Export {
    default: Option<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    /// Export as default (`export default Foo;`).
    pub fn default_item(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.default
            .iter()
            .map(|def| CodeFragment::Line(format!("export default {};", def)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_default() {
        let e = Export::new().default_item("Icon");
        assert_eq!(
            e.to_fragments(),
            vec![CodeFragment::line("export default Icon;")]
        );
    }

    #[test]
    fn test_empty_export() {
        assert!(Export::new().to_fragments().is_empty());
    }
}
