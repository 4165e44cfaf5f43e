//! Import statement builder.

use crate::{CodeFragment, Renderable};

/// Builder for ES module import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        let named = format!("{{ {} }}", self.named.join(", "));

        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from \"{}\";", type_kw, def, self.from),
            (Some(def), false) => {
                format!("import {}{}, {} from \"{}\";", type_kw, def, named, self.from)
            }
            (None, false) => format!("import {}{} from \"{}\";", type_kw, named, self.from),
            (None, true) => format!("import \"{}\";", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeBuilder;

    fn build(import: &Import) -> String {
        let mut builder = CodeBuilder::component();
        builder.emit(import);
        builder.build()
    }

    #[test]
    fn test_default_import() {
        let i = Import::new("react").default("React");
        assert_eq!(build(&i), "import React from \"react\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("react").named("SVGProps").type_only();
        assert_eq!(build(&i), "import type { SVGProps } from \"react\";\n");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("react").default("React").named("memo");
        assert_eq!(build(&i), "import React, { memo } from \"react\";\n");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./icons.css");
        assert_eq!(build(&i), "import \"./icons.css\";\n");
    }
}
