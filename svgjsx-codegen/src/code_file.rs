//! Structured module generation.

use crate::{
    CodeBuilder, CodeFragment, Indent, Renderable,
    ast::{Export, Import},
};

/// A module organized into imports, body, and exports.
///
/// Sections are rendered in order with a blank line between them, and a
/// blank line between consecutive body elements.
///
/// ```
/// use svgjsx_codegen::{CodeFile, ast::{ArrowComponent, Export, Import}};
///
/// let code = CodeFile::new()
///     .import(Import::new("react").default("React"))
///     .add(ArrowComponent::new("Icon").returns("<svg />"))
///     .export(Export::new().default_item("Icon"))
///     .render();
///
/// assert!(code.starts_with("import React from \"react\";\n\nconst Icon"));
/// assert!(code.ends_with("};\n\nexport default Icon;\n"));
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render with the default component indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::COMPONENT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}
