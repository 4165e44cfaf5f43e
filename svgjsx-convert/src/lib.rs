//! SVG to JSX conversion.
//!
//! [`SvgToJsx`] parses SVG markup and prints it back as a JSX fragment rooted
//! at a single `<svg>` element:
//!
//! - XML declarations, doctypes, comments, and processing instructions are dropped
//! - attribute names follow React (`class` -> `className`, `stroke-width` -> `strokeWidth`)
//! - `style` strings become style objects
//! - editor metadata in foreign namespaces (`inkscape:*`, `sodipodi:*`) is removed
//!
//! ```
//! use svgjsx_convert::{MarkupConverter, SvgToJsx};
//!
//! let jsx = SvgToJsx::new()
//!     .convert("dot.svg", r#"<svg class="dot"><circle stroke-width="2" r="1"/></svg>"#)
//!     .unwrap();
//!
//! assert_eq!(jsx, "<svg className=\"dot\">\n  <circle strokeWidth=\"2\" r=\"1\" />\n</svg>\n");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod attributes;
mod error;
mod parse;
mod render;

pub use error::{ConversionError, Result};
use svgjsx_codegen::Indent;

/// Converts source markup into a JSX fragment.
pub trait MarkupConverter {
    /// Convert `markup`; `name` labels the source in diagnostics.
    fn convert(&self, name: &str, markup: &str) -> Result<String>;
}

/// The SVG to JSX converter.
#[derive(Debug, Clone, Copy)]
pub struct SvgToJsx {
    indent: Indent,
}

impl SvgToJsx {
    /// Converter printing with 2-space indentation.
    pub fn new() -> Self {
        Self {
            indent: Indent::MARKUP,
        }
    }

    pub fn with_indent(indent: Indent) -> Self {
        Self { indent }
    }
}

impl Default for SvgToJsx {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupConverter for SvgToJsx {
    fn convert(&self, name: &str, markup: &str) -> Result<String> {
        let root = parse::parse_document(name, markup)?;
        tracing::debug!(source = name, children = root.children.len(), "parsed svg markup");
        Ok(render::render(&root, self.indent))
    }
}
