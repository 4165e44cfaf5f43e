//! Code generation for svgjsx.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - TypeScript/JSX syntax builders (imports, exports, types, components)
//! - [`CodeFile`] - Imports, body, and exports assembled into one module
//! - [`template`] - The React component template wrapped around a converted SVG

pub mod ast;
pub mod builder;
mod code_file;
pub mod template;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use code_file::CodeFile;
pub use template::{PROPS_SPREAD, TemplateOptions, embed_template, inject_props_spread};
