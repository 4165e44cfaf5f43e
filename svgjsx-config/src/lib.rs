//! `svgjsx.toml` configuration.
//!
//! The file is optional; every key has a default:
//!
//! ```
//! use svgjsx_codegen::Indent;
//! use svgjsx_config::Config;
//!
//! let config = Config::from_str_with_filename("[template]\nindent = 2\n", "svgjsx.toml").unwrap();
//!
//! assert!(!config.convert.delete_source);
//! assert_eq!(config.template.indent(), Indent::Spaces(2));
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;

pub use error::{Error, Result};
pub use file::SvgjsxToml;
use miette::SourceSpan;
use serde::Deserialize;
use svgjsx_codegen::Indent;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "svgjsx.toml";

/// Contents written by `svgjsx init`.
pub const DEFAULT_CONFIG: &str = r#"[convert]
# Remove the .svg file after its component is written.
delete_source = false

[template]
# Emit `import React from "react";` for the classic JSX runtime.
import_react = false
# Indent width in spaces: 2, 4 or 8 (0 = tab).
indent = 4
"#;

/// Root of svgjsx.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub template: TemplateConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Remove the source file once the component is written.
    #[serde(default)]
    pub delete_source: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    #[serde(default)]
    pub import_react: bool,
    #[serde(default = "default_indent_width")]
    indent: u8,
}

fn default_indent_width() -> u8 {
    4
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            import_react: false,
            indent: default_indent_width(),
        }
    }
}

impl TemplateConfig {
    /// Indentation for generated modules. Widths are checked at parse time.
    pub fn indent(&self) -> Indent {
        Indent::from_width(self.indent).unwrap_or_default()
    }
}

impl Config {
    /// Parse svgjsx.toml content; `filename` labels diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let width = self.template.indent;
        if Indent::from_width(width).is_none() {
            return Err(Error::validation(
                format!("unsupported indent width {}", width),
                "use 2, 4 or 8 spaces, or 0 for tabs",
                src,
                filename,
                find_value_span(src, "indent"),
            ));
        }
        Ok(())
    }
}

/// Span of the value assigned to `key`, for labeling diagnostics.
fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let value = line
            .trim_start()
            .strip_prefix(key)
            .and_then(|rest| rest.trim_start().strip_prefix('='));
        if let Some(value) = value {
            let value = value.split('#').next().unwrap_or_default().trim();
            let start = offset + line.find(value).unwrap_or_default();
            return Some(SourceSpan::from((start, value.len())));
        }
        offset += line.len();
    }
    None
}
