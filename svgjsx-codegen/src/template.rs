//! React component template around converted SVG markup.

use std::borrow::Cow;

use svgjsx_core::ComponentName;

use crate::{
    CodeFile, Indent,
    ast::{ArrowComponent, Export, Field, Import, ObjectType},
};

/// Expression inserted into the root `<svg>` tag.
pub const PROPS_SPREAD: &str = "{...props}";

const PROPS_TYPE: &str = "Props";
const SVG_PROPS_BASE: &str = "SVGProps<SVGSVGElement>";

/// How a component module is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Emit a TypeScript props type and annotate the props argument.
    pub typed: bool,
    /// Emit `import React from "react";` for the classic JSX runtime.
    pub import_react: bool,
    pub indent: Indent,
}

impl TemplateOptions {
    pub fn new(typed: bool) -> Self {
        Self {
            typed,
            import_react: false,
            indent: Indent::COMPONENT,
        }
    }

    pub fn import_react(mut self, import_react: bool) -> Self {
        self.import_react = import_react;
        self
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Wrap `fragment` in a default-exported component named `component`.
    pub fn embed(&self, component: &ComponentName, fragment: &str) -> String {
        let name = component.as_str();
        let markup = inject_props_spread(fragment.trim());

        let mut file = CodeFile::new();
        if self.import_react {
            file = file.import(Import::new("react").default("React"));
        }

        let mut arrow = ArrowComponent::new(name)
            .field("className")
            .rest("props")
            .returns(markup.into_owned());

        if self.typed {
            file = file
                .import(Import::new("react").named("SVGProps").type_only())
                .add(
                    ObjectType::new(PROPS_TYPE)
                        .private()
                        .intersect(SVG_PROPS_BASE)
                        .field(Field::new("className", "string").optional()),
                );
            arrow = arrow.props_type(PROPS_TYPE);
        }

        file.add(arrow)
            .export(Export::new().default_item(name))
            .render_with_indent(self.indent)
    }
}

/// Wrap `fragment` in a component with default options.
///
/// The untyped variant destructures `className` and spreads the remaining
/// props onto the root `<svg>` element:
///
/// ```
/// use svgjsx_codegen::embed_template;
/// use svgjsx_core::ComponentName;
///
/// let name = ComponentName::parse("Dot").unwrap();
/// let code = embed_template(&name, "<svg><circle r=\"1\" /></svg>", false);
///
/// assert_eq!(
///     code,
///     "const Dot = ({ className, ...props }) => {\n    return (\n        <svg {...props}><circle r=\"1\" /></svg>\n    );\n};\n\nexport default Dot;\n"
/// );
/// ```
pub fn embed_template(component: &ComponentName, fragment: &str, typed: bool) -> String {
    TemplateOptions::new(typed).embed(component, fragment)
}

/// Insert [`PROPS_SPREAD`] at the end of the first `<svg>` opening tag.
///
/// Only the root tag's own closing bracket is touched: a `>` inside a quoted
/// attribute value or a `{...}` expression does not end the tag, and nested
/// elements are never reached. Markup without an `<svg` tag is returned as is.
pub fn inject_props_spread(fragment: &str) -> Cow<'_, str> {
    let Some(close) = find_svg_tag_end(fragment) else {
        return Cow::Borrowed(fragment);
    };

    let self_closing = fragment[..close].ends_with('/');
    let split = if self_closing { close - 1 } else { close };
    let head = fragment[..split].trim_end();
    let tail = &fragment[split..];
    let separator = if self_closing { " " } else { "" };

    Cow::Owned(format!("{} {}{}{}", head, PROPS_SPREAD, separator, tail))
}

/// Byte offset of the `>` closing the first `<svg` opening tag.
fn find_svg_tag_end(fragment: &str) -> Option<usize> {
    let bytes = fragment.as_bytes();
    let start = fragment.match_indices("<svg").map(|(i, _)| i).find(|&i| {
        matches!(
            bytes.get(i + 4).copied(),
            Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r')
        )
    })?;

    let mut quote: Option<u8> = None;
    let mut depth = 0usize;

    for (offset, &b) in bytes[start + 4..].iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'' | b'`') => quote = Some(b),
            (None, b'{') => depth += 1,
            (None, b'}') => depth = depth.saturating_sub(1),
            (None, b'>') if depth == 0 => return Some(start + 4 + offset),
            _ => {}
        }
    }

    None
}
