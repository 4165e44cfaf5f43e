//! Arrow function component builder.

use crate::{CodeFragment, Renderable};

/// Builder for a function component bound to a `const`:
///
/// ```text
/// const Name = ({ a, ...rest }: Type) => {
///     return (
///         <markup />
///     );
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ArrowComponent {
    name: String,
    fields: Vec<String>,
    rest: Option<String>,
    props_type: Option<String>,
    markup: String,
}

impl ArrowComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            rest: None,
            props_type: None,
            markup: String::new(),
        }
    }

    /// Destructure a named field from the props argument.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Collect the remaining props into `...name`.
    pub fn rest(mut self, name: impl Into<String>) -> Self {
        self.rest = Some(name.into());
        self
    }

    /// Annotate the props argument with a type.
    pub fn props_type(mut self, ty: impl Into<String>) -> Self {
        self.props_type = Some(ty.into());
        self
    }

    /// Markup returned by the component; may span several lines, each of
    /// which is re-indented under `return (`.
    pub fn returns(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }

    fn parameter(&self) -> String {
        let mut bindings = self.fields.clone();
        if let Some(rest) = &self.rest {
            bindings.push(format!("...{}", rest));
        }

        if bindings.is_empty() {
            return String::new();
        }
        let pattern = format!("{{ {} }}", bindings.join(", "));

        match &self.props_type {
            Some(ty) => format!("{}: {}", pattern, ty),
            None => pattern,
        }
    }
}

impl Renderable for ArrowComponent {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = if self.markup.trim().is_empty() {
            vec![CodeFragment::line("return null;")]
        } else {
            vec![CodeFragment::block(
                "return (",
                CodeFragment::lines(&self.markup),
                Some(");".to_string()),
            )]
        };

        vec![CodeFragment::block(
            format!("const {} = ({}) => {{", self.name, self.parameter()),
            body,
            Some("};".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodeBuilder;

    fn build(component: &ArrowComponent) -> String {
        let mut builder = CodeBuilder::component();
        builder.emit(component);
        builder.build()
    }

    #[test]
    fn test_component_with_rest_props() {
        let c = ArrowComponent::new("Icon")
            .field("className")
            .rest("props")
            .returns("<svg {...props} />");
        assert_eq!(
            build(&c),
            "const Icon = ({ className, ...props }) => {\n    return (\n        <svg {...props} />\n    );\n};\n"
        );
    }

    #[test]
    fn test_typed_component() {
        let c = ArrowComponent::new("Icon")
            .rest("props")
            .props_type("Props")
            .returns("<svg />");
        assert!(build(&c).starts_with("const Icon = ({ ...props }: Props) => {\n"));
    }

    #[test]
    fn test_multiline_markup_is_indented() {
        let c = ArrowComponent::new("Icon").returns("<svg>\n  <path />\n</svg>");
        assert_eq!(
            build(&c),
            "const Icon = () => {\n    return (\n        <svg>\n          <path />\n        </svg>\n    );\n};\n"
        );
    }

    #[test]
    fn test_empty_markup_returns_null() {
        let c = ArrowComponent::new("Empty").returns("  \n");
        assert_eq!(build(&c), "const Empty = () => {\n    return null;\n};\n");
    }
}
