//! TypeScript object type builder.

use crate::{CodeFragment, Renderable};

/// A field in a TypeScript object type.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for named object types (`type Props = Base & { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    base: Option<String>,
    fields: Vec<Field>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Intersect the object literal with another type.
    pub fn intersect(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .map(|field| {
                let optional = if field.optional { "?" } else { "" };
                CodeFragment::Line(format!("{}{}: {};", field.name, optional, field.ty))
            })
            .collect()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let base = match &self.base {
            Some(base) => format!("{} & ", base),
            None => String::new(),
        };

        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "{}type {} = {}{{}};",
                export, self.name, base
            ))];
        }

        vec![CodeFragment::block(
            format!("{}type {} = {}{{", export, self.name, base),
            self.fields_to_fragments(),
            Some("};".to_string()),
        )]
    }
}
