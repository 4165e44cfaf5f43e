//! Element tree to JSX text.

use svgjsx_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::parse::{Element, Node};

/// Longest element, tags included, that keeps a text child on one line.
const INLINE_WIDTH: usize = 80;

/// Pretty-print `root` as JSX, one element per line.
pub(crate) fn render(root: &Element, indent: Indent) -> String {
    let mut builder = CodeBuilder::new(indent);
    builder.emit(root);
    builder.build()
}

impl Element {
    fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for attr in &self.attributes {
            tag.push(' ');
            tag.push_str(&attr.render());
        }
        tag
    }
}

impl Renderable for Element {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let open = self.open_tag();
        let close = format!("</{}>", self.name);

        let body: Vec<CodeFragment> = self.children.iter().flat_map(node_fragments).collect();
        if body.is_empty() {
            return vec![CodeFragment::line(format!("{} />", open))];
        }

        if let [Node::Text(text)] = self.children.as_slice() {
            let text = jsx_text(text);
            if open.len() + text.len() + close.len() + 1 <= INLINE_WIDTH {
                return vec![CodeFragment::line(format!("{}>{}{}", open, text, close))];
            }
        }

        vec![CodeFragment::block(format!("{}>", open), body, Some(close))]
    }
}

fn node_fragments(node: &Node) -> Vec<CodeFragment> {
    match node {
        Node::Element(element) => element.to_fragments(),
        Node::Text(text) => {
            let text = jsx_text(text);
            if text.is_empty() {
                Vec::new()
            } else {
                vec![CodeFragment::line(text)]
            }
        }
        Node::CData(data) => vec![CodeFragment::line(template_literal(data))],
    }
}

/// Collapse whitespace and escape characters JSX text cannot hold.
fn jsx_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        match c {
            '{' => out.push_str(r#"{"{"}"#),
            '}' => out.push_str(r#"{"}"}"#),
            '>' => out.push_str(r#"{">"}"#),
            _ => out.push(c),
        }
    }
    out
}

/// CDATA content as a JSX expression holding a template literal. Line breaks
/// are escaped so the literal stays on one line.
fn template_literal(data: &str) -> String {
    let escaped = data
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace('\r', "\\r")
        .replace('\n', "\\n");
    format!("{{`{}`}}", escaped)
}
