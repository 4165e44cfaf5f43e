//! Markup to element tree.

use quick_xml::{
    Decoder, Reader,
    events::{BytesStart, Event, attributes::Attribute},
};

use crate::{
    Result,
    attributes::{self, JsxAttribute},
    error::SourceContext,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Element(Element),
    /// Character data, still XML-escaped.
    Text(String),
    /// Contents of a CDATA section.
    CData(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    pub children: Vec<Node>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>, ctx: &SourceContext<'_>, offset: usize) -> Result<Self> {
        let name = lossy(start.name().as_ref());
        let mut converted = Vec::new();

        for attr in start.attributes() {
            let attr = attr.map_err(|e| ctx.malformed(offset, e.to_string()))?;
            let key = lossy(attr.key.as_ref());
            let value = attribute_value(&attr, start.decoder());
            match attributes::convert(&key, &value) {
                Some(attr) => converted.push(attr),
                None => tracing::trace!(element = %name, attribute = %key, "dropped attribute"),
            }
        }

        Ok(Self {
            name,
            attributes: converted,
            children: Vec::new(),
        })
    }

    /// Drop whitespace-only text runs left over from indentation.
    fn finish(mut self) -> Self {
        self.children
            .retain(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()));
        self
    }

    fn push_text(&mut self, text: &str) {
        match self.children.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(text),
            _ => self.children.push(Node::Text(text.to_string())),
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Attribute value with entities resolved. References to entities declared in
/// a DTD cannot be resolved and are kept as written.
fn attribute_value(attr: &Attribute<'_>, decoder: Decoder) -> String {
    match attr.decode_and_unescape_value(decoder) {
        Ok(value) => value.into_owned(),
        Err(e) => {
            let key = lossy(attr.key.as_ref());
            tracing::debug!(attribute = %key, error = %e, "kept escaped value");
            lossy(&attr.value)
        }
    }
}

/// Elements from foreign namespaces carry editor metadata only.
fn is_dropped(name: &[u8]) -> bool {
    name.contains(&b':')
}

/// Builds the element tree while reading events.
struct TreeBuilder<'a> {
    ctx: SourceContext<'a>,
    stack: Vec<Element>,
    root: Option<Element>,
    /// Depth inside a dropped element; nothing is collected while non-zero.
    skip_depth: usize,
}

impl<'a> TreeBuilder<'a> {
    fn attach(&mut self, element: Element, offset: usize) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(Node::Element(element));
            return Ok(());
        }
        if self.root.is_some() {
            return Err(self.ctx.multiple_roots(offset));
        }
        if element.name != "svg" {
            return Err(self
                .ctx
                .missing_root(format!("<{}>", element.name), Some(offset)));
        }
        self.root = Some(element);
        Ok(())
    }

    fn text(&mut self, text: &str, offset: usize) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.push_text(text);
                Ok(())
            }
            None if text.trim().is_empty() => Ok(()),
            None => Err(self
                .ctx
                .malformed(offset, "text outside of the root element")),
        }
    }
}

/// Parse `src` into the tree below its `<svg>` root.
pub(crate) fn parse_document(name: &str, src: &str) -> Result<Element> {
    let ctx = SourceContext::new(name, src);
    let mut reader = Reader::from_str(src);
    let mut tree = TreeBuilder {
        ctx,
        stack: Vec::new(),
        root: None,
        skip_depth: 0,
    };

    loop {
        let offset = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(ctx.malformed(reader.error_position() as usize, e.to_string()));
            }
        };

        match event {
            Event::Start(start) => {
                if tree.skip_depth > 0 || is_dropped(start.name().as_ref()) {
                    tree.skip_depth += 1;
                    continue;
                }
                let element = Element::from_start(&start, &ctx, offset)?;
                tree.stack.push(element);
            }
            Event::Empty(start) => {
                if tree.skip_depth > 0 || is_dropped(start.name().as_ref()) {
                    continue;
                }
                let element = Element::from_start(&start, &ctx, offset)?;
                tree.attach(element, offset)?;
            }
            Event::End(_) => {
                if tree.skip_depth > 0 {
                    tree.skip_depth -= 1;
                    continue;
                }
                let element = tree
                    .stack
                    .pop()
                    .ok_or_else(|| ctx.malformed(offset, "unexpected closing tag"))?;
                tree.attach(element.finish(), offset)?;
            }
            Event::Text(text) if tree.skip_depth == 0 => {
                tree.text(&lossy(&text), offset)?;
            }
            Event::GeneralRef(reference) if tree.skip_depth == 0 => {
                tree.text(&format!("&{};", lossy(&reference)), offset)?;
            }
            Event::CData(data) if tree.skip_depth == 0 => match tree.stack.last_mut() {
                Some(parent) => parent.children.push(Node::CData(lossy(&data))),
                None => return Err(ctx.malformed(offset, "CDATA outside of the root element")),
            },
            Event::Eof => break,
            // Declarations, doctypes, comments, processing instructions, and
            // anything inside dropped elements.
            _ => {}
        }
    }

    if let Some(open) = tree.stack.last() {
        return Err(ctx.malformed(src.len(), format!("<{}> is never closed", open.name)));
    }

    tree.root
        .ok_or_else(|| ctx.missing_root("no element", None))
}
