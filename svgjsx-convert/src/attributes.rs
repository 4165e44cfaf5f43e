//! SVG attribute names and values in React form.

use svgjsx_core::{capitalize, to_camel_case};

/// Namespace prefixes React knows as camelCase props (`xlink:href` -> `xlinkHref`).
const KNOWN_PREFIXES: &[&str] = &["xlink", "xml"];

/// Attributes whose React name is not their camelCase form.
const RENAMED: &[(&str, &str)] = &[
    ("class", "className"),
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
    ("crossorigin", "crossOrigin"),
];

/// An attribute after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum JsxAttribute {
    /// A string attribute; the value has its XML entities resolved.
    Text { name: String, value: String },
    /// An inline style as `(key, value)` pairs, keys already in React form.
    Style(Vec<(String, String)>),
}

impl JsxAttribute {
    /// The attribute as it appears inside a JSX tag.
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Text { name, value } => format!("{}={}", name, quote_value(value)),
            Self::Style(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, js_string(value)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("style={{{{ {} }}}}", body)
            }
        }
    }
}

/// Convert a source attribute. Returns `None` for attributes that have no
/// place in JSX (foreign namespaces, empty styles).
pub(crate) fn convert(name: &str, value: &str) -> Option<JsxAttribute> {
    if name == "style" {
        let entries = parse_style(value);
        return (!entries.is_empty()).then_some(JsxAttribute::Style(entries));
    }

    let name = attribute_name(name)?;
    Some(JsxAttribute::Text {
        name,
        value: value.to_string(),
    })
}

fn attribute_name(name: &str) -> Option<String> {
    if let Some((prefix, local)) = name.split_once(':') {
        let known = match prefix {
            // Namespace declarations only survive for namespaces React knows.
            "xmlns" => KNOWN_PREFIXES.contains(&local),
            _ => KNOWN_PREFIXES.contains(&prefix),
        };
        if !known {
            return None;
        }
        return Some(format!("{}{}", prefix, capitalize(&to_camel_case(local))));
    }

    if name.starts_with("data-") || name.starts_with("aria-") {
        return Some(name.to_string());
    }

    let renamed = RENAMED
        .iter()
        .find(|(from, _)| from.eq_ignore_ascii_case(name))
        .map(|(_, to)| to.to_string());

    Some(renamed.unwrap_or_else(|| to_camel_case(name)))
}

/// Split a CSS declaration list into React style entries.
fn parse_style(style: &str) -> Vec<(String, String)> {
    split_declarations(style)
        .into_iter()
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let (property, value) = (property.trim(), value.trim());
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((style_key(property), value.to_string()))
        })
        .collect()
}

/// Split on `;` outside of quoted strings and parentheses, so values like
/// `url(data:image/png;base64,...)` stay whole.
fn split_declarations(style: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut quote = None;
    let mut depth = 0usize;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                declarations.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    declarations.push(&style[start..]);
    declarations
}

fn style_key(property: &str) -> String {
    // Custom properties keep their name verbatim.
    if property.starts_with("--") {
        return js_string(property);
    }

    let key = if let Some(rest) = property.strip_prefix("-ms-") {
        format!("ms{}", capitalize(&to_camel_case(rest)))
    } else if property.starts_with('-') {
        capitalize(&to_camel_case(property))
    } else {
        to_camel_case(property)
    };

    if is_identifier(&key) {
        key
    } else {
        js_string(&key)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Double-quoted JavaScript string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// JSX string attributes have no backslash escapes and decode HTML entities,
/// so pick a quote the value lacks or fall back to an expression.
fn quote_value(value: &str) -> String {
    if value.contains(['&', '\n', '\r']) {
        return format!("{{{}}}", js_string(value));
    }
    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{}\"", value),
        (true, false) => format!("'{}'", value),
        (true, true) => format!("{{{}}}", js_string(value)),
    }
}
