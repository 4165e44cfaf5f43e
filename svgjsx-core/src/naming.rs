//! Component and file naming.
//!
//! Source files are named by people ("my icon-v2.final.svg"), components are
//! named by the language ("MyIconV2Final"). [`format_file_name`] bridges the
//! two and is the only place where a [`ComponentName`] is derived from a path.

use std::{borrow::Cow, fmt};

use thiserror::Error;

use crate::{Extension, utils::capitalize};

/// Names longer than this many characters are truncated.
pub const MAX_NAME_LENGTH: usize = 100;

/// Number of characters kept from a name that exceeds [`MAX_NAME_LENGTH`].
pub const TRUNCATED_LENGTH: usize = 20;

/// Stem used when nothing usable survives formatting.
const FALLBACK_STEM: &str = "Component";

/// Prefix for stems that would otherwise start with a digit.
const DIGIT_PREFIX: &str = "Svg";

const DELIMITERS: [char; 3] = ['-', '_', '.'];

/// Non-fatal problem found while formatting a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameWarning {
    /// The raw name exceeded [`MAX_NAME_LENGTH`] and was cut to `kept` characters.
    TooLong { length: usize, kept: usize },
}

impl fmt::Display for NameWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameWarning::TooLong { length, kept } => write!(
                f,
                "file name is {} characters long (limit {}), only the first {} are used",
                length, MAX_NAME_LENGTH, kept
            ),
        }
    }
}

/// A PascalCase identifier usable as a component name and a file stem.
///
/// Non-empty, starts with an ASCII uppercase letter, and contains only
/// ASCII letters, digits, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{name}' is not a valid component name: {reason}")]
pub struct InvalidComponentName {
    pub name: String,
    pub reason: &'static str,
}

impl ComponentName {
    /// Validate an existing identifier.
    pub fn parse(name: impl Into<String>) -> Result<Self, InvalidComponentName> {
        let name = name.into();
        let reason = match name.chars().next() {
            None => Some("name is empty"),
            Some(c) if !c.is_ascii_uppercase() => Some("must start with an uppercase letter"),
            Some(_) if !name.chars().all(is_word_char) => {
                Some("only letters, digits, and underscores are allowed")
            }
            Some(_) => None,
        };

        match reason {
            Some(reason) => Err(InvalidComponentName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Result of [`format_file_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedName {
    component: ComponentName,
    extension: Extension,
    warning: Option<NameWarning>,
}

impl FormattedName {
    /// The component identifier, which is also the file stem.
    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    /// File name with extension (e.g., "MyIcon.tsx").
    pub fn file_name(&self) -> String {
        format!("{}{}", self.component, self.extension)
    }

    pub fn warning(&self) -> Option<&NameWarning> {
        self.warning.as_ref()
    }
}

/// Turn a raw file name into a PascalCase file name with the given extension.
///
/// The trailing extension of `raw_name` is dropped, everything but word
/// characters, whitespace, dots, hyphens, and underscores is removed, and the
/// remaining pieces are capitalized and joined:
///
/// ```
/// use svgjsx_core::{Extension, format_file_name};
///
/// let name = format_file_name("test other-something.other..svg", Extension::Tsx);
/// assert_eq!(name.file_name(), "TestOtherSomethingOther.tsx");
/// assert_eq!(name.component().as_str(), "TestOtherSomethingOther");
/// ```
///
/// Names longer than [`MAX_NAME_LENGTH`] characters are cut down to
/// [`TRUNCATED_LENGTH`] first and the result carries a [`NameWarning`].
pub fn format_file_name(raw_name: &str, extension: Extension) -> FormattedName {
    let length = raw_name.chars().count();
    let (name, warning) = if length > MAX_NAME_LENGTH {
        let kept: String = raw_name.chars().take(TRUNCATED_LENGTH).collect();
        let warning = NameWarning::TooLong {
            length,
            kept: TRUNCATED_LENGTH,
        };
        (Cow::Owned(kept), Some(warning))
    } else {
        (Cow::Borrowed(raw_name), None)
    };

    let cleaned: String = strip_extension(&name)
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace() || DELIMITERS.contains(&c))
        .collect();

    let pascal: String = cleaned
        .split(|c: char| c.is_whitespace() || DELIMITERS.contains(&c))
        .map(capitalize)
        .collect();

    let stem = if pascal.is_empty() {
        FALLBACK_STEM.to_string()
    } else if pascal.starts_with(|c: char| c.is_ascii_digit()) {
        // Stay within the limit so a second pass never truncates. The stem is ASCII here.
        let mut prefixed = format!("{}{}", DIGIT_PREFIX, pascal);
        prefixed.truncate(MAX_NAME_LENGTH);
        prefixed
    } else {
        pascal
    };

    FormattedName {
        component: ComponentName(stem),
        extension,
        warning,
    }
}

/// Drop a trailing `.ext` (a dot followed by at least one non-dot character).
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn format(raw: &str, extension: Extension) -> String {
        format_file_name(raw, extension).file_name()
    }

    fn is_pascal_file_name(name: &str) -> bool {
        let Some((stem, ext)) = name.split_once('.') else {
            return false;
        };
        (ext == "jsx" || ext == "tsx")
            && stem.starts_with(|c: char| c.is_ascii_uppercase())
            && stem.chars().all(|c| c.is_ascii_alphanumeric())
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(format("test.svg", Extension::Jsx), "Test.jsx");
    }

    #[test]
    fn test_hyphenated_name() {
        assert_eq!(
            format("test-other-something.svg", Extension::Tsx),
            "TestOtherSomething.tsx"
        );
        assert_eq!(
            format("test other-something.svg", Extension::Tsx),
            "TestOtherSomething.tsx"
        );
    }

    #[test]
    fn test_dotted_name() {
        assert_eq!(
            format("test other-something.other.s.svg", Extension::Tsx),
            "TestOtherSomethingOtherS.tsx"
        );
        assert_eq!(
            format("test other-something.other..svg", Extension::Tsx),
            "TestOtherSomethingOther.tsx"
        );
    }

    #[test]
    fn test_strips_invalid_characters() {
        assert_eq!(
            format("test ?-} other-something.other..svg", Extension::Tsx),
            "TestOtherSomethingOther.tsx"
        );
        assert_eq!(
            format("test ?-} other-something.other..svg?s", Extension::Tsx),
            "TestOtherSomethingOther.tsx"
        );
        assert_eq!(
            format("test ?-} other-something.other.otr", Extension::Tsx),
            "TestOtherSomethingOther.tsx"
        );
        assert_eq!(
            format("test ?-} other-something", Extension::Tsx),
            "TestOtherSomething.tsx"
        );
    }

    #[test]
    fn test_underscores_and_whitespace() {
        assert_eq!(format("arrow_left\tsmall.svg", Extension::Jsx), "ArrowLeftSmall.jsx");
        assert_eq!(format("__a__b__.svg", Extension::Jsx), "AB.jsx");
    }

    #[test]
    fn test_keeps_inner_case_and_digits() {
        assert_eq!(format("iOS-icon2x.svg", Extension::Jsx), "IOSIcon2x.jsx");
        assert_eq!(format("HTMLLogo.svg", Extension::Jsx), "HTMLLogo.jsx");
    }

    #[test]
    fn test_degenerate_names() {
        assert_eq!(format("", Extension::Jsx), "Component.jsx");
        assert_eq!(format("???.svg", Extension::Jsx), "Component.jsx");
        assert_eq!(format("---.svg", Extension::Tsx), "Component.tsx");
        assert_eq!(format("24px-home.svg", Extension::Jsx), "Svg24pxHome.jsx");
    }

    #[test]
    fn test_long_name_is_truncated_with_warning() {
        let raw = format!("{}.svg", "abcdefghij".repeat(11));
        let name = format_file_name(&raw, Extension::Jsx);

        assert_eq!(name.file_name(), "Abcdefghijabcdefghij.jsx");
        assert_eq!(
            name.warning(),
            Some(&NameWarning::TooLong {
                length: 114,
                kept: TRUNCATED_LENGTH
            })
        );
    }

    #[test]
    fn test_name_at_limit_is_not_truncated() {
        let raw = "a".repeat(MAX_NAME_LENGTH);
        let name = format_file_name(&raw, Extension::Jsx);

        assert!(name.warning().is_none());
        assert_eq!(name.component().as_str().len(), MAX_NAME_LENGTH);
    }

    #[test]
    fn test_component_name_parse() {
        assert!(ComponentName::parse("Icon_2").is_ok());
        assert_eq!(
            ComponentName::parse("").unwrap_err().reason,
            "name is empty"
        );
        assert!(ComponentName::parse("icon").is_err());
        assert!(ComponentName::parse("My-Icon").is_err());
    }

    #[test]
    fn test_formatted_component_is_valid() {
        let name = format_file_name("hello world.svg", Extension::Tsx);
        let parsed = ComponentName::parse(name.component().as_str()).unwrap();
        assert_eq!(&parsed, name.component());
    }

    proptest! {
        #[test]
        fn prop_separated_names_are_pascal_case(
            raw in "[a-zA-Z0-9]{1,8}([ ._-]{1,3}[a-zA-Z0-9]{1,8}){0,5}(\\.svg)?",
        ) {
            let name = format(&raw, Extension::Jsx);
            prop_assert!(is_pascal_file_name(&name), "{:?} -> {:?}", raw, name);
        }

        #[test]
        fn prop_any_name_is_pascal_case(raw in "\\PC{0,150}") {
            let name = format(&raw, Extension::Tsx);
            prop_assert!(is_pascal_file_name(&name), "{:?} -> {:?}", raw, name);
        }

        #[test]
        fn prop_formatting_is_idempotent(raw in "\\PC{0,150}") {
            let first = format_file_name(&raw, Extension::Tsx);
            let second = format_file_name(first.component().as_str(), Extension::Tsx);
            prop_assert_eq!(first.file_name(), second.file_name());
            prop_assert!(second.warning().is_none());
        }
    }
}
