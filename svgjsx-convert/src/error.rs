use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for conversions (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConversionError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConversionError {
    #[error("invalid SVG markup: {message}")]
    #[diagnostic(
        code(svgjsx::convert::malformed),
        help("make sure the file contains valid SVG markup")
    )]
    Malformed {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("expected an <svg> root element, found {found}")]
    #[diagnostic(code(svgjsx::convert::missing_root))]
    MissingSvgRoot {
        #[source_code]
        src: NamedSource<String>,
        #[label("root element")]
        span: Option<SourceSpan>,
        found: String,
    },

    #[error("markup has more than one root element")]
    #[diagnostic(
        code(svgjsx::convert::multiple_roots),
        help("wrap the elements in a single <svg> element")
    )]
    MultipleRoots {
        #[source_code]
        src: NamedSource<String>,
        #[label("second root element starts here")]
        span: SourceSpan,
    },
}

/// Source context for conversion errors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceContext<'a> {
    name: &'a str,
    src: &'a str,
}

impl<'a> SourceContext<'a> {
    pub(crate) fn new(name: &'a str, src: &'a str) -> Self {
        Self { name, src }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name, self.src.to_string())
    }

    /// Span of `len` bytes at `offset`, clamped to the source.
    fn span(&self, offset: usize, len: usize) -> SourceSpan {
        let offset = offset.min(self.src.len());
        let len = len.min(self.src.len() - offset);
        SourceSpan::from((offset, len))
    }

    pub(crate) fn malformed(
        &self,
        offset: usize,
        message: impl Into<String>,
    ) -> Box<ConversionError> {
        Box::new(ConversionError::Malformed {
            src: self.named_source(),
            span: self.span(offset, 1),
            message: message.into(),
        })
    }

    pub(crate) fn missing_root(
        &self,
        found: impl Into<String>,
        at: Option<usize>,
    ) -> Box<ConversionError> {
        Box::new(ConversionError::MissingSvgRoot {
            src: self.named_source(),
            span: at.map(|offset| self.span(offset, 1)),
            found: found.into(),
        })
    }

    pub(crate) fn multiple_roots(&self, offset: usize) -> Box<ConversionError> {
        Box::new(ConversionError::MultipleRoots {
            src: self.named_source(),
            span: self.span(offset, 1),
        })
    }
}
