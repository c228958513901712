use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename used to build diagnostics.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn invalid_name(
        &self,
        name: &str,
        context: &'static str,
        span: Option<Range<usize>>,
    ) -> Box<Error> {
        Box::new(Error::InvalidName {
            src: self.named_source(),
            span: span.map(SourceSpan::from),
            name: name.to_string(),
            context,
        })
    }

    pub fn unknown_parent(&self, class: &str, parent: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::UnknownParent {
            src: self.named_source(),
            span: span.into(),
            class: class.to_string(),
            parent: parent.to_string(),
        })
    }

    pub fn inheritance_cycle(&self, class: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::InheritanceCycle {
            src: self.named_source(),
            span: span.into(),
            class: class.to_string(),
        })
    }

    pub fn unknown_type(&self, ty: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: span.into(),
            ty: ty.to_string(),
        })
    }

    pub fn conflicting_default(&self, name: &str, span: Range<usize>) -> Box<Error> {
        Box::new(Error::ConflictingDefault {
            src: self.named_source(),
            span: span.into(),
            name: name.to_string(),
        })
    }

    /// Byte range of `name` inside its `[classes.<name>]` table header, bare
    /// or quoted. `None` when the class is not declared with a header.
    pub fn class_header(&self, name: &str) -> Option<Range<usize>> {
        ["", "\"", "'"].iter().find_map(|quote| {
            let header = format!("[classes.{quote}{name}{quote}]");
            self.src.find(&header).map(|start| {
                let start = start + "[classes.".len() + quote.len();
                start..start + name.len()
            })
        })
    }

    pub fn declaration(
        &self,
        class: &str,
        span: Range<usize>,
        source: declinit_core::Error,
    ) -> Box<Error> {
        Box::new(Error::Declaration {
            src: self.named_source(),
            span: span.into(),
            class: class.to_string(),
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a declinit.toml or pass its path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest")]
    #[diagnostic(code(declinit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(declinit::invalid_name),
        help("use only letters, numbers, and underscores, starting with a letter or underscore")
    )]
    InvalidName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: &'static str,
    },

    #[error("class '{class}' extends unknown class '{parent}'")]
    #[diagnostic(code(declinit::unknown_parent))]
    UnknownParent {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared in this manifest")]
        span: SourceSpan,
        class: String,
        parent: String,
    },

    #[error("class '{class}' is part of an inheritance cycle")]
    #[diagnostic(code(declinit::inheritance_cycle))]
    InheritanceCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle closes here")]
        span: SourceSpan,
        class: String,
    },

    #[error("unknown type '{ty}'")]
    #[diagnostic(
        code(declinit::unknown_type),
        help("valid types are: any, integer, float, string, bool, coercible_integer (append '?' to allow nil)")
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: SourceSpan,
        ty: String,
    },

    #[error("parameter '{name}' sets both 'default' and 'optional'")]
    #[diagnostic(
        code(declinit::conflicting_default),
        help("'optional = true' means a nil default; drop one of the two")
    )]
    ConflictingDefault {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
        name: String,
    },

    #[error("invalid declaration in class '{class}'")]
    #[diagnostic(code(declinit::declaration))]
    Declaration {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
        class: String,
        #[source]
        #[diagnostic_source]
        source: declinit_core::Error,
    },
}
