use codespan_reporting::diagnostic::{Diagnostic, Label};
use std::ops::Range;

pub type CoreResult<T> = Result<T, CoreError>;

/// What went wrong, independent of where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    /// A line was classified as a token that is not allowed at this point
    GrammarViolation,
    /// A cheat code line whose words could not be turned into numbers
    MalformedCode,
    /// A game, cheat or code could not be created or attached to its parent
    ConstructionFailure,
    /// A raw input line exceeded the configured maximum length
    LineTooLong,
    /// The line source or output sink failed
    IoFailure,
}

/// A parse failure, located at the 1-based line on which it occurred.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    kind: ErrorKind,
    line: usize,
    message: String,
}

impl ParseError {
    pub fn new<M: Into<String>>(kind: ErrorKind, line: usize, message: M) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds a diagnostic whose primary label covers the offending line of `source`.
    ///
    /// `source` should be the same text the error was produced from. If the line cannot be
    /// found in it, the diagnostic carries the message only.
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic<()> {
        let diag = Diagnostic::error()
            .with_code(self.kind.to_string())
            .with_message(self.message.clone());

        match line_range(source, self.line) {
            Some(range) => diag.with_labels(vec![Label::primary((), range)]),
            None => diag,
        }
    }
}

/// Byte range of the 1-based `line` in `source`, excluding its terminator
fn line_range(source: &str, line: usize) -> Option<Range<usize>> {
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let content = text.trim_end_matches(|c| c == '\n' || c == '\r');
            return Some(offset..offset + content.len());
        }
        offset += text.len();
    }
    None
}

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for CoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CoreError::Parse(lhs), CoreError::Parse(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Parse(e) => e.kind(),
            CoreError::Io(_) => ErrorKind::IoFailure,
        }
    }

    /// The 1-based line at which parsing failed. I/O failures outside of parsing, such as opening a
    /// file, carry no line.
    pub fn line(&self) -> Option<usize> {
        match self {
            CoreError::Parse(e) => Some(e.line()),
            CoreError::Io(_) => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CoreError::Parse(e) => e.message().to_string(),
            CoreError::Io(e) => e.to_string(),
        }
    }
}
