//! Diagnostic records and the line-format parsers that produce them

use serde::{Deserialize, Serialize};

/// One diagnostic reported by the checker
///
/// `line` and `column` are passed through exactly as the checker printed
/// them, in whatever base the checker uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    message: String,
    line: i64,
    column: i64,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, line: i64, column: i64) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> i64 {
        self.line
    }

    pub fn column(&self) -> i64 {
        self.column
    }
}

/// Turns the checker's error stream into diagnostics
///
/// Implementations decide which lines qualify. Lines that do not qualify are
/// dropped; parsing never fails as a whole.
pub trait DiagnosticParser: Send + Sync {
    /// Parse a single line, `None` if it is not a diagnostic
    fn parse_line(&self, line: &str) -> Option<Diagnostic>;

    /// Parse a whole stream, keeping emission order
    fn parse(&self, stream: &str) -> Vec<Diagnostic> {
        stream
            .lines()
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}

/// `<path>:<line>:<column>:<message...>`
///
/// The path segment is discarded. The numeric segments may carry a sign and
/// surrounding whitespace. Anything after the third colon is the message,
/// colons included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColonDelimitedParser;

impl DiagnosticParser for ColonDelimitedParser {
    fn parse_line(&self, line: &str) -> Option<Diagnostic> {
        let mut parts = line.splitn(4, ':');
        let _path = parts.next()?;
        let line_no = parts.next()?;
        let column = parts.next()?;
        let message = parts.next()?;

        let line_no: i64 = line_no.trim().parse().ok()?;
        let column: i64 = column.trim().parse().ok()?;

        Some(Diagnostic::new(message.trim(), line_no, column))
    }
}
