use std::fmt::Display;

use itertools::Itertools;

pub use cursor::Line;

/// A single line-tagged error message.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{location}: {message}")]
pub struct Diagnostic {
    pub line: Line,
    /// Optional suffix after "Error", e.g. " at 'foo'". Empty for lexical errors.
    pub location: String,
    pub message: String,
}

/// Collects the errors reported while processing one or more inputs.
///
/// Reporting never aborts the caller; it only records the message and sets the
/// error flag. A host running independent inputs (e.g. a prompt) calls
/// [`Diagnostics::reset_error`] in between so that one bad input doesn't mark
/// the following ones as failed.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: bool,
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, line: Line, message: impl Into<String>) {
        self.report(line, "", message)
    }

    pub fn report(&mut self, line: Line, location: impl Into<String>, message: impl Into<String>) {
        let diagnostic =
            Diagnostic { line, location: location.into(), message: message.into() };
        log::debug!("Reporting {:?}", diagnostic);
        self.reported.push(diagnostic);
        self.had_error = true;
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn reset_error(&mut self) {
        self.had_error = false;
    }

    pub fn reported(&self) -> &[Diagnostic] {
        &self.reported
    }

    /// Hands out every diagnostic recorded so far, leaving none behind.
    /// The error flag is left untouched.
    pub fn take_reported(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.reported)
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reported.iter().join("\n"))
    }
}
