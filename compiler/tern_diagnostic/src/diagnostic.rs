use std::fmt;

use tern_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::ErrorCode;

/// A span the diagnostic points at. The primary label is the error
/// position; secondary labels point at related code ("first declared here").
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

/// An error from any stage of the pipeline.
///
/// Every Tern diagnostic is fatal to the run that produced it, so there is
/// no severity. Carries enough to render `"[line:column] message"`; how it
/// is printed, and what exit code follows, is up to the caller.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at the error location.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), true)
    }

    /// Point at related code.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), false)
    }

    fn push_label(mut self, span: Span, message: String, is_primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            is_primary,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    pub fn secondary_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(|l| !l.is_primary)
    }

    /// Render as `"[line:column] message"`.
    ///
    /// Diagnostics without a primary span render the bare message.
    pub fn render(&self, source: &str, table: &LineOffsetTable) -> String {
        match self.primary_span() {
            Some(span) => {
                let (line, col) = table.span_start(source, span);
                format!("[{line}:{col}] {}", self.message)
            }
            None => self.message.clone(),
        }
    }
}

/// Source-free form for logs: spans stay as byte ranges.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(span) = self.primary_span() {
            write!(f, " at {span:?}")?;
        }
        for label in self.secondary_labels() {
            write!(f, "\n  {}: {:?}", label.message, label.span)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}
