//! Terminal output for diagnostics.
//!
//! Each diagnostic is one header line, `error[E1001]: [2:9] message`,
//! followed by one `--> [line:col] message` line per secondary label and
//! then its notes. Color is optional and resolved once at
//! construction.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LABEL: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);

    /// Emit a closing line summarizing how many errors were reported.
    fn emit_summary(&mut self, error_count: usize);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; it is ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Human-readable emitter bound to one source text.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    source: &'src str,
    table: LineOffsetTable,
    colors: bool,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, source: &'src str, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            source,
            table: LineOffsetTable::build(source),
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return its writer (used by tests to inspect
    /// buffered output).
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    pub fn stderr(source: &'src str, mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), source, mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let rendered = diagnostic.render(self.source, &self.table);
        let _ = writeln!(self.writer, ": {rendered}");

        for label in diagnostic.secondary_labels() {
            let (line, col) = self.table.span_start(self.source, label.span);
            let _ = write!(self.writer, "  ");
            self.write_colored("-->", colors::LABEL);
            let _ = writeln!(self.writer, " [{line}:{col}] {}", label.message);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(
            self.writer,
            ": aborting due to {error_count} previous error{}",
            plural_s(error_count)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use pretty_assertions::assert_eq;
    use tern_ir::Span;

    fn emit_plain(source: &str, diags: &[Diagnostic]) -> String {
        let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), source, ColorMode::Never, true);
        emitter.emit_all(diags);
        emitter.emit_summary(diags.len());
        String::from_utf8_lossy(&emitter.into_inner()).into_owned()
    }

    #[test]
    fn plain_output_has_position_and_code() {
        let source = "print 1 +";
        let diag = Diagnostic::error(ErrorCode::E1002)
            .with_message("no parse rule for end of file")
            .with_label(Span::point(9), "here")
            .with_note("an operand is missing");
        assert_eq!(
            emit_plain(source, &[diag]),
            "error[E1002]: [1:10] no parse rule for end of file\n  = note: an operand is missing\nerror: aborting due to 1 previous error\n"
        );
    }

    #[test]
    fn summary_pluralises() {
        let source = "a\nb";
        let diags = vec![
            Diagnostic::error(ErrorCode::E2002)
                .with_message("first")
                .with_label(Span::new(0, 1), "here"),
            Diagnostic::error(ErrorCode::E2002)
                .with_message("second")
                .with_label(Span::new(2, 3), "here"),
        ];
        let out = emit_plain(source, &diags);
        assert!(out.contains("[2:1] second"));
        assert!(out.ends_with("aborting due to 2 previous errors\n"));
    }

    #[test]
    fn secondary_labels_get_their_own_line() {
        let source = "let f = fn() {\n  let a = 1\n  let a = 2\n}";
        let diag = Diagnostic::error(ErrorCode::E2001)
            .with_message("`a` is already declared in this scope")
            .with_label(Span::new(33, 34), "here")
            .with_secondary_label(Span::new(21, 22), "first declared here");
        assert_eq!(
            emit_plain(source, &[diag]),
            "error[E2001]: [3:7] `a` is already declared in this scope\n  --> [2:7] first declared here\nerror: aborting due to 1 previous error\n"
        );
    }

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.should_use_colors(true));
        assert!(!ColorMode::Auto.should_use_colors(false));
        assert!(ColorMode::Always.should_use_colors(false));
        assert!(!ColorMode::Never.should_use_colors(true));
    }

    #[test]
    fn colored_output_wraps_the_error_tag() {
        let mut emitter =
            TerminalEmitter::with_color_mode(Vec::new(), "x", ColorMode::Always, false);
        emitter.emit(&Diagnostic::error(ErrorCode::E0001).with_message("bad"));
        let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
        assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
    }
}
