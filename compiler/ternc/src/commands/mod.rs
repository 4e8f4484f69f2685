//! Command handlers for the `tern` binary.
//!
//! Every handler reads its file, does its work, and writes any diagnostics
//! to stderr before returning [`CliError::Reported`].

use std::io::IsTerminal;
use std::path::Path;

use tern_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tern_diagnostic::Diagnostic;

use crate::CliError;

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{ast_listing, lex_file, parse_file, token_listing};
pub use run::run_file;

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::read(path.to_path_buf(), err))
}

/// Write `diagnostics` against `source` to stderr, then a summary line.
pub(crate) fn report(source: &str, diagnostics: &[Diagnostic], color: ColorMode) -> CliError {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(source, color, is_tty);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
    CliError::Reported {
        count: diagnostics.len(),
    }
}
