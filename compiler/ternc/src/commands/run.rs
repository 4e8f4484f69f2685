//! The `run` command: evaluate a Tern source file.

use std::path::Path;

use tern_diagnostic::emitter::ColorMode;
use tern_eval::Interpreter;

use super::{read_file, report};
use crate::{run_source, CliError};

/// Run `path` with output going to stdout.
///
/// Nothing is evaluated if any stage before evaluation reports an error.
pub fn run_file(path: &Path, color: ColorMode) -> Result<(), CliError> {
    let source = read_file(path)?;
    tracing::debug!(path = %path.display(), "run");
    let mut interpreter = Interpreter::new();
    run_source(&source, &mut interpreter)
        .map(drop)
        .map_err(|diagnostics| report(&source, &diagnostics, color))
}
