//! The `check` command: report static errors without running anything.

use std::path::Path;

use tern_diagnostic::emitter::ColorMode;

use super::{read_file, report};
use crate::{check_source, CliError};

pub fn check_file(path: &Path, color: ColorMode) -> Result<(), CliError> {
    let source = read_file(path)?;
    let diagnostics = check_source(&source);
    if diagnostics.is_empty() {
        println!("{}: no errors found", path.display());
        Ok(())
    } else {
        Err(report(&source, &diagnostics, color))
    }
}
