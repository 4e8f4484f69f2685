//! Failures of a CLI command.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a command did not succeed.
///
/// Diagnostics have already been written to stderr by the time a
/// `Reported` error comes back; it only carries the count for the exit path.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{count} error{} reported", plural_s(.count))]
    Reported { count: usize },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing {what}; usage: {usage}")]
    Usage { what: &'static str, usage: &'static str },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "the derived Display passes fields by reference"
)]
fn plural_s(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

impl CliError {
    /// Map a failed read of `path` to the most helpful variant.
    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            _ => CliError::Read { path, source },
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage { .. } | CliError::UnknownCommand(_) => 2,
            _ => 1,
        }
    }
}
