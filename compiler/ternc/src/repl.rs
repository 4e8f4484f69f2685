//! Interactive read-eval-print loop.
//!
//! Each line is compiled and run as its own program against one long-lived
//! [`Interpreter`], so bindings from earlier lines stay visible. Lines that
//! fail to compile or run report their diagnostics and leave the session
//! intact.

use std::io::{self, BufRead, IsTerminal, Write};

use tern_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tern_diagnostic::Diagnostic;
use tern_eval::{builtins, Interpreter, Value};

use crate::run_source;

pub const PROMPT: &str = "> ";

const HELP: &str = "\
Enter a statement to run it. Non-nil results are echoed.
  :help       show this message
  :quit       leave (also `exit` or end of input)
Modules: import fmt \"fmt\"";

pub struct Repl {
    interpreter: Interpreter,
    color: ColorMode,
    is_tty: bool,
}

impl Repl {
    /// A session printing program output to stdout.
    pub fn new(color: ColorMode) -> Self {
        Self::with_interpreter(Interpreter::new(), color)
    }

    pub fn with_interpreter(interpreter: Interpreter, color: ColorMode) -> Self {
        Repl {
            interpreter,
            color,
            is_tty: io::stdout().is_terminal(),
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Run one line. `Ok(None)` means the line produced nil.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Value>, Vec<Diagnostic>> {
        let value = run_source(line, &mut self.interpreter)?;
        Ok(match value {
            Value::Nil => None,
            other => Some(other),
        })
    }

    /// Read lines from `input` until end of input or `:quit`.
    ///
    /// Prompts, echoed results and diagnostics go to `output`.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                writeln!(output)?;
                return Ok(());
            };

            match line.trim() {
                "" => {}
                ":quit" | ":q" | "exit" => return Ok(()),
                ":help" => {
                    writeln!(output, "{HELP}")?;
                    let names: Vec<&str> = builtins::names().collect();
                    writeln!(output, "Builtins: {}", names.join(", "))?;
                }
                source => match self.eval_line(source) {
                    Ok(Some(value)) => writeln!(output, "{}", value.repr())?,
                    Ok(None) => {}
                    Err(diagnostics) => {
                        tracing::debug!(count = diagnostics.len(), "line failed");
                        let mut emitter = TerminalEmitter::with_color_mode(
                            &mut *output,
                            source,
                            self.color,
                            self.is_tty,
                        );
                        emitter.emit_all(&diagnostics);
                        emitter.flush();
                    }
                },
            }
        }
    }
}
