//! `tern`: run, check and inspect Tern programs, or start a REPL.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use tern_diagnostic::emitter::ColorMode;
use ternc::commands::{check_file, lex_file, parse_file, run_file};
use ternc::repl::Repl;
use ternc::{tracing_setup, CliError};

fn main() -> ExitCode {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (flags, positional): (Vec<&str>, Vec<&str>) = args
        .iter()
        .map(String::as_str)
        .partition(|arg| arg.starts_with("--"));

    let no_color = flags.contains(&"--no-color")
        || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let color = if no_color {
        ColorMode::Never
    } else {
        ColorMode::Auto
    };

    if flags.contains(&"--help") {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if flags.contains(&"--version") {
        print_version();
        return ExitCode::SUCCESS;
    }
    if let Some(unknown) = flags.iter().find(|f| **f != "--no-color") {
        return fail(&CliError::UnknownCommand((*unknown).to_string()));
    }

    let result = match positional.as_slice() {
        [] | ["repl"] => start_repl(color),
        ["run", path] => run_file(Path::new(path), color),
        ["check", path] => check_file(Path::new(path), color),
        ["parse", path] => parse_file(Path::new(path), color),
        ["lex", path] => lex_file(Path::new(path), color),
        ["run" | "check" | "parse" | "lex"] => Err(CliError::Usage {
            what: "file path",
            usage: "tern <run|check|parse|lex> <file.tern>",
        }),
        ["help"] => {
            print_usage();
            Ok(())
        }
        ["version"] => {
            print_version();
            Ok(())
        }
        [path] if Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tern")) =>
        {
            run_file(Path::new(path), color)
        }
        [command, ..] => Err(CliError::UnknownCommand((*command).to_string())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn start_repl(color: ColorMode) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        println!("Tern {} (:help for help, :quit to exit)", env!("CARGO_PKG_VERSION"));
    }
    let mut repl = Repl::new(color);
    repl.run(stdin.lock(), &mut std::io::stdout())?;
    Ok(())
}

fn fail(err: &CliError) -> ExitCode {
    // Diagnostics were already written; the summary line said the rest.
    if !matches!(err, CliError::Reported { .. }) {
        eprintln!("error: {err}");
    }
    if matches!(err, CliError::UnknownCommand(_) | CliError::Usage { .. }) {
        eprintln!();
        print_usage_to_stderr();
    }
    ExitCode::from(err.exit_code())
}

const USAGE: &str = "\
Usage: tern [command] [options]

Commands:
  run <file.tern>     Run a program
  check <file.tern>   Report errors without running
  parse <file.tern>   Print the parsed program
  lex <file.tern>     Print the token stream
  repl                Start the interactive prompt (default)
  help                Show this message
  version             Show the version

Options:
  --no-color          Plain diagnostics (also when NO_COLOR is set)

Environment:
  TERN_LOG            Log filter, e.g. TERN_LOG=tern_eval=debug";

fn print_usage() {
    println!("{USAGE}");
}

fn print_usage_to_stderr() {
    eprintln!("{USAGE}");
}

fn print_version() {
    println!("tern {}", env!("CARGO_PKG_VERSION"));
}
