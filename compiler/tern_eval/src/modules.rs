//! Standard modules reachable through `import`.

use rustc_hash::FxHashMap;
use tern_ir::Name;

use crate::errors::EvalError;
use crate::print_handler::PrintHandlerImpl;
use crate::value::{BuiltinFn, Value};

/// Build the module registered under `path`, or `None` if there is none.
pub fn load(path: &str) -> Option<Value> {
    match path {
        "fmt" => Some(native_module(
            "fmt",
            &[("print", fmt_print), ("println", fmt_println)],
        )),
        _ => None,
    }
}

fn native_module(name: &'static str, functions: &[(&'static str, BuiltinFn)]) -> Value {
    let exports: FxHashMap<Name, Value> = functions
        .iter()
        .map(|&(fn_name, func)| (Name::new(fn_name), Value::builtin(fn_name, func)))
        .collect();
    Value::module(Name::new(name), exports)
}

fn concat(args: &[Value]) -> String {
    args.iter().map(ToString::to_string).collect()
}

/// `fmt.print(args...)`: every argument displayed, no separator, no newline.
fn fmt_print(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
    out.print(&concat(args));
    Ok(Value::Nil)
}

/// `fmt.println(args...)`: as `fmt.print`, followed by a newline.
fn fmt_println(args: &[Value], out: &PrintHandlerImpl) -> Result<Value, EvalError> {
    out.println(&concat(args));
    Ok(Value::Nil)
}
