//! Where `print` output goes.
//!
//! - Stdout: the CLI default
//! - Buffer: captured for tests and embedding
//! - Silent: discarded
//!
//! Enum dispatch rather than a trait object; this sits on the path of every
//! `print` statement.

use std::io::Write;
use std::rc::Rc;

use parking_lot::Mutex;

/// Writes straight to stdout, flushing after unterminated writes so
/// `fmt.print` output shows up before a REPL prompt.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        // Nothing sensible to do if stdout is gone.
        let _ = out.write_all(msg.as_bytes());
        let _ = out.flush();
    }
}

/// Captures output into a buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between an interpreter and whoever reads its output.
pub type SharedPrintHandler = Rc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Silent)
}
