//! Error conventions shared by the workspace.
//!
//! Commands return [`DlResult`], a `Result` over boxed [`DlError`] trait
//! objects, so every error carries the exit code it wants the process to end
//! with. Non-fatal errors are reported as they happen via [`crate::show!`],
//! which records the code in a process-wide cell that the binary shim reads
//! back on exit.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicI32, Ordering};

static EXIT_CODE: AtomicI32 = AtomicI32::new(0);

pub fn get_exit_code() -> i32 {
    EXIT_CODE.load(Ordering::SeqCst)
}

pub fn set_exit_code(code: i32) {
    EXIT_CODE.store(code, Ordering::SeqCst);
}

pub type DlResult<T> = Result<T, Box<dyn DlError>>;

/// An error with an associated process exit code.
pub trait DlError: Error + Send {
    fn code(&self) -> i32 {
        1
    }
}

impl<T: DlError + 'static> From<T> for Box<dyn DlError> {
    fn from(err: T) -> Self {
        Box::new(err)
    }
}

impl DlError for std::io::Error {}

/// A plain message with an explicit exit code.
#[derive(Debug)]
pub struct DlSimpleError {
    pub code: i32,
    pub message: String,
}

impl DlSimpleError {
    pub fn new<S: Into<String>>(code: i32, message: S) -> Box<dyn DlError> {
        Box::new(Self {
            code,
            message: message.into(),
        })
    }
}

impl Display for DlSimpleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for DlSimpleError {}

impl DlError for DlSimpleError {
    fn code(&self) -> i32 {
        self.code
    }
}
