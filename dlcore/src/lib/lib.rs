//! Shared plumbing for the `dirlist` workspace: error conventions, message
//! macros, and small feature-gated helpers (user/group lookups, permission
//! strings, timestamp formatting).

#[macro_use]
pub mod macros;

mod features;
mod mods;

pub use crate::mods::display;
pub use crate::mods::error;

#[cfg(feature = "entries")]
pub use crate::features::entries;
#[cfg(feature = "fs")]
pub use crate::features::fs;
#[cfg(feature = "time")]
pub use crate::features::time;

#[cfg(feature = "entries")]
pub use libc;

use std::ffi::OsString;
use std::path::Path;
use std::sync::OnceLock;

pub trait Args: Iterator<Item = OsString> + Sized {}
impl<T: Iterator<Item = OsString> + Sized> Args for T {}

/// Returns an iterator over the command line arguments of the process.
pub fn args_os() -> impl Args {
    std::env::args_os()
}

/// Name this binary was invoked as, used as the prefix of diagnostics.
pub fn util_name() -> &'static str {
    static NAME: OnceLock<String> = OnceLock::new();
    NAME.get_or_init(|| {
        std::env::args_os()
            .next()
            .as_deref()
            .and_then(|argv0| Path::new(argv0).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("dirlist"))
    })
}
