//! Stderr reporting macros. All of them prefix messages with [`crate::util_name`].

/// Print a non-fatal error and record its exit code, without interrupting
/// the current operation.
#[macro_export]
macro_rules! show {
    ($err:expr) => {{
        let e = $err;
        $crate::error::set_exit_code(e.code());
        eprintln!("{}: {}", $crate::util_name(), e);
    }};
}

/// Print a formatted error message to stderr.
#[macro_export]
macro_rules! show_error {
    ($($args:tt)+) => {{
        eprint!("{}: ", $crate::util_name());
        eprintln!($($args)+);
    }};
}

/// Print a formatted warning to stderr.
#[macro_export]
macro_rules! show_warning {
    ($($args:tt)+) => {{
        eprint!("{}: warning: ", $crate::util_name());
        eprintln!($($args)+);
    }};
}
