//! Quoting of arbitrary values in user-facing messages.

pub use os_display::Quotable;
