// Modules gated behind cargo features, so commands only pull in what they use.

#[cfg(feature = "entries")]
pub mod entries;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(feature = "time")]
pub mod time;
