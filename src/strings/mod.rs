//! Null-safe string helpers.
//!
//! Every operation is an associated function on [`StringUtils`]. The `impl`
//! blocks live next to the code they expose, one module per concern.

pub mod affix;
pub mod format;
pub mod nulls;
pub mod padding;
pub mod repeat;
pub mod utf16;

pub use format::{FormatConfig, LenientFormatter};
pub use repeat::RepeatConfig;

/// String utility functions
pub struct StringUtils;
