//! nullsafe-strings - Null-safe string helpers that never fail on common edge cases
//!
//! This library provides:
//! - Null/empty normalization over `Option<&str>`
//! - Padding and bounded repetition
//! - Longest common prefix/suffix that never splits a character
//! - Lenient `%s` template formatting tolerant of argument count mismatches
//! - UTF-16 code unit variants with surrogate pair safety
//!
//! All operations are pure and synchronous; only `repeat` can fail.

pub mod config;
pub mod error;
pub mod logging;
pub mod strings;

// Re-export main types for convenience
pub use crate::config::{ConfigOverrides, StringsConfig};
pub use crate::error::{StringsError, StringsResult};
pub use crate::strings::utf16::Utf16Utils;
pub use crate::strings::{FormatConfig, LenientFormatter, RepeatConfig, StringUtils};
