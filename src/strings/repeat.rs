use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::StringUtils;
use crate::error::{StringsError, StringsResult};

/// Largest string, in bytes, the platform can represent
pub const PLATFORM_MAX_LEN: usize = isize::MAX as usize;

/// Repetition limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatConfig {
    /// Maximum result length in bytes
    pub max_len: usize,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self { max_len: PLATFORM_MAX_LEN }
    }
}

impl RepeatConfig {
    /// Repeat `text` under this configuration's length limit
    pub fn repeat<'a>(&self, text: &'a str, count: i64) -> StringsResult<Cow<'a, str>> {
        StringUtils::repeat_with_limit(text, count, self.max_len)
    }
}

impl StringUtils {
    /// Concatenate `count` copies of `text`.
    ///
    /// Fails with `InvalidArgument` for a negative count and with
    /// `CapacityExceeded` when the result would be longer than the platform
    /// allows. Both are detected before anything is allocated.
    pub fn repeat(text: &str, count: i64) -> StringsResult<Cow<'_, str>> {
        Self::repeat_with_limit(text, count, PLATFORM_MAX_LEN)
    }

    /// Like [`StringUtils::repeat`] with an explicit result limit in bytes
    pub fn repeat_with_limit(text: &str, count: i64, max_len: usize) -> StringsResult<Cow<'_, str>> {
        if count < 0 {
            debug!("Rejected repeat with negative count: {}", count);
            return Err(StringsError::invalid_argument(format!(
                "count cannot be negative: {}",
                count
            )));
        }

        if count == 0 || text.is_empty() {
            return Ok(Cow::Borrowed(""));
        }

        let limit = max_len.min(PLATFORM_MAX_LEN);
        // u128 holds any usize * i64 product without wrapping
        let requested = text.len() as u128 * count as u128;
        if requested > limit as u128 {
            debug!(
                "Rejected repeat of {} bytes x {}: {} bytes exceeds limit {}",
                text.len(),
                count,
                requested,
                limit
            );
            return Err(StringsError::capacity_exceeded(requested, limit));
        }

        if count == 1 {
            return Ok(Cow::Borrowed(text));
        }

        // requested fits in usize, so count does too
        Ok(Cow::Owned(text.repeat(count as usize)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat() {
        assert_eq!(StringUtils::repeat("abc", 1).unwrap(), "abc");
        assert_eq!(StringUtils::repeat("abc", 2).unwrap(), "abcabc");
        assert_eq!(StringUtils::repeat("abc", 3).unwrap(), "abcabcabc");
        assert_eq!(StringUtils::repeat("a", 6).unwrap(), "aaaaaa");
        assert_eq!(StringUtils::repeat("é", 3).unwrap(), "ééé");
    }

    #[test]
    fn test_repeat_empty() {
        assert_eq!(StringUtils::repeat("", 0).unwrap(), "");
        assert_eq!(StringUtils::repeat("abc", 0).unwrap(), "");
        assert_eq!(StringUtils::repeat("", 5).unwrap(), "");
        assert_eq!(StringUtils::repeat("", i64::MAX).unwrap(), "");
    }

    #[test]
    fn test_repeat_negative_count() {
        let err = StringUtils::repeat("abc", -1).unwrap_err();
        assert!(matches!(err, StringsError::InvalidArgument { .. }));
        assert!(err.to_string().contains("-1"));

        // Negative count wins even for empty text
        assert!(matches!(
            StringUtils::repeat("", -3),
            Err(StringsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_repeat_capacity_exceeded() {
        let err = StringUtils::repeat("abc", i64::MAX).unwrap_err();
        assert_eq!(
            err,
            StringsError::CapacityExceeded {
                requested: 3 * i64::MAX as u128,
                limit: PLATFORM_MAX_LEN,
            }
        );
    }

    #[test]
    fn test_repeat_with_limit() {
        assert_eq!(StringUtils::repeat_with_limit("ab", 4, 8).unwrap(), "abababab");

        let err = StringUtils::repeat_with_limit("ab", 5, 8).unwrap_err();
        assert_eq!(err, StringsError::capacity_exceeded(10, 8));

        assert!(matches!(
            StringUtils::repeat_with_limit("a", i32::MAX as i64, 1 << 20),
            Err(StringsError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_repeat_config() {
        let config = RepeatConfig { max_len: 4 };
        assert_eq!(config.repeat("xy", 2).unwrap(), "xyxy");
        assert!(config.repeat("xy", 3).is_err());
        assert!(config.repeat("hello", 1).is_err());

        assert_eq!(RepeatConfig::default().max_len, PLATFORM_MAX_LEN);
    }
}
