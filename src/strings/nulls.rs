use super::StringUtils;

impl StringUtils {
    /// Return `text`, or `""` when it is absent
    pub fn null_to_empty(text: Option<&str>) -> &str {
        text.unwrap_or("")
    }

    /// Return `None` when `text` is empty, otherwise `text` unchanged
    pub fn empty_to_null(text: Option<&str>) -> Option<&str> {
        text.filter(|s| !s.is_empty())
    }

    /// Check if `text` is absent or has zero length.
    ///
    /// No trimming happens: `" "` is not empty.
    pub fn is_null_or_empty(text: Option<&str>) -> bool {
        text.map_or(true, str::is_empty)
    }
}
