use std::borrow::Cow;

use super::StringUtils;

impl StringUtils {
    /// Prepend `pad_char` until `text` is at least `min_length` characters long.
    ///
    /// Length is counted in `char`s, so `"é"` has length 1. Text that is
    /// already long enough, or a zero or negative `min_length`, is returned
    /// borrowed and unchanged.
    pub fn pad_start(text: &str, min_length: isize, pad_char: char) -> Cow<'_, str> {
        match padding_needed(text, min_length) {
            0 => Cow::Borrowed(text),
            missing => {
                let mut padded = String::with_capacity(text.len() + missing * pad_char.len_utf8());
                padded.extend(std::iter::repeat(pad_char).take(missing));
                padded.push_str(text);
                Cow::Owned(padded)
            }
        }
    }

    /// Append `pad_char` until `text` is at least `min_length` characters long.
    ///
    /// Same length convention as [`StringUtils::pad_start`].
    pub fn pad_end(text: &str, min_length: isize, pad_char: char) -> Cow<'_, str> {
        match padding_needed(text, min_length) {
            0 => Cow::Borrowed(text),
            missing => {
                let mut padded = String::with_capacity(text.len() + missing * pad_char.len_utf8());
                padded.push_str(text);
                padded.extend(std::iter::repeat(pad_char).take(missing));
                Cow::Owned(padded)
            }
        }
    }
}

/// Number of pad characters required to reach `min_length`
fn padding_needed(text: &str, min_length: isize) -> usize {
    let Ok(min_length) = usize::try_from(min_length) else {
        return 0;
    };
    min_length.saturating_sub(text.chars().count())
}
