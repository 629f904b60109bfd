//! The same helpers over UTF-16 code units.
//!
//! Lengths here count code units, so a supplementary character such as
//! U+1D306 has length 2. A high/low surrogate pair is never split by a
//! returned slice. Unpaired surrogates are compared like any other unit.

use std::borrow::Cow;

use tracing::trace;

/// UTF-16 code unit utility functions
pub struct Utf16Utils;

impl Utf16Utils {
    /// Encode `text` as UTF-16 code units
    pub fn encode(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    /// Decode code units, replacing unpaired surrogates with U+FFFD
    pub fn decode_lossy(units: &[u16]) -> String {
        String::from_utf16_lossy(units)
    }

    /// Check if `units[index]` is a high surrogate followed by a low surrogate
    pub fn is_valid_surrogate_pair_at(units: &[u16], index: usize) -> bool {
        match (units.get(index), units.get(index + 1)) {
            (Some(&high), Some(&low)) => is_high_surrogate(high) && is_low_surrogate(low),
            _ => false,
        }
    }

    /// Longest slice that is a prefix of both `a` and `b`.
    ///
    /// If the first mismatch falls between the two halves of a surrogate pair
    /// in either input, the high surrogate is dropped from the match.
    pub fn common_prefix<'a>(a: &'a [u16], b: &[u16]) -> &'a [u16] {
        let mut cut = a.iter().zip(b).take_while(|(x, y)| x == y).count();

        if let Some(before) = cut.checked_sub(1) {
            if Self::is_valid_surrogate_pair_at(a, before) || Self::is_valid_surrogate_pair_at(b, before) {
                trace!("Common prefix cut at unit {} splits a surrogate pair", cut);
                cut = before;
            }
        }

        &a[..cut]
    }

    /// Longest slice that is a suffix of both `a` and `b`.
    ///
    /// If the match would start on the low half of a surrogate pair in either
    /// input, that low surrogate is dropped from the match.
    pub fn common_suffix<'a>(a: &'a [u16], b: &[u16]) -> &'a [u16] {
        let mut len = a
            .iter()
            .rev()
            .zip(b.iter().rev())
            .take_while(|(x, y)| x == y)
            .count();

        let straddles = |units: &[u16]| {
            (units.len() - len)
                .checked_sub(1)
                .map_or(false, |index| Self::is_valid_surrogate_pair_at(units, index))
        };
        if len > 0 && (straddles(a) || straddles(b)) {
            trace!("Common suffix of {} units starts inside a surrogate pair", len);
            len -= 1;
        }

        &a[a.len() - len..]
    }

    /// Prepend `pad` until `units` is at least `min_length` code units long
    pub fn pad_start(units: &[u16], min_length: isize, pad: u16) -> Cow<'_, [u16]> {
        match padding_needed(units, min_length) {
            0 => Cow::Borrowed(units),
            missing => {
                let mut padded = Vec::with_capacity(units.len() + missing);
                padded.resize(missing, pad);
                padded.extend_from_slice(units);
                Cow::Owned(padded)
            }
        }
    }

    /// Append `pad` until `units` is at least `min_length` code units long
    pub fn pad_end(units: &[u16], min_length: isize, pad: u16) -> Cow<'_, [u16]> {
        match padding_needed(units, min_length) {
            0 => Cow::Borrowed(units),
            missing => {
                let mut padded = Vec::with_capacity(units.len() + missing);
                padded.extend_from_slice(units);
                padded.resize(units.len() + missing, pad);
                Cow::Owned(padded)
            }
        }
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

fn padding_needed(units: &[u16], min_length: isize) -> usize {
    usize::try_from(min_length)
        .map_or(0, |min_length| min_length.saturating_sub(units.len()))
}
