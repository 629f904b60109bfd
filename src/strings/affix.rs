//! Longest common prefix and suffix of two strings.
//!
//! Both scans compare raw UTF-8 bytes, then move the cut point back onto a
//! `char` boundary of both inputs. Two different characters can share leading
//! bytes (`é` is `C3 A9`, `è` is `C3 A8`) or trailing bytes (`é` and `©` both
//! end in `A9`), so a byte-level match may stop inside a character. At most
//! three bytes are given back.

use tracing::trace;

use super::StringUtils;

impl StringUtils {
    /// Longest string that is a prefix of both `a` and `b`.
    ///
    /// The result borrows from `a` and never ends inside a character.
    pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
        let mut cut = a
            .bytes()
            .zip(b.bytes())
            .take_while(|(x, y)| x == y)
            .count();

        if !(a.is_char_boundary(cut) && b.is_char_boundary(cut)) {
            trace!("Common prefix cut at byte {} splits a character", cut);
            while !(a.is_char_boundary(cut) && b.is_char_boundary(cut)) {
                cut -= 1;
            }
        }

        &a[..cut]
    }

    /// Longest string that is a suffix of both `a` and `b`.
    ///
    /// The result borrows from `a` and never starts inside a character.
    pub fn common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
        let mut len = a
            .bytes()
            .rev()
            .zip(b.bytes().rev())
            .take_while(|(x, y)| x == y)
            .count();

        let splits =
            |len: usize| !(a.is_char_boundary(a.len() - len) && b.is_char_boundary(b.len() - len));
        if splits(len) {
            trace!("Common suffix of {} bytes starts inside a character", len);
            while splits(len) {
                len -= 1;
            }
        }

        &a[a.len() - len..]
    }
}
