//! Case-insensitive comparison of raw path strings.
//!
//! Every path type compares, hashes, and orders through these functions so
//! that the three always agree with each other.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::path::TypedPath;

/// Fold a character to its simple uppercase form.
///
/// Characters whose uppercase form expands to several characters (`ß`) are
/// left as they are, so folding never changes the character count.
pub fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Ordinal comparison of the folded characters of both strings.
pub fn ordinal_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

/// Whether both strings are equal after folding.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold).eq(b.chars().map(fold))
}

/// Hash the folded characters of the string.
///
/// Strings that are [`eq_ignore_case`] hash identically.
pub fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for c in s.chars() {
        fold(c).hash(state);
    }
    state.write_u8(0xff);
}

/// Natural ("logical") comparison: runs of ASCII digits compare by their
/// numeric value, everything else compares case-insensitively.
///
/// Digit runs may be arbitrarily long; leading zeros are ignored, so `a01`
/// and `a1` are equal under this order.
pub fn logical(a: &str, b: &str) -> Ordering {
    let (mut i, mut j) = (0, 0);
    loop {
        let (x, y) = match (a[i..].chars().next(), b[j..].chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };

        if x.is_ascii_digit() && y.is_ascii_digit() {
            let run_a = digit_run(&a[i..]);
            let run_b = digit_run(&b[j..]);
            i += run_a.len();
            j += run_b.len();

            let (num_a, num_b) = (run_a.trim_start_matches('0'), run_b.trim_start_matches('0'));
            match num_a.len().cmp(&num_b.len()).then_with(|| num_a.cmp(num_b)) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }

        match fold(x).cmp(&fold(y)) {
            Ordering::Equal => {
                i += x.len_utf8();
                j += y.len_utf8();
            }
            ordering => return ordering,
        }
    }
}

fn digit_run(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// A comparator over path values of a single type.
///
/// Useful where the ordering is chosen at runtime, for example when the
/// caller decides how a listing is sorted.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PathComparer {
    /// The default case-insensitive ordinal order, as used by [`Ord`].
    #[default]
    Default,

    /// The natural order, see [`logical`].
    Logical,
}

impl PathComparer {
    /// Compare two paths of the same type.
    pub fn compare<B, T>(self, a: &TypedPath<B, T>, b: &TypedPath<B, T>) -> Ordering {
        match self {
            PathComparer::Default => ordinal_ignore_case(a.as_str(), b.as_str()),
            PathComparer::Logical => logical(a.as_str(), b.as_str()),
        }
    }

    /// Compare two optional paths of the same type; `None` sorts first.
    pub fn compare_option<B, T>(
        self,
        a: Option<&TypedPath<B, T>>,
        b: Option<&TypedPath<B, T>>,
    ) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }
}
