//! Syntactic rules for raw path strings.
//!
//! Nothing in this module touches the filesystem: every check is pure string
//! inspection. The rules follow Windows path syntax (drive letters, UNC
//! roots, both `\` and `/` as separators) and are evaluated the same way on
//! every host. POSIX absolute paths (`/tmp/x`) are rooted under these rules
//! as well, so values built from them work with the host filesystem.

use std::{ops::BitOr, path::MAIN_SEPARATOR};

use crate::error::{InvalidCharacterError, Mismatch, PathError};

/// Characters that are never valid anywhere in a path,
/// in addition to the control characters `U+0000..=U+001F`.
pub const INVALID_PATH_CHARS: &[char] = &['"', '<', '>', '|', '*', '?'];

/// A composable set of requirements a raw string must satisfy.
///
/// Each marker in [`crate::path`] contributes its own rules; the rules for a
/// concrete path type are the union of the rules of its base and its type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Rules(u8);

impl Rules {
    /// No requirements beyond the invalid character check.
    pub const NONE: Rules = Rules(0);

    /// The string must be a bare name: no separators and no volume colon.
    pub const FILE_NAME: Rules = Rules(1 << 0);

    /// The string must be rooted.
    pub const ROOTED: Rules = Rules(1 << 1);

    /// The string must not be rooted.
    pub const NOT_ROOTED: Rules = Rules(1 << 2);

    /// The string must not look like a directory.
    pub const FILE: Rules = Rules(1 << 3);

    /// The requirements of both sets.
    pub const fn union(self, other: Rules) -> Rules {
        Rules(self.0 | other.0)
    }

    /// Whether every requirement in `other` is also in `self`.
    pub const fn contains(self, other: Rules) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Rules {
    type Output = Rules;

    fn bitor(self, rhs: Rules) -> Rules {
        self.union(rhs)
    }
}

/// Check `path` against `rules`, reporting failures against `argument`.
///
/// Checks run in a fixed order: presence, invalid characters (the first
/// offending character wins), rootedness, bare-name structure, and finally
/// whether the string looks like a file.
pub fn check(path: Option<&str>, argument: &'static str, rules: Rules) -> Result<(), PathError> {
    let Some(path) = path else {
        return Err(PathError::MissingArgument { argument });
    };

    if let Some(character) = path.chars().find(|&c| is_invalid_path_char(c)) {
        return Err(InvalidCharacterError {
            character,
            argument,
        }
        .into());
    }

    if rules.contains(Rules::NOT_ROOTED) && is_rooted(path) {
        return Err(PathError::mismatch(Mismatch::ExpectedRelative, argument));
    }

    if rules.contains(Rules::ROOTED) && !is_rooted(path) {
        return Err(PathError::mismatch(Mismatch::ExpectedAbsolute, argument));
    }

    if rules.contains(Rules::FILE_NAME) && path.contains(is_name_delimiter) {
        return Err(PathError::mismatch(Mismatch::ExpectedFileName, argument));
    }

    if rules.contains(Rules::FILE) && looks_like_directory(path) {
        return Err(PathError::mismatch(Mismatch::ExpectedFile, argument));
    }

    Ok(())
}

/// Whether the character is never valid in a path.
pub fn is_invalid_path_char(c: char) -> bool {
    c <= '\u{1f}' || INVALID_PATH_CHARS.contains(&c)
}

/// Whether the character separates path components.
pub fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Whether the character ends a directory part: a separator or the volume colon.
fn is_name_delimiter(c: char) -> bool {
    is_separator(c) || c == ':'
}

/// Whether the string is anchored to a root: a leading separator
/// (including UNC `\\server`), or a drive letter.
pub fn is_rooted(path: &str) -> bool {
    root_len(path) > 0
}

/// The length in bytes of the root of the path, or zero if it is not rooted.
///
/// - `\\server\share\x` has the root `\\server\share`.
/// - `C:\x` has the root `C:\`, and `C:x` has the root `C:`.
/// - `\x` and `/x` have the root `\` and `/` respectively.
pub fn root_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    let sep = |b: &u8| *b == b'\\' || *b == b'/';
    match bytes {
        [a, b, ..] if sep(a) && sep(b) => bytes
            .iter()
            .enumerate()
            .skip(2)
            .filter(|(_, b)| sep(b))
            .nth(1)
            .map_or(bytes.len(), |(index, _)| index),
        [a, ..] if sep(a) => 1,
        [drive, b':', c, ..] if drive.is_ascii_alphabetic() && sep(c) => 3,
        [drive, b':', ..] if drive.is_ascii_alphabetic() => 2,
        _ => 0,
    }
}

/// Whether the string structurally looks like a directory
/// rather than a file.
///
/// This inspects at most the last three characters for a trailing
/// separator, a trailing colon, or a trailing `.`/`..` segment, then checks
/// whether the whole string is nothing but its root (`C:`, `\\server\share`).
pub fn looks_like_directory(path: &str) -> bool {
    let mut tail = path.chars().rev();
    for _ in 0..3 {
        match tail.next() {
            None => return true,
            Some(c) if is_name_delimiter(c) => return true,
            Some('.') => continue,
            Some(_) => break,
        }
    }

    root_len(path) == path.len()
}

/// The separator used when adding to `path`: the first separator the path
/// already uses, or the host's main separator if it has none.
pub fn preferred_separator(path: &str) -> char {
    path.chars().find(|&c| is_separator(c)).unwrap_or(MAIN_SEPARATOR)
}

/// Concatenate `relative` onto `base`, inserting a separator if needed.
///
/// Nothing is inserted after a base that already ends in a separator or
/// after a bare drive (`C:`).
pub fn combine(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_owned();
    }
    if base.is_empty() {
        return relative.to_owned();
    }

    let mut combined = String::with_capacity(base.len() + relative.len() + 1);
    combined.push_str(base);
    if !base.ends_with(is_name_delimiter) {
        combined.push(preferred_separator(base));
    }
    combined.push_str(relative);
    combined
}

/// Combine `relative` onto `base`, canonicalizing the result if `base` is
/// rooted.
///
/// Relative bases are not canonicalized: resolving `..` in a relative path
/// needs a working directory the caller has not provided.
pub fn join(base: &str, relative: &str) -> String {
    let combined = combine(base, relative);
    if is_rooted(base) {
        canonicalize(&combined)
    } else {
        combined
    }
}

/// Lexically resolve `.` and `..` segments, collapse repeated separators,
/// and normalize separators to the path's preferred separator.
///
/// `..` never climbs above the root. A trailing separator is kept.
pub fn canonicalize(path: &str) -> String {
    let separator = preferred_separator(path);
    let (root, rest) = path.split_at(fixed_root_len(path));

    let mut segments = Vec::new();
    for segment in rest.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    let mut canonical: String = root
        .chars()
        .map(|c| if is_separator(c) { separator } else { c })
        .collect();
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 || (!canonical.is_empty() && !canonical.ends_with(is_name_delimiter)) {
            canonical.push(separator);
        }
        canonical.push_str(segment);
    }
    if rest.ends_with(is_separator) && !canonical.is_empty() && !canonical.ends_with(separator) {
        canonical.push(separator);
    }
    canonical
}

/// The length of the root that canonicalization keeps as is.
///
/// This is [`root_len`], except that a UNC root only keeps server and share
/// names that are ordinary segments: in `\\server\..\x` the `..` is
/// resolved against `\\server` instead of being taken as the share.
fn fixed_root_len(path: &str) -> usize {
    let root = root_len(path);
    let mut chars = path.chars();
    let unc = chars.next().is_some_and(is_separator) && chars.next().is_some_and(is_separator);
    if !unc {
        return root;
    }

    let mut end = 2;
    for name in path[2..root].split(is_separator) {
        if matches!(name, "" | "." | "..") {
            break;
        }
        end += if end == 2 { name.len() } else { name.len() + 1 };
    }
    end
}

/// Trim trailing separators, never trimming into the root.
fn trim_end_separators(path: &str) -> &str {
    let root = root_len(path);
    let trimmed = path[root..].trim_end_matches(is_separator);
    &path[..root + trimmed.len()]
}

/// The directory part of the path, or `None` if there isn't one.
///
/// `C:\data\test.txt` has the parent `C:\data`, `C:\data` has the parent
/// `C:\`, and `C:\` has none. A relative path with one component has none.
pub fn parent(path: &str) -> Option<&str> {
    let root = root_len(path);
    let trimmed = trim_end_separators(path);
    if trimmed.len() <= root {
        return None;
    }

    let parent = match trimmed[root..].rfind(is_separator) {
        Some(index) => trim_end_separators(&trimmed[..root + index]),
        None => &trimmed[..root],
    };
    if parent.is_empty() { None } else { Some(parent) }
}

/// The final component of the path, ignoring trailing separators.
/// Empty if the path is only a root.
pub fn final_component(path: &str) -> &str {
    let root = root_len(path);
    let trimmed = trim_end_separators(path);
    let rest = &trimmed[root..];
    rest.rfind(is_name_delimiter)
        .map_or(rest, |index| &rest[index + 1..])
}

/// The byte index of the dot that starts the extension of the final
/// component, if it has one.
///
/// A name made only of dots up to its last dot (`.bashrc`, `...`) has no
/// extension.
pub fn extension_dot(path: &str) -> Option<usize> {
    let name_start = path.rfind(is_name_delimiter).map_or(0, |index| index + 1);
    let name = &path[name_start..];
    let dot = name.rfind('.')?;
    if name[..dot].chars().all(|c| c == '.') {
        return None;
    }
    Some(name_start + dot)
}
