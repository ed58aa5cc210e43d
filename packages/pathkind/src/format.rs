//! Fixed-width rendering of paths for display.

use std::borrow::Cow;

use crate::{error::FormatError, rules::is_separator};

/// Marks the part of a path removed by [`compact`].
pub const ELLIPSIS: &str = "...";

/// Shorten `path` to at most `width` characters.
///
/// Paths that already fit are returned unchanged. Longer paths keep their
/// last component (with its leading separator) and as much of the start as
/// fits, joined by [`ELLIPSIS`]: `C:\path\to\a\file.txt` at width 20 is
/// `C:\path\...\file.txt`. If the last component alone does not fit, the
/// ellipsis and the component are cut off at `width`.
///
/// A compacted result is always exactly `width` characters, so the prefix is
/// cut by character rather than at a separator: at width 13 the anchor
/// shrinks to `C...\file.txt` instead of the shorter `...\file.txt`.
pub fn compact(path: &str, width: i32) -> Result<Cow<'_, str>, FormatError> {
    if width <= 0 || width == i32::MAX {
        return Err(FormatError::Range {
            width: width.into(),
        });
    }

    let width = width.unsigned_abs() as usize;
    if path.chars().count() <= width {
        return Ok(Cow::Borrowed(path));
    }

    let tail = match path.trim_end_matches(is_separator).rfind(is_separator) {
        Some(index) => &path[index..],
        None => path,
    };
    let tail_len = tail.chars().count();
    let ellipsis_len = ELLIPSIS.chars().count();

    if ellipsis_len + tail_len > width {
        let truncated = ELLIPSIS.chars().chain(tail.chars()).take(width).collect::<String>();
        return Ok(Cow::Owned(truncated));
    }

    let prefix = path
        .chars()
        .take(width - ellipsis_len - tail_len)
        .collect::<String>();
    Ok(Cow::Owned(format!("{prefix}{ELLIPSIS}{tail}")))
}

/// Render `path` according to a format string.
///
/// A blank format string renders the path as is; otherwise the format
/// string is a width for [`compact`].
pub fn format_spec<'a>(path: &'a str, spec: &str) -> Result<Cow<'a, str>, FormatError> {
    let trimmed = spec.trim();
    if trimmed.is_empty() {
        return Ok(Cow::Borrowed(path));
    }

    let width = trimmed.parse::<i64>().map_err(|_| FormatError::Parse {
        spec: spec.to_owned(),
    })?;
    let width = i32::try_from(width).map_err(|_| FormatError::Range { width })?;
    compact(path, width)
}
