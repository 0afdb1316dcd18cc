//! Path patterns: literal bytes plus `*` (any run of bytes) and a trailing `$`
//! (end of path).
//!
//! The pattern is split on `*` into literal segments which are placed left to
//! right at their earliest occurrence. Earliest placement never rules out a
//! match that a later placement would allow, so each segment is searched once
//! and nothing is retried.

/// Matches `path` against `pattern`.
///
/// Returns the number of path bytes consumed by the match, or `None` if the
/// pattern does not match. Without a trailing `$` any suffix may follow the
/// consumed bytes; with it, the whole path is consumed. An empty pattern
/// matches everything with length 0.
pub fn match_path(pattern: &str, path: &str) -> Option<usize> {
    let (pattern, anchored) = match pattern.strip_suffix('$') {
        Some(pattern) => (pattern, true),
        None => (pattern, false),
    };

    let mut segments = pattern.split('*');
    // split always yields at least one segment
    let first = segments.next().unwrap_or_default();
    if !path.starts_with(first) {
        return None;
    }
    let mut position = first.len();

    let Some(mut last) = segments.next() else {
        return (!anchored || position == path.len()).then_some(position);
    };
    for segment in segments {
        position += path[position..].find(last)? + last.len();
        last = segment;
    }

    if anchored {
        let start = path.len().checked_sub(last.len())?;
        (start >= position && path.ends_with(last)).then_some(path.len())
    } else {
        let start = position + path[position..].find(last)?;
        Some(start + last.len())
    }
}

/// Whether `pattern` matches `path` at all.
pub fn matches_path(pattern: &str, path: &str) -> bool {
    match_path(pattern, path).is_some()
}
