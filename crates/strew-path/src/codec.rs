//! Reversible escaping of a tree-path segment.
//!
//! The escape character is escaped first so that separators introduced by
//! the second substitution cannot collide with pre-existing `%` runs.
//! Both functions are total; `decode(encode(s)) == s` for every string.

/// Escape a segment so it contains no `/`.
///
/// `%` becomes `%25`, then `/` becomes `%2F`.
pub fn encode(segment: &str) -> String {
    if !segment.contains('%') && !segment.contains('/') {
        return segment.to_string();
    }
    segment.replace('%', "%25").replace('/', "%2F")
}

/// Invert [`encode`]: `%2F` becomes `/`, then `%25` becomes `%`.
///
/// Substitutions run in the reverse order of encoding.
pub fn decode(segment: &str) -> String {
    if !segment.contains('%') {
        return segment.to_string();
    }
    segment.replace("%2F", "/").replace("%25", "%")
}
