use regex::Regex;

/// Anchored single-level glob over a full source path.
///
/// The only wildcard is `*`, which matches any run of characters not
/// containing the path separator. Everything else matches literally, and
/// the pattern must cover the entire path: `"/users/*"` matches
/// `"/users/alice"` but neither `"/users/alice/name"` nor
/// `"prefix/users/alice"`.
#[derive(Clone, Debug)]
pub struct Glob {
    pattern: String,
    matcher: Regex,
}

impl Glob {
    /// Compile a glob pattern.
    ///
    /// Literal runs are regex-escaped and `*` becomes `[^/]*`, so
    /// compilation cannot fail for any input pattern.
    pub fn new(pattern: &str) -> Self {
        let mut source = String::with_capacity(pattern.len() + 8);
        source.push('^');
        for (i, literal) in pattern.split('*').enumerate() {
            if i > 0 {
                source.push_str("[^/]*");
            }
            source.push_str(&regex::escape(literal));
        }
        source.push('$');
        let matcher = Regex::new(&source).expect("escaped glob compiles");
        Self {
            pattern: pattern.to_string(),
            matcher,
        }
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match `path` against the whole pattern.
    pub fn is_match(&self, path: &str) -> bool {
        self.matcher.is_match(path)
    }
}
