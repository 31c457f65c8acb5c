//! Exclude pattern matching against entry base names
//!
//! A pattern without `*` must equal the base name exactly. A pattern with
//! `*` is turned into an anchored regular expression where each `*` becomes
//! `.*`. Nothing else in the pattern is escaped, so `.` in `*.log` matches any
//! character and a pattern like `a(b*` does not compile at all.

use regex::Regex;
use std::io;

/// A single compiled exclude rule
#[derive(Debug, Clone)]
enum Rule {
    Exact(String),
    Glob(Regex),
}

impl Rule {
    fn matches(&self, name: &str) -> bool {
        match *self {
            Self::Exact(ref exact) => exact == name,
            Self::Glob(ref regex) => regex.is_match(name),
        }
    }
}

/// Compiled set of exclude patterns
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    rules: Vec<Rule>,
}

impl ExcludeMatcher {
    /// Compile the given patterns, in order
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error naming the first glob pattern that is
    /// not a valid expression once translated.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> io::Result<Self> {
        let rules = patterns
            .iter()
            .map(|pattern| compile_rule(pattern.as_ref()))
            .collect::<io::Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Whether no pattern was given
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether any pattern matches the base name `name`
    #[must_use]
    #[inline]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(name))
    }
}

fn compile_rule(pattern: &str) -> io::Result<Rule> {
    if !pattern.contains('*') {
        return Ok(Rule::Exact(pattern.to_owned()));
    }

    let expression = format!("^{}$", pattern.replace('*', ".*"));
    Regex::new(&expression).map(Rule::Glob).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid exclude pattern '{pattern}': {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let matcher = ExcludeMatcher::new(&["node_modules"]).unwrap();
        assert!(matcher.is_excluded("node_modules"));
        assert!(!matcher.is_excluded("node_modules_old"));
        assert!(!matcher.is_excluded("my_node_modules"));
    }

    #[test]
    fn test_exact_match_keeps_dot_literal() {
        let matcher = ExcludeMatcher::new(&["file.txt"]).unwrap();
        assert!(matcher.is_excluded("file.txt"));
        assert!(!matcher.is_excluded("fileXtxt"));
    }

    #[test]
    fn test_glob_is_anchored() {
        let matcher = ExcludeMatcher::new(&["*.log"]).unwrap();
        assert!(matcher.is_excluded("debug.log"));
        assert!(matcher.is_excluded(".log"));
        assert!(!matcher.is_excluded("debug.log.bak"));
    }

    #[test]
    fn test_glob_dot_is_not_escaped() {
        let matcher = ExcludeMatcher::new(&["*.log"]).unwrap();
        assert!(matcher.is_excluded("debug_log"));
    }

    #[test]
    fn test_glob_in_the_middle() {
        let matcher = ExcludeMatcher::new(&["build*cache"]).unwrap();
        assert!(matcher.is_excluded("buildcache"));
        assert!(matcher.is_excluded("build-tmp-cache"));
        assert!(!matcher.is_excluded("rebuildcache"));
    }

    #[test]
    fn test_any_pattern_excludes() {
        let matcher = ExcludeMatcher::new(&[".git", "*.tmp", "target"]).unwrap();
        assert!(matcher.is_excluded(".git"));
        assert!(matcher.is_excluded("a.tmp"));
        assert!(matcher.is_excluded("target"));
        assert!(!matcher.is_excluded("src"));
    }

    #[test]
    fn test_empty_matcher_excludes_nothing() {
        let matcher = ExcludeMatcher::new::<&str>(&[]).unwrap();
        assert!(matcher.is_empty());
        assert!(!matcher.is_excluded("anything"));
    }

    #[test]
    fn test_broken_glob_is_rejected() {
        let err = ExcludeMatcher::new(&["a(b*"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("a(b*"));
    }

    #[test]
    fn test_broken_exact_pattern_is_fine() {
        let matcher = ExcludeMatcher::new(&["a(b"]).unwrap();
        assert!(matcher.is_excluded("a(b"));
    }
}
