//! Compilation of pattern lists into a single matcher.

use honq_core::{HonqError, Result, settings};
use regex::{Regex, RegexBuilder};
use std::fmt;
use tracing::debug;

/// A compiled alternation of regular expressions.
///
/// Patterns are joined into one regex. Without `exact`, the result is
/// `((p1)|(p2)|...)` and matches if any pattern occurs anywhere in the
/// text. With `exact`, every pattern is anchored on both ends first,
/// `((^p1$)|(^p2$)|...)`, so only whole-string matches count.
///
/// Case handling is fixed when the set is compiled.
///
/// # Examples
///
/// ```rust
/// use honq_query::filter::PatternSet;
///
/// let partial = PatternSet::compile_with_case(["temp"], false, false).unwrap();
/// assert!(partial.is_match("Temporal"));
///
/// let exact = PatternSet::compile_with_case(["temp"], true, false).unwrap();
/// assert!(exact.is_match("TEMP"));
/// assert!(!exact.is_match("temporal"));
/// ```
#[derive(Clone)]
pub struct PatternSet {
    /// Compiled alternation.
    regex: Regex,

    /// Patterns as given by the caller.
    patterns: Vec<String>,

    /// Whether each pattern is anchored at both ends.
    exact: bool,

    /// Whether matching is case sensitive.
    case_sensitive: bool,
}

impl PatternSet {
    /// Compile `patterns` using the process-wide case setting.
    ///
    /// The setting is read once, here. Later calls to
    /// [`settings::set_ignore_case`] do not affect this set.
    pub fn compile<I, S>(patterns: I, exact: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile_with_case(patterns, exact, settings::case_sensitive())
    }

    /// Compile `patterns` with an explicit case setting.
    pub fn compile_with_case<I, S>(patterns: I, exact: bool, case_sensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile_for("pattern set", patterns, exact, case_sensitive)
    }

    /// Compile on behalf of the chain call named by `context`.
    pub(crate) fn compile_for<I, S>(
        context: &str,
        patterns: I,
        exact: bool,
        case_sensitive: bool,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        if patterns.is_empty() {
            return Err(HonqError::empty_pattern_set(context));
        }

        let source = Self::alternation(&patterns, exact);
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| HonqError::invalid_pattern(&source, e.to_string()))?;

        debug!(
            "Compiled {} pattern(s) for {}: {} (case sensitive: {})",
            patterns.len(),
            context,
            source,
            case_sensitive
        );

        Ok(Self {
            regex,
            patterns,
            exact,
            case_sensitive,
        })
    }

    /// Build the regex source for a list of patterns.
    #[must_use]
    pub fn alternation(patterns: &[String], exact: bool) -> String {
        let (open, close) = if exact { ("(^", "$)") } else { ("(", ")") };
        let alternatives: Vec<String> = patterns
            .iter()
            .map(|p| format!("{open}{p}{close}"))
            .collect();
        format!("({})", alternatives.join("|"))
    }

    /// Whether any pattern matches `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The compiled regex source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The patterns this set was built from.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether patterns are anchored at both ends.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Whether matching is case sensitive.
    #[must_use]
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl fmt::Debug for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternSet")
            .field("regex", &self.regex.as_str())
            .field("exact", &self.exact)
            .field("case_sensitive", &self.case_sensitive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn strings(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_alternation_source() {
        assert_eq!(PatternSet::alternation(&strings(&["a"]), false), "((a))");
        assert_eq!(
            PatternSet::alternation(&strings(&["a", "b[0-9]"]), false),
            "((a)|(b[0-9]))"
        );
        assert_eq!(
            PatternSet::alternation(&strings(&["a", "b"]), true),
            "((^a$)|(^b$))"
        );
    }

    #[test_case("temp", "temp", true ; "exact text")]
    #[test_case("temp", "my_temp_dir", true ; "substring")]
    #[test_case("temp", "TEMPORAL", true ; "ignores case")]
    #[test_case("song[1-3]", "best_song2", true ; "character class")]
    #[test_case("song[1-3]", "song4", false ; "class miss")]
    fn test_partial_match(pattern: &str, text: &str, expected: bool) {
        let set = PatternSet::compile_with_case([pattern], false, false).unwrap();
        assert_eq!(set.is_match(text), expected);
    }

    #[test_case("temp", "temp", true ; "same text")]
    #[test_case("temp", "Temp", true ; "ignores case")]
    #[test_case("temp", "temporal", false ; "longer text")]
    #[test_case("temp", "a_temp", false ; "prefix present")]
    fn test_exact_match(pattern: &str, text: &str, expected: bool) {
        let set = PatternSet::compile_with_case([pattern], true, false).unwrap();
        assert_eq!(set.is_match(text), expected);
    }

    #[test]
    fn test_exact_anchors_every_alternative() {
        let set = PatternSet::compile_with_case(["build", "dist"], true, false).unwrap();
        assert!(set.is_match("build"));
        assert!(set.is_match("dist"));
        assert!(!set.is_match("builds"));
        assert!(!set.is_match("redist"));
    }

    #[test]
    fn test_case_sensitive() {
        let set = PatternSet::compile_with_case([r"\.jpg$"], false, true).unwrap();
        assert!(set.is_match("a.jpg"));
        assert!(!set.is_match("a.JPG"));
        assert!(set.is_case_sensitive());
    }

    #[test]
    fn test_empty_patterns_rejected() {
        let err = PatternSet::compile_with_case(Vec::<String>::new(), false, false).unwrap_err();
        assert!(matches!(err, HonqError::EmptyPatternSet { .. }));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = PatternSet::compile_with_case(["a[", "b"], false, false).unwrap_err();
        match err {
            HonqError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "((a[)|(b))"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_accessors() {
        let set = PatternSet::compile_with_case(["x", "y"], true, true).unwrap();
        assert_eq!(set.patterns(), ["x", "y"]);
        assert_eq!(set.as_str(), "((^x$)|(^y$))");
        assert!(set.is_exact());
    }
}
