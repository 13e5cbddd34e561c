//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

use crate::errors::{BCResult, BytechipperError};

/// Const Regex Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(&'static str),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Convert to [`RegexPattern`]
    pub fn to_pattern(self) -> RegexPattern {
        self.into()
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    pub fn compile(&self) -> BCResult<RegexWrapper> {
        RegexPattern::from(*self).compile()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        use ConstRegexPattern::*;
        match pattern {
            Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
        }
    }
}

/// Label for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a pattern for the `regex` crate.
    Basic(String),

    /// This is a pattern for the `fancy_regex` crate.
    Fancy(String),

    /// This pattern will try the `regex` crate first,
    /// and fallback to `fancy_regex` if it fails.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// The compiled `RegexWrapper`, or [`BytechipperError::Pattern`].
    pub fn compile(&self) -> BCResult<RegexWrapper> {
        let pattern_error = |err: &dyn core::fmt::Display| {
            BytechipperError::Pattern(format!("{:?}: {err}", self.as_str()))
        };
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|e| pattern_error(&e)),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(|e| pattern_error(&e)),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(pattern)
                        .map(RegexWrapper::from)
                        .map_err(|e| pattern_error(&e))
                }),
        }
    }
}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A `MatchesWrapper` iterator over the match ranges.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchesWrapper::Regex(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchesWrapper::FancyRegex(regex.find_iter(haystack)),
        }
    }
}

/// Wrapper for regex matches.
///
/// Yields byte ranges into the haystack; `fancy_regex` runtime failures
/// (backtrack limits) surface as [`BytechipperError::Segmentation`].
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Regex(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    FancyRegex(fancy_regex::Matches<'r, 'h>),
}

impl Iterator for MatchesWrapper<'_, '_> {
    type Item = BCResult<Range<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex(matches) => matches.next().map(|m| Ok(m.range())),
            Self::FancyRegex(matches) => matches.next().map(|m| {
                m.map(|m| m.range())
                    .map_err(|e| BytechipperError::Segmentation(e.to_string()))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptive() {
        let re = RegexPattern::from(r"\w+").compile().unwrap();
        assert!(re.is_basic());
        assert_eq!(re.as_str(), r"\w+");

        let re = RegexPattern::from(r"a(?!b)").compile().unwrap();
        assert!(re.is_fancy());

        assert_eq!(
            re.find_iter("ab ac a")
                .collect::<BCResult<Vec<_>>>()
                .unwrap(),
            vec![3..4, 6..7]
        );
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            RegexPattern::Basic("a(?!b)".to_string()).compile(),
            Err(BytechipperError::Pattern(_))
        ));
        assert!(matches!(
            RegexPattern::from("(").compile(),
            Err(BytechipperError::Pattern(_))
        ));
    }

    #[test]
    fn test_const_pattern() {
        let pattern = ConstRegexPattern::Basic("[0-9]+");
        assert_eq!(
            pattern.to_pattern(),
            RegexPattern::Basic("[0-9]+".to_string())
        );

        let re = pattern.compile().unwrap();
        assert_eq!(
            re.find_iter("a12b3")
                .collect::<BCResult<Vec<_>>>()
                .unwrap(),
            vec![1..3, 4..5]
        );
    }
}
