//! # Patterns

use crate::regex::ConstRegexPattern;

/// Join string literals with a separator, at compile time.
///
/// ## Example
/// ```rust
/// use bytechipper::join_strs;
///
/// assert_eq!(join_strs!("+", ("a", "b", "c")), "a+b+c");
/// ```
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// An extension of [`join_strs!()`] which uses the "|" as the separator.
#[macro_export]
macro_rules! join_patterns {
    ($($e:literal),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}

/// The GPT-2 word split pattern.
///
/// Alternatives are tried in order, at each position:
/// contractions; then optional-space-prefixed letter, digit and symbol runs;
/// then a whitespace run not followed by non-whitespace; then any whitespace run.
///
/// [`WordSegmentor::from_pattern`](crate::segmentation::WordSegmentor::from_pattern)
/// runs this pattern on the [`Gpt2Words`](crate::segmentation::Gpt2Words) lexer.
pub const GPT2_WORD_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'s",
    r"'t",
    r"'re",
    r"'ve",
    r"'m",
    r"'ll",
    r"'d",
    r" ?\p{L}+",
    r" ?\p{N}+",
    r" ?[^\s\p{L}\p{N}]+",
    r"\s+(?!\S)",
    r"\s+",
));
