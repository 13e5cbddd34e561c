//! # Regex Utilities
//!
//! The GPT-2 word pattern uses a negative lookahead (``\s+(?!\S)``), which
//! requires the extended machinery of the [`fancy_regex`] crate; but naturally,
//! this has performance costs, and its backtracking gives up on very long
//! runs. Encoding runs that pattern on the
//! [`Gpt2Words`](crate::segmentation::Gpt2Words) lexer instead.
//! User supplied patterns prefer the standard [`regex`] crate, falling back on
//! [`fancy_regex`] when the pattern needs it.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] type supports only one operation, ``find_iter()``.

pub mod patterns;
pub mod regex_wrapper;

#[doc(inline)]
pub use patterns::GPT2_WORD_PATTERN;
#[doc(inline)]
pub use regex_wrapper::{ConstRegexPattern, MatchesWrapper, RegexPattern, RegexWrapper};
