//! # Word Segmentor
//!
//! The GPT-2 word pattern runs on the [`Gpt2Words`] lexer; any other
//! pattern runs on a compiled [`RegexWrapper`].

use core::ops::Range;

use crate::{
    errors::BCResult,
    regex::{GPT2_WORD_PATTERN, MatchesWrapper, RegexPattern, RegexWrapper},
    segmentation::Gpt2Words,
};

#[derive(Debug, Clone)]
enum WordMatcher {
    Gpt2Lexer,
    Regex(RegexWrapper),
}

/// Splits text fragments into words with a word pattern.
///
/// The words of a fragment always concatenate back to the fragment:
/// text between pattern matches is yielded as its own word, and empty
/// matches are skipped.
#[derive(Debug, Clone)]
pub struct WordSegmentor {
    matcher: WordMatcher,
}

impl From<RegexWrapper> for WordSegmentor {
    fn from(word_re: RegexWrapper) -> Self {
        Self {
            matcher: WordMatcher::Regex(word_re),
        }
    }
}

impl WordSegmentor {
    /// The segmentor for [`GPT2_WORD_PATTERN`], on the [`Gpt2Words`] lexer.
    pub fn gpt2() -> Self {
        Self {
            matcher: WordMatcher::Gpt2Lexer,
        }
    }

    /// Build a segmentor from a word pattern.
    ///
    /// [`GPT2_WORD_PATTERN`] selects the [`Gpt2Words`] lexer; other patterns
    /// are compiled.
    ///
    /// ## Returns
    /// The segmentor, or [`BytechipperError::Pattern`](crate::BytechipperError::Pattern).
    pub fn from_pattern<P: Into<RegexPattern>>(pattern: P) -> BCResult<Self> {
        let pattern = pattern.into();
        if pattern.as_str() == GPT2_WORD_PATTERN.as_str() {
            return Ok(Self::gpt2());
        }
        Ok(pattern.compile()?.into())
    }

    /// The compiled word regex; `None` for the lexer.
    pub fn word_regex(&self) -> Option<&RegexWrapper> {
        match &self.matcher {
            WordMatcher::Gpt2Lexer => None,
            WordMatcher::Regex(word_re) => Some(word_re),
        }
    }

    /// Iterate over the words of `text`.
    pub fn split_words<'r, 'h>(
        &'r self,
        text: &'h str,
    ) -> Words<'r, 'h> {
        let inner = match &self.matcher {
            WordMatcher::Gpt2Lexer => WordsInner::Lexed(Gpt2Words::new(text)),
            WordMatcher::Regex(word_re) => WordsInner::Matched(MatchedWords {
                text,
                matches: Some(word_re.find_iter(text)),
                pos: 0,
                pending: None,
            }),
        };
        Words { inner }
    }
}

/// Iterator over the words of a text fragment.
///
/// See [`WordSegmentor::split_words`].
pub struct Words<'r, 'h> {
    inner: WordsInner<'r, 'h>,
}

enum WordsInner<'r, 'h> {
    Lexed(Gpt2Words<'h>),
    Matched(MatchedWords<'r, 'h>),
}

impl<'h> Iterator for Words<'_, 'h> {
    type Item = BCResult<&'h str>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            WordsInner::Lexed(words) => words.next().map(Ok),
            WordsInner::Matched(words) => words.next(),
        }
    }
}

struct MatchedWords<'r, 'h> {
    text: &'h str,
    matches: Option<MatchesWrapper<'r, 'h>>,
    pos: usize,
    pending: Option<Range<usize>>,
}

impl<'h> MatchedWords<'_, 'h> {
    fn take(
        &mut self,
        range: Range<usize>,
    ) -> &'h str {
        self.pos = range.end;
        &self.text[range]
    }
}

impl<'h> Iterator for MatchedWords<'_, 'h> {
    type Item = BCResult<&'h str>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(range) = self.pending.take() {
            return Some(Ok(self.take(range)));
        }

        while let Some(found) = self.matches.as_mut().and_then(Iterator::next) {
            let range = match found {
                Ok(range) => range,
                Err(err) => {
                    self.matches = None;
                    self.pos = self.text.len();
                    return Some(Err(err));
                }
            };
            if range.is_empty() {
                continue;
            }

            if range.start > self.pos {
                let gap = self.pos..range.start;
                self.pending = Some(range);
                return Some(Ok(self.take(gap)));
            }
            return Some(Ok(self.take(range)));
        }
        self.matches = None;

        if self.pos < self.text.len() {
            let rest = self.pos..self.text.len();
            return Some(Ok(self.take(rest)));
        }
        None
    }
}
