//! # Added Token Splitter
//!
//! Slices added-token literals out of raw text before word segmentation.
//!
//! Each step takes the occurrence with the smallest start offset in the
//! unscanned suffix; when several literals start at the same offset, the
//! first-registered one wins. Scanning resumes after the matched literal.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::{
    errors::{BCResult, BytechipperError},
    types::TokenType,
    vocab::AddedTokenVocab,
};

/// An element of split text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanRef<'h, T: TokenType> {
    /// A matched added token.
    Literal(T),

    /// Plain text between added tokens.
    Text(&'h str),
}

/// Added-token literal matcher.
#[derive(Debug, Clone)]
pub struct AddedTokenSplitter<T: TokenType> {
    /// `None` when there are no added tokens.
    automaton: Option<AhoCorasick>,

    /// Pattern index => token.
    tokens: Vec<T>,
}

impl<T: TokenType> AddedTokenSplitter<T> {
    /// Build a splitter for the added tokens, in registration order.
    ///
    /// ## Returns
    /// The splitter, or [`BytechipperError::Pattern`] if the matcher cannot
    /// be built.
    pub fn from_added_vocab(added: &AddedTokenVocab<T>) -> BCResult<Self> {
        if added.is_empty() {
            return Ok(Self {
                automaton: None,
                tokens: Vec::new(),
            });
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(added.entries().iter().map(|e| e.content()))
            .map_err(|e| BytechipperError::Pattern(e.to_string()))?;

        Ok(Self {
            automaton: Some(automaton),
            tokens: added.entries().iter().map(|e| e.token()).collect(),
        })
    }

    /// The number of literals.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Are there no literals?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Split `text` into literal and plain-text elements.
    ///
    /// Empty plain-text elements are not yielded.
    pub fn split<'r, 'h>(
        &'r self,
        text: &'h str,
    ) -> BCResult<AddedTokenSpans<'r, 'h, T>> {
        let matches = match &self.automaton {
            Some(automaton) => Some(
                automaton
                    .try_find_iter(text)
                    .map_err(|e| BytechipperError::Segmentation(e.to_string()))?,
            ),
            None => None,
        };

        Ok(AddedTokenSpans {
            text,
            tokens: &self.tokens,
            matches,
            pos: 0,
            pending: None,
        })
    }
}

/// Iterator over split text.
///
/// See [`AddedTokenSplitter::split`].
pub struct AddedTokenSpans<'r, 'h, T: TokenType> {
    text: &'h str,
    tokens: &'r [T],
    matches: Option<aho_corasick::FindIter<'r, 'h>>,
    pos: usize,
    pending: Option<T>,
}

impl<'h, T: TokenType> Iterator for AddedTokenSpans<'_, 'h, T> {
    type Item = BCResult<SpanRef<'h, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(SpanRef::Literal(token)));
        }

        if let Some(found) = self.matches.as_mut().and_then(Iterator::next) {
            let Some(&token) = self.tokens.get(found.pattern().as_usize()) else {
                self.matches = None;
                self.pos = self.text.len();
                return Some(Err(BytechipperError::UnreachableState(format!(
                    "added-token pattern {} has no token",
                    found.pattern().as_usize()
                ))));
            };

            let gap = self.pos..found.start();
            self.pos = found.end();
            if gap.is_empty() {
                return Some(Ok(SpanRef::Literal(token)));
            }
            self.pending = Some(token);
            return Some(Ok(SpanRef::Text(&self.text[gap])));
        }
        self.matches = None;

        if self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            self.pos = self.text.len();
            return Some(Ok(SpanRef::Text(rest)));
        }
        None
    }
}
