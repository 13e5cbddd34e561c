//! # GPT-2 Word Lexer
//!
//! A compile-time DFA lexer that splits words exactly as
//! [`GPT2_WORD_PATTERN`](crate::regex::GPT2_WORD_PATTERN) does, in linear
//! time and without backtracking.
//!
//! The pattern's ``\s+(?!\S)`` branch gives the last character of a
//! whitespace run to the following word; a DFA cannot look ahead, so
//! whitespace runs are buffered and split when the next token arrives.

use core::ops::Range;
use std::collections::VecDeque;

use logos::Logos;

/// Logos token for the GPT-2 word pattern.
///
/// | Regex branch                  | Logos variant |
/// |-------------------------------|---------------|
/// | ``'s|'t|'re|'ve|'m|'ll|'d``   | Contraction   |
/// | `` ?\p{L}+``                  | Letters       |
/// | `` ?\p{N}+``                  | Digits        |
/// | `` ?[^\s\p{L}\p{N}]+``        | Punctuation   |
/// | ``\s+(?!\S)``, ``\s+``        | Whitespace    |
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Gpt2Token {
    #[regex(r"'([sdtm]|re|ve|ll)")]
    Contraction,

    #[regex(r" ?\p{Letter}+")]
    Letters,

    #[regex(r" ?\p{Number}+")]
    Digits,

    #[regex(r" ?[^\s\p{Letter}\p{Number}]+")]
    Punctuation,

    #[regex(r"\s+")]
    Whitespace,
}

/// Iterator over the GPT-2 words of a text fragment.
///
/// Every byte of the fragment lands in exactly one non-empty word.
pub struct Gpt2Words<'h> {
    text: &'h str,
    lexer: Option<logos::SpannedIter<'h, Gpt2Token>>,
    last: usize,

    /// A buffered whitespace run.
    pending_ws: Option<Range<usize>>,

    /// Contraction letters split off after ``" '"``; they continue into an
    /// adjacent letter run.
    carry: Option<Range<usize>>,

    ready: VecDeque<Range<usize>>,
}

impl<'h> Gpt2Words<'h> {
    /// Split `text` into words.
    pub fn new(text: &'h str) -> Self {
        Self {
            text,
            lexer: Some(Gpt2Token::lexer(text).spanned()),
            last: 0,
            pending_ws: None,
            carry: None,
            ready: VecDeque::with_capacity(4),
        }
    }

    fn emit(
        &mut self,
        range: Range<usize>,
    ) {
        if !range.is_empty() {
            self.ready.push_back(range);
        }
    }

    fn flush_carry(&mut self) {
        if let Some(carry) = self.carry.take() {
            self.emit(carry);
        }
    }

    fn flush_ws(&mut self) {
        if let Some(ws) = self.pending_ws.take() {
            self.emit(ws);
        }
    }

    /// Take the pending whitespace run, emitting all but its last character.
    ///
    /// ## Returns
    /// The last character's range, if there was a pending run.
    fn split_ws(&mut self) -> Option<Range<usize>> {
        let ws = self.pending_ws.take()?;
        let tail = self.text[ws.clone()]
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx);
        let trim = ws.start + tail;
        self.emit(ws.start..trim);
        Some(trim..ws.end)
    }

    fn is_space(
        &self,
        range: &Range<usize>,
    ) -> bool {
        &self.text[range.clone()] == " "
    }

    fn push(
        &mut self,
        token: Option<Gpt2Token>,
        span: Range<usize>,
    ) {
        if let Some(carry) = self.carry.take() {
            if token == Some(Gpt2Token::Letters)
                && span.start == carry.end
                && !self.text[span.clone()].starts_with(' ')
            {
                self.emit(carry.start..span.end);
                self.last = span.end;
                return;
            }
            self.emit(carry);
        }

        if self.last < span.start {
            self.flush_ws();
            self.emit(self.last..span.start);
        }
        self.last = span.end;

        match token {
            Some(Gpt2Token::Whitespace) => {
                self.flush_ws();
                self.pending_ws = Some(span);
            }
            Some(Gpt2Token::Letters | Gpt2Token::Digits | Gpt2Token::Punctuation) => {
                match self.split_ws() {
                    // `` ?X`` takes one literal space; other whitespace stands alone.
                    Some(last) if self.is_space(&last) => self.emit(last.start..span.end),
                    Some(last) => {
                        self.emit(last);
                        self.emit(span);
                    }
                    None => self.emit(span),
                }
            }
            Some(Gpt2Token::Contraction) => match self.split_ws() {
                // `` ?[^\s\p{L}\p{N}]+`` takes the space and the apostrophe;
                // the contraction letters restart as a letter run.
                Some(last) if self.is_space(&last) => {
                    self.emit(last.start..span.start + 1);
                    self.carry = Some(span.start + 1..span.end);
                }
                Some(last) => {
                    self.emit(last);
                    self.emit(span);
                }
                None => self.emit(span),
            },
            None => {
                self.flush_ws();
                self.emit(span);
            }
        }
    }

    fn finish(&mut self) {
        self.flush_carry();
        self.flush_ws();
        if self.last < self.text.len() {
            self.emit(self.last..self.text.len());
            self.last = self.text.len();
        }
    }
}

impl<'h> Iterator for Gpt2Words<'h> {
    type Item = &'h str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(range) = self.ready.pop_front() {
                return Some(&self.text[range]);
            }

            match self.lexer.as_mut()?.next() {
                Some((token, span)) => self.push(token.ok(), span),
                None => {
                    self.lexer = None;
                    self.finish();
                    return self.ready.pop_front().map(|range| &self.text[range]);
                }
            }
        }
    }
}
