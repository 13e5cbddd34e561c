//! # Span Encoders
//!
//! A span encoder turns the bytes of one word into merged tokens:
//!
//! 1. every byte becomes its byte token;
//! 2. every added token's byte-token sequence is collapsed to the added token;
//! 3. merge rules are applied rule-major: each rule, in rank order, makes a full
//!    left-to-right pass over the buffer before the next rule is considered.
//!
//! Rule-major order is not the same as repeatedly merging the best-ranked
//! adjacent pair; the two can give different results.

use crate::{
    types::TokenType,
    vocab::{MergeRule, MergeTable, UnifiedTokenVocab},
};

/// A trait for encoding word spans into tokens.
pub trait SpanEncoder<T: TokenType>: Send + Sync {
    /// Apply the merge rules to `tokens[start..]`, in place.
    ///
    /// ## Arguments
    /// * `merges` - The ranked merge rules.
    /// * `tokens` - The token buffer.
    /// * `start` - The start of the word in `tokens`.
    fn merge_tokens(
        &self,
        merges: &MergeTable<T>,
        tokens: &mut Vec<T>,
        start: usize,
    );

    /// Encode one word, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `span` - The word bytes.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span(
        &self,
        vocab: &UnifiedTokenVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let start = tokens.len();
        vocab.byte_vocab().append_tokens(span, tokens);

        for added in vocab.added_tokens().entries() {
            replace_subsequence(tokens, start, added.byte_tokens(), added.token());
        }

        self.merge_tokens(vocab.merges(), tokens, start);
    }
}

/// Replace every occurrence of `pattern` in `tokens[start..]` with `replacement`.
///
/// Occurrences are found left to right, and scanning continues after each
/// replacement.
pub fn replace_subsequence<T: TokenType>(
    tokens: &mut Vec<T>,
    start: usize,
    pattern: &[T],
    replacement: T,
) {
    let n = pattern.len();
    if n == 0 || tokens.len() < start + n {
        return;
    }

    let mut write = start;
    let mut read = start;
    while read < tokens.len() {
        if tokens[read..].starts_with(pattern) {
            tokens[write] = replacement;
            read += n;
        } else {
            tokens[write] = tokens[read];
            read += 1;
        }
        write += 1;
    }
    tokens.truncate(write);
}

/// One left-to-right pass of `rule` over `tokens[start..]`.
///
/// After a merge, the merged token is compared against its new right
/// neighbor before moving on.
pub fn apply_merge_rule<T: TokenType>(
    rule: &MergeRule<T>,
    tokens: &mut Vec<T>,
    start: usize,
) {
    if tokens.len() < start + 2 {
        return;
    }

    let (left, right) = rule.pair;
    let mut write = start;
    let mut current = tokens[start];
    for read in start + 1..tokens.len() {
        let next = tokens[read];
        if current == left && next == right {
            current = rule.merged;
        } else {
            tokens[write] = current;
            write += 1;
            current = next;
        }
    }
    tokens[write] = current;
    tokens.truncate(write + 1);
}

/// The default [`SpanEncoder`].
///
/// Rule-major merging which skips, in one step, every rule whose pair does
/// not occur in the buffer; such rules would make no-op passes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RuleMajorSpanEncoder;

impl<T: TokenType> SpanEncoder<T> for RuleMajorSpanEncoder {
    fn merge_tokens(
        &self,
        merges: &MergeTable<T>,
        tokens: &mut Vec<T>,
        start: usize,
    ) {
        let mut min_rank = 0;
        while tokens.len() >= start + 2 {
            let Some(rank) = tokens[start..]
                .windows(2)
                .filter_map(|w| merges.next_rank((w[0], w[1]), min_rank))
                .min()
            else {
                break;
            };
            let Some(rule) = merges.rule(rank) else {
                break;
            };

            apply_merge_rule(rule, tokens, start);
            min_rank = rank + 1;
        }
    }
}

/// Literal rule-by-rule [`SpanEncoder`].
///
/// Makes a pass for every rule in the table; useful as a reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSpanEncoder;

impl<T: TokenType> SpanEncoder<T> for ReferenceSpanEncoder {
    fn merge_tokens(
        &self,
        merges: &MergeTable<T>,
        tokens: &mut Vec<T>,
        start: usize,
    ) {
        for rule in merges.rules() {
            if tokens.len() < start + 2 {
                break;
            }
            apply_merge_rule(rule, tokens, start);
        }
    }
}
