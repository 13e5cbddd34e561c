//! # Byte Pair Encoder

use std::sync::Arc;

use crate::{
    encoders::{RuleMajorSpanEncoder, SpanEncoder, TokenEncoder},
    errors::BCResult,
    segmentation::{AddedTokenSplitter, SpanRef, WordSegmentor},
    types::TokenType,
    vocab::UnifiedTokenVocab,
};

/// A [`TokenEncoder`] composing the added-token splitter, the word segmentor
/// and a [`SpanEncoder`].
///
/// Encoding runs, in order: normalization; added-token splitting; word
/// segmentation and per-word merging of each text element; then one
/// leading-space correction pass over everything appended.
pub struct BytePairEncoder<T, S = RuleMajorSpanEncoder>
where
    T: TokenType,
    S: SpanEncoder<T>,
{
    vocab: Arc<UnifiedTokenVocab<T>>,
    splitter: AddedTokenSplitter<T>,
    segmentor: WordSegmentor,
    span_encoder: S,
}

impl<T: TokenType> BytePairEncoder<T> {
    /// Build an encoder with the default span encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `segmentor` - The word segmentor.
    pub fn new(
        vocab: Arc<UnifiedTokenVocab<T>>,
        segmentor: WordSegmentor,
    ) -> BCResult<Self> {
        Self::with_span_encoder(vocab, segmentor, RuleMajorSpanEncoder)
    }
}

impl<T, S> BytePairEncoder<T, S>
where
    T: TokenType,
    S: SpanEncoder<T>,
{
    /// Build an encoder with a chosen span encoder.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `segmentor` - The word segmentor.
    /// * `span_encoder` - The per-word merge policy.
    ///
    /// ## Returns
    /// The encoder, or an error if the added-token matcher cannot be built.
    pub fn with_span_encoder(
        vocab: Arc<UnifiedTokenVocab<T>>,
        segmentor: WordSegmentor,
        span_encoder: S,
    ) -> BCResult<Self> {
        let splitter = AddedTokenSplitter::from_added_vocab(vocab.added_tokens())?;
        Ok(Self {
            vocab,
            splitter,
            segmentor,
            span_encoder,
        })
    }

    /// The word segmentor.
    pub fn segmentor(&self) -> &WordSegmentor {
        &self.segmentor
    }

    /// The added-token splitter.
    pub fn splitter(&self) -> &AddedTokenSplitter<T> {
        &self.splitter
    }

    fn encode_into(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BCResult<()> {
        let start = tokens.len();
        let text = self.vocab.normalizer().normalize(text);

        for span in self.splitter.split(&text)? {
            match span? {
                SpanRef::Literal(token) => tokens.push(token),
                SpanRef::Text(fragment) => {
                    for word in self.segmentor.split_words(fragment) {
                        self.span_encoder
                            .encode_append_span(&self.vocab, word?.as_bytes(), tokens);
                    }
                }
            }
        }

        if let Some(correction) = self.vocab.space_correction() {
            correction.apply(tokens, start);
        }
        Ok(())
    }
}

impl<T, S> TokenEncoder<T> for BytePairEncoder<T, S>
where
    T: TokenType,
    S: SpanEncoder<T>,
{
    fn vocab(&self) -> &Arc<UnifiedTokenVocab<T>> {
        &self.vocab
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BCResult<()> {
        let start = tokens.len();
        let result = self.encode_into(text, tokens);
        match &result {
            Ok(()) => log::trace!(
                "encoded {} bytes into {} tokens",
                text.len(),
                tokens.len() - start
            ),
            Err(_) => tokens.truncate(start),
        }
        result
    }
}
