//! # Tokenizer
//!
//! A shared vocab with its encoder and decoder.

use std::sync::Arc;

use crate::{
    TokenDecoder,
    TokenEncoder,
    TokenType,
    TokenizerOptions,
    UnifiedTokenVocab,
    config::TokenizerSpec,
    errors::BCResult,
};

/// Unified Tokenizer.
///
/// Combines:
///  * [`UnifiedTokenVocab`],
///  * [`TokenEncoder`], and
///  * [`TokenDecoder`] wrappers.
///
/// All state is immutable after construction; a tokenizer can be shared
/// between threads and used concurrently without locking.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<UnifiedTokenVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> core::fmt::Debug for Tokenizer<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("vocab", &self.vocab)
            .finish_non_exhaustive()
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        vocab: Arc<UnifiedTokenVocab<T>>,
        encoder: Arc<dyn TokenEncoder<T>>,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self {
            vocab,
            encoder,
            decoder,
        }
    }

    /// Build a tokenizer with default [`TokenizerOptions`].
    pub fn from_spec(spec: &TokenizerSpec) -> BCResult<Self> {
        TokenizerOptions::default().build(spec)
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<UnifiedTokenVocab<T>> {
        &self.vocab
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<T>> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<T>> {
        &self.decoder
    }

    /// Encode text into tokens.
    pub fn encode(
        &self,
        text: &str,
    ) -> BCResult<Vec<T>> {
        self.encoder.try_encode(text)
    }

    /// Encode text, appending to `tokens`.
    ///
    /// The leading-space correction only sees the appended tokens.
    pub fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BCResult<()> {
        self.encoder.try_encode_append(text, tokens)
    }

    /// Decode tokens into text; invalid UTF-8 is replaced with U+FFFD.
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> BCResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Decode tokens into raw bytes.
    pub fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BCResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    /// Decode a batch of token sequences, one at a time.
    pub fn try_decode_batch(
        &self,
        batch: &[&[T]],
    ) -> BCResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn vocab(&self) -> &Arc<UnifiedTokenVocab<T>> {
        &self.vocab
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BCResult<()> {
        self.encoder.try_encode_append(text, tokens)
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> BCResult<Vec<T>> {
        self.encoder.try_encode(text)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<Vec<T>>> {
        self.encoder.try_encode_batch(batch)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BCResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> BCResult<Vec<Vec<u8>>> {
        self.decoder.try_decode_batch_to_bytes(batch)
    }

    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BCResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BCResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::BytechipperError, testing::fixture_tokenizer};

    #[test]
    fn test_encode_decode() {
        let tokenizer = fixture_tokenizer::<u32>();

        let tokens = tokenizer.encode("hello world").unwrap();
        assert_eq!(tokens, vec![259, 264]);
        assert_eq!(tokenizer.decode(&tokens).unwrap(), "hello world");

        assert!(tokenizer.encode("").unwrap().is_empty());
        assert_eq!(tokenizer.decode(&[]).unwrap(), "");

        assert_eq!(tokenizer.decode_to_bytes(&[269]).unwrap(), b" hello");
    }

    #[test]
    fn test_added_token_round_trip() {
        let tokenizer = fixture_tokenizer::<u32>();

        for added in tokenizer.vocab().added_tokens().entries() {
            let tokens = tokenizer.encode(added.content()).unwrap();
            assert_eq!(tokens, vec![added.token()]);
            assert_eq!(tokenizer.decode(&tokens).unwrap(), added.content());
        }
    }

    #[test]
    fn test_encode_append() {
        let tokenizer = fixture_tokenizer::<u32>();

        let mut tokens = tokenizer.encode("hello ").unwrap();
        assert_eq!(tokens, vec![259, 32]);

        // The trailing sentinel from the first call is not corrected.
        tokenizer.encode_append("hello", &mut tokens).unwrap();
        assert_eq!(tokens, vec![259, 32, 259]);
    }

    #[test]
    fn test_unknown_token() {
        let tokenizer = fixture_tokenizer::<u32>();
        let unknown = tokenizer.vocab().len() as u32 + 1000;

        let err = tokenizer.decode(&[unknown]).unwrap_err();
        assert!(matches!(err, BytechipperError::UnknownToken { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::UnknownToken);
    }

    #[test]
    fn test_trait_objects() {
        let tokenizer = fixture_tokenizer::<u16>();

        let encoder: &dyn TokenEncoder<u16> = &tokenizer;
        let decoder: &dyn TokenDecoder<u16> = &tokenizer;

        let batch = encoder.try_encode_batch(&["hello", " world"]).unwrap();
        assert_eq!(batch, vec![vec![259], vec![264]]);

        let refs: Vec<&[u16]> = batch.iter().map(Vec::as_slice).collect();
        assert_eq!(
            decoder.try_decode_batch_to_strings(&refs).unwrap(),
            vec!["hello", " world"]
        );
        assert_eq!(tokenizer.try_decode_batch(&refs).unwrap(), vec!["hello", " world"]);
    }
}
