//! # Token Encoder Trait

use std::sync::Arc;

use crate::{
    errors::BCResult,
    types::{EXPECTED_BYTES_PER_TOKEN, TokenType},
    vocab::UnifiedTokenVocab,
};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached vocab.
    fn vocab(&self) -> &Arc<UnifiedTokenVocab<T>>;

    /// Encode text, appending to a target buffer.
    ///
    /// On error, `tokens` is left as it was.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BCResult<()>;

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A `BCResult` containing the vector of tokens.
    fn try_encode(
        &self,
        text: &str,
    ) -> BCResult<Vec<T>> {
        let capacity = text.len() as f32 / (EXPECTED_BYTES_PER_TOKEN * 0.5);
        let mut tokens = Vec::with_capacity(capacity as usize);

        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text into tokens, one text at a time.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A `BCResult` containing the vector of token vectors.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> BCResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }
}
