//! # Token Decoder Trait

use crate::{errors::BCResult, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes tokens into bytes.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The bytes, or [`BytechipperError::UnknownToken`](crate::BytechipperError::UnknownToken)
    /// for the first token with no entry.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BCResult<Vec<u8>>;

    /// Decodes a batch of tokens into bytes, one item at a time.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> BCResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// UTF-8 lossy decoding is used to handle invalid UTF-8 sequences;
    /// a token sequence may split a multi-byte character.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BCResult<String> {
        let bytes = self.try_decode_to_bytes(tokens)?;
        Ok(string_from_utf8_lossy(bytes))
    }

    /// Decodes a batch of tokens into strings, one item at a time.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> BCResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}

/// Convert bytes to a `String`, replacing invalid UTF-8 with U+FFFD.
///
/// Reuses the buffer when `bytes` is valid UTF-8.
pub fn string_from_utf8_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_utf8_lossy() {
        assert_eq!(string_from_utf8_lossy(b"hello".to_vec()), "hello");
        assert_eq!(string_from_utf8_lossy(vec![b'a', 0xC3]), "a\u{FFFD}");
        assert_eq!(string_from_utf8_lossy(Vec::new()), "");
    }
}
