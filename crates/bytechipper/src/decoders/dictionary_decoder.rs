//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use crate::{
    decoders::TokenDecoder,
    errors::{BCResult, BytechipperError},
    types::{BCHashMap, TokenType, token_id},
    vocab::{UnifiedTokenVocab, byte_surface::surface_to_bytes},
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Added tokens decode to their literal content; every other token decodes
/// to the bytes of its surface string.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryDecoder<T: TokenType> {
    /// Token to bytes mapping.
    token_bytes: BCHashMap<T, Vec<u8>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] from this [`UnifiedTokenVocab`].
    ///
    /// ## Arguments
    /// * `vocab` - The unified token vocabulary to build the decoder from.
    ///
    /// ## Returns
    /// The decoder, or [`BytechipperError::InvalidSurface`] if a non-added
    /// surface has characters outside the surface alphabet.
    pub fn from_unified_vocab<V>(vocab: V) -> BCResult<Self>
    where
        V: AsRef<UnifiedTokenVocab<T>>,
    {
        let vocab = vocab.as_ref();
        let added = vocab.added_tokens();

        let token_bytes = vocab
            .surfaces()
            .token_surfaces()
            .iter()
            .map(|(&token, surface)| {
                let bytes = match added.lookup_content(token) {
                    Some(content) => content.as_bytes().to_vec(),
                    None => surface_to_bytes(surface)?,
                };
                Ok((token, bytes))
            })
            .collect::<BCResult<BCHashMap<_, _>>>()?;

        Ok(Self { token_bytes })
    }

    /// The bytes of one token.
    pub fn lookup_bytes(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_bytes.get(&token).map(Vec::as_slice)
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BCResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        for &token in tokens {
            let bytes = self
                .lookup_bytes(token)
                .ok_or(BytechipperError::UnknownToken {
                    token: token_id(token),
                })?;
            buf.extend_from_slice(bytes);
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::fixture_vocab;

    #[test]
    fn test_dictionary_decoder() {
        let vocab: Arc<UnifiedTokenVocab<u32>> = Arc::new(fixture_vocab());
        let decoder = DictionaryDecoder::from_unified_vocab(vocab.clone()).unwrap();

        assert_eq!(decoder.try_decode_to_bytes(&[259, 264]).unwrap(), b"hello world");
        assert_eq!(decoder.try_decode_to_string(&[269]).unwrap(), " hello");
        assert_eq!(
            decoder.try_decode_to_string(&[259, 300, 10]).unwrap(),
            "hello<|endoftext|>\n"
        );
        assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");

        // Every byte token decodes to its byte.
        for b in 0..=255_u8 {
            assert_eq!(decoder.lookup_bytes(b as u32), Some(&[b][..]));
        }

        assert_eq!(
            decoder
                .try_decode_batch_to_strings(&[&[259], &[], &[32, 259]])
                .unwrap(),
            vec!["hello", "", " hello"]
        );
    }

    #[test]
    fn test_unknown_token() {
        let vocab: UnifiedTokenVocab<u32> = fixture_vocab();
        let decoder = DictionaryDecoder::from_unified_vocab(&vocab).unwrap();
        let unknown = vocab.len() as u32 + 1000;

        assert!(matches!(
            decoder.try_decode_to_bytes(&[259, unknown]),
            Err(BytechipperError::UnknownToken { token }) if token == unknown as u64
        ));
        assert!(decoder.try_decode_batch_to_bytes(&[&[259], &[unknown]]).is_err());
    }

    #[test]
    fn test_lossy_split_character() {
        // "é" is 0xC3 0xA9; one byte token alone is not UTF-8.
        let decoder = DictionaryDecoder::from_unified_vocab(Arc::new(fixture_vocab::<u32>())).unwrap();
        assert_eq!(decoder.try_decode_to_string(&[0xC3]).unwrap(), "\u{FFFD}");
        assert_eq!(decoder.try_decode_to_string(&[0xC3, 0xA9]).unwrap(), "é");
    }
}
