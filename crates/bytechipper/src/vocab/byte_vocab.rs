//! # Byte/Token Mapping Table

use core::fmt::Debug;

use crate::{
    errors::{BCResult, BytechipperError},
    types::{BCHashMap, TokenType, token_id},
    vocab::{ByteTokenArray, SurfaceVocab, TokenByteMap, byte_surface::byte_to_surface},
};

/// ``0..=255`` Byte/Token Bijection Table
///
/// Maps each byte to the token of its single-character surface string.
/// The token values are not required to be dense, or in the range ``0..=255``.
#[derive(Clone, PartialEq)]
pub struct ByteMapVocab<T: TokenType> {
    /// Hash map from token to byte ordinal value.
    token_bytes: TokenByteMap<T>,

    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: ByteTokenArray<T>,
}

impl<T: TokenType> Debug for ByteMapVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteMapVocab")
            .field("max_token", &self.max_token())
            .field("tokens", &self.token_bytes)
            .finish()
    }
}

impl<T: TokenType> ByteMapVocab<T> {
    /// Build the byte table from a surface vocab.
    ///
    /// ## Arguments
    /// * `vocab` - The surface vocab; must hold all 256 single-byte surfaces.
    ///
    /// ## Returns
    /// The table, or:
    /// * [`BytechipperError::MissingByteToken`] if a byte surface is absent.
    /// * [`BytechipperError::DuplicateTokenId`] if two byte surfaces share a token.
    pub fn from_surface_vocab(vocab: &SurfaceVocab<T>) -> BCResult<Self> {
        let mut byte_tokens: ByteTokenArray<T> = [T::zero(); 256];
        let mut token_bytes: TokenByteMap<T> = BCHashMap::with_capacity(256);

        for byte in 0..=255_u8 {
            let surface = byte_to_surface(byte);
            let token = vocab
                .lookup_token(surface.encode_utf8(&mut [0; 4]))
                .ok_or(BytechipperError::MissingByteToken { byte, surface })?;

            if let Some(other) = token_bytes.insert(token, byte) {
                return Err(BytechipperError::DuplicateTokenId {
                    token: token_id(token),
                    first: byte_to_surface(other).to_string(),
                    second: surface.to_string(),
                });
            }
            byte_tokens[byte as usize] = token;
        }

        Ok(Self {
            token_bytes,
            byte_tokens,
        })
    }

    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &ByteTokenArray<T> {
        &self.byte_tokens
    }

    /// The largest byte token.
    pub fn max_token(&self) -> T {
        self.byte_tokens.iter().copied().max().unwrap_or_default()
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// Append the byte tokens of `bytes` to `tokens`.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to map.
    /// * `tokens` - The target token buffer to append to.
    #[inline]
    pub fn append_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| self.get_token(b)));
    }

    /// Get the byte corresponding to a given token, if any.
    #[inline(always)]
    pub fn get_byte(
        &self,
        token: T,
    ) -> Option<u8> {
        self.token_bytes.get(&token).copied()
    }
}
