//! # Added Token Vocabulary
//!
//! Added tokens are whole strings (``<|endoftext|>``, padding markers, ...)
//! which are matched verbatim in raw text and never merged.

use crate::{
    config::AddedTokenSpec,
    errors::{BCResult, BytechipperError},
    types::{BCHashMap, TokenType, try_token},
    vocab::{ByteMapVocab, byte_surface::bytes_to_surface},
};

/// One added token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedToken<T: TokenType> {
    token: T,
    content: String,
    byte_tokens: Vec<T>,
}

impl<T: TokenType> AddedToken<T> {
    /// The token.
    pub fn token(&self) -> T {
        self.token
    }

    /// The literal content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The surface string of the content bytes.
    pub fn surface(&self) -> String {
        bytes_to_surface(self.content.as_bytes())
    }

    /// The content bytes, as byte tokens.
    ///
    /// Used to find the added token inside byte-mapped word spans.
    pub fn byte_tokens(&self) -> &[T] {
        &self.byte_tokens
    }
}

/// Ordered added-token table.
///
/// Registration order is precedence order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddedTokenVocab<T: TokenType> {
    entries: Vec<AddedToken<T>>,
    token_index: BCHashMap<T, usize>,
}

impl<T: TokenType> AddedTokenVocab<T> {
    /// Build from the configured added-token list.
    ///
    /// Exact repeats (same id, same content) are dropped.
    ///
    /// ## Arguments
    /// * `specs` - The added tokens, in registration order.
    /// * `byte_vocab` - The byte table, used to precompute byte tokens.
    ///
    /// ## Returns
    /// The table, or:
    /// * [`BytechipperError::EmptyAddedToken`] on empty content.
    /// * [`BytechipperError::TokenOutOfRange`] if an id does not fit `T`.
    /// * [`BytechipperError::AddedTokenConflict`] if an id is reused for other content.
    pub fn from_specs(
        specs: &[AddedTokenSpec],
        byte_vocab: &ByteMapVocab<T>,
    ) -> BCResult<Self> {
        let mut vocab = Self::default();
        for spec in specs {
            let token = try_token::<T>(spec.id)?;
            if spec.content.is_empty() {
                return Err(BytechipperError::EmptyAddedToken {
                    token: spec.id as u64,
                });
            }

            if let Some(existing) = vocab.get(token) {
                if existing.content != spec.content {
                    return Err(BytechipperError::AddedTokenConflict {
                        content: spec.content.clone(),
                        token: spec.id as u64,
                        surface: existing.surface(),
                        existing: spec.id as u64,
                    });
                }
                log::debug!("skipping repeated added token {:?} ({token})", spec.content);
                continue;
            }

            let mut byte_tokens = Vec::with_capacity(spec.content.len());
            byte_vocab.append_tokens(spec.content.as_bytes(), &mut byte_tokens);

            vocab.token_index.insert(token, vocab.entries.len());
            vocab.entries.push(AddedToken {
                token,
                content: spec.content.clone(),
                byte_tokens,
            });
        }
        Ok(vocab)
    }

    /// The entries, in registration order.
    pub fn entries(&self) -> &[AddedToken<T>] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is this table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry for a token.
    pub fn get(
        &self,
        token: T,
    ) -> Option<&AddedToken<T>> {
        self.token_index.get(&token).map(|&idx| &self.entries[idx])
    }

    /// Is `token` an added token?
    pub fn contains(
        &self,
        token: T,
    ) -> bool {
        self.token_index.contains_key(&token)
    }

    /// Look up the literal content for a token.
    pub fn lookup_content(
        &self,
        token: T,
    ) -> Option<&str> {
        self.get(token).map(AddedToken::content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{testing::fixture_raw_vocab, vocab::SurfaceVocab};

    fn byte_vocab() -> ByteMapVocab<u32> {
        let surfaces = SurfaceVocab::<u32>::from_raw(&fixture_raw_vocab()).unwrap();
        ByteMapVocab::from_surface_vocab(&surfaces).unwrap()
    }

    #[test]
    fn test_from_specs() {
        let vocab = AddedTokenVocab::from_specs(
            &[
                AddedTokenSpec::new(300, "<|endoftext|>"),
                AddedTokenSpec::new(301, "<|pad|>"),
                AddedTokenSpec::new(300, "<|endoftext|>"),
            ],
            &byte_vocab(),
        )
        .unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.entries()[0].token(), 300);
        assert_eq!(vocab.entries()[1].content(), "<|pad|>");

        assert!(vocab.contains(301));
        assert!(!vocab.contains(259));
        assert_eq!(vocab.lookup_content(300), Some("<|endoftext|>"));

        let pad = vocab.get(301).unwrap();
        assert_eq!(
            pad.byte_tokens(),
            b"<|pad|>".iter().map(|&b| b as u32).collect::<Vec<_>>()
        );
        assert_eq!(pad.surface(), "<|pad|>");
    }

    #[test]
    fn test_surface_of_spaces() {
        let vocab = AddedTokenVocab::from_specs(&[AddedTokenSpec::new(302, "  ")], &byte_vocab())
            .unwrap();
        assert_eq!(vocab.entries()[0].surface(), "ĠĠ");
        assert_eq!(vocab.entries()[0].byte_tokens(), &[32, 32]);
    }

    #[test]
    fn test_empty_content() {
        assert!(matches!(
            AddedTokenVocab::from_specs(&[AddedTokenSpec::new(300, "")], &byte_vocab()),
            Err(BytechipperError::EmptyAddedToken { token: 300 })
        ));
    }

    #[test]
    fn test_reused_id() {
        assert!(matches!(
            AddedTokenVocab::from_specs(
                &[
                    AddedTokenSpec::new(300, "<|a|>"),
                    AddedTokenSpec::new(300, "<|b|>"),
                ],
                &byte_vocab()
            ),
            Err(BytechipperError::AddedTokenConflict { token: 300, surface, .. })
                if surface == "<|a|>"
        ));
    }
}
