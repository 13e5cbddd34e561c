//! # Surface String Vocabulary

use core::fmt::Debug;

use crate::{
    errors::{BCResult, BytechipperError},
    types::{BCHashMap, TokenType, token_id, try_token},
    vocab::{AddedTokenVocab, SurfaceTokenMap, TokenSurfaceMap},
};

/// Bidirectional ``surface <=> token`` table.
///
/// Built from the external ``{ surface -> id }`` table, then extended with
/// the surfaces of the added tokens. The reverse map is the exact inverse
/// of the forward map.
#[derive(Default, Clone, PartialEq)]
pub struct SurfaceVocab<T: TokenType> {
    surface_tokens: SurfaceTokenMap<T>,
    token_surfaces: TokenSurfaceMap<T>,
}

impl<T: TokenType> Debug for SurfaceVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("SurfaceVocab")
            .field("len", &self.len())
            .field("max_token", &self.max_token())
            .finish()
    }
}

impl<T: TokenType> SurfaceVocab<T> {
    /// Build from an external ``{ surface -> id }`` table.
    ///
    /// ## Arguments
    /// * `vocab` - The raw vocabulary.
    ///
    /// ## Returns
    /// The vocab, or:
    /// * [`BytechipperError::TokenOutOfRange`] if an id does not fit `T`.
    /// * [`BytechipperError::DuplicateTokenId`] if two surfaces share an id.
    pub fn from_raw(vocab: &BCHashMap<String, u32>) -> BCResult<Self> {
        let mut surface_tokens: SurfaceTokenMap<T> = BCHashMap::with_capacity(vocab.len());
        let mut token_surfaces: TokenSurfaceMap<T> = BCHashMap::with_capacity(vocab.len());

        for (surface, &id) in vocab {
            let token = try_token::<T>(id)?;
            if let Some(other) = token_surfaces.insert(token, surface.clone()) {
                let (first, second) = if other < *surface {
                    (other, surface.clone())
                } else {
                    (surface.clone(), other)
                };
                return Err(BytechipperError::DuplicateTokenId {
                    token: id as u64,
                    first,
                    second,
                });
            }
            surface_tokens.insert(surface.clone(), token);
        }

        Ok(Self {
            surface_tokens,
            token_surfaces,
        })
    }

    /// Register the surfaces of all added tokens.
    ///
    /// An added token whose surface is already present must carry the same id;
    /// an added token whose id is already present must carry the same surface.
    ///
    /// ## Returns
    /// [`BytechipperError::AddedTokenConflict`] on any collision.
    pub fn extend_added(
        &mut self,
        added: &AddedTokenVocab<T>,
    ) -> BCResult<()> {
        for entry in added.entries() {
            let surface = entry.surface();
            let conflict = |existing_surface: &str, existing: T| {
                BytechipperError::AddedTokenConflict {
                    content: entry.content().to_string(),
                    token: token_id(entry.token()),
                    surface: existing_surface.to_string(),
                    existing: token_id(existing),
                }
            };

            if let Some(&existing) = self.surface_tokens.get(&surface)
                && existing != entry.token()
            {
                return Err(conflict(&surface, existing));
            }
            if let Some(existing_surface) = self.token_surfaces.get(&entry.token())
                && *existing_surface != surface
            {
                return Err(conflict(existing_surface, entry.token()));
            }

            self.token_surfaces.insert(entry.token(), surface.clone());
            self.surface_tokens.insert(surface, entry.token());
        }
        Ok(())
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.surface_tokens.len()
    }

    /// Is this vocab empty?
    pub fn is_empty(&self) -> bool {
        self.surface_tokens.is_empty()
    }

    /// The largest token, if any.
    pub fn max_token(&self) -> Option<T> {
        self.token_surfaces.keys().copied().max()
    }

    /// The forward map.
    pub fn surface_tokens(&self) -> &SurfaceTokenMap<T> {
        &self.surface_tokens
    }

    /// The reverse map.
    pub fn token_surfaces(&self) -> &TokenSurfaceMap<T> {
        &self.token_surfaces
    }

    /// Look up the token for a surface string.
    #[inline]
    pub fn lookup_token(
        &self,
        surface: &str,
    ) -> Option<T> {
        self.surface_tokens.get(surface).copied()
    }

    /// Look up the surface string for a token.
    #[inline]
    pub fn lookup_surface(
        &self,
        token: T,
    ) -> Option<&str> {
        self.token_surfaces.get(&token).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AddedTokenSpec, testing::fixture_raw_vocab, vocab::ByteMapVocab};

    fn added(
        surfaces: &SurfaceVocab<u32>,
        specs: &[AddedTokenSpec],
    ) -> AddedTokenVocab<u32> {
        let byte_vocab = ByteMapVocab::from_surface_vocab(surfaces).unwrap();
        AddedTokenVocab::from_specs(specs, &byte_vocab).unwrap()
    }

    #[test]
    fn test_from_raw() {
        let vocab = SurfaceVocab::<u32>::from_raw(&fixture_raw_vocab()).unwrap();

        assert_eq!(vocab.lookup_token("Ġworld"), Some(264));
        assert_eq!(vocab.lookup_surface(264), Some("Ġworld"));
        assert_eq!(vocab.lookup_token("nope"), None);

        for (&token, surface) in vocab.token_surfaces() {
            assert_eq!(vocab.surface_tokens()[surface], token);
        }
        assert_eq!(vocab.len(), vocab.token_surfaces().len());
    }

    #[test]
    fn test_duplicate_id() {
        let mut raw = fixture_raw_vocab();
        raw.insert("zz".to_string(), 259);

        assert!(matches!(
            SurfaceVocab::<u32>::from_raw(&raw),
            Err(BytechipperError::DuplicateTokenId { token: 259, first, second })
                if first == "hello" && second == "zz"
        ));
    }

    #[test]
    fn test_out_of_range() {
        let mut raw = fixture_raw_vocab();
        raw.insert("big".to_string(), 70_000);

        assert!(matches!(
            SurfaceVocab::<u16>::from_raw(&raw),
            Err(BytechipperError::TokenOutOfRange { id: 70_000 })
        ));
    }

    #[test]
    fn test_extend_added() {
        let mut vocab = SurfaceVocab::<u32>::from_raw(&fixture_raw_vocab()).unwrap();
        let before = vocab.len();

        let specs = [
            AddedTokenSpec::new(300, "<|endoftext|>"),
            AddedTokenSpec::new(301, "a b"),
        ];
        let added = added(&vocab, &specs);
        vocab.extend_added(&added).unwrap();

        assert_eq!(vocab.len(), before + 2);
        assert_eq!(vocab.lookup_token("<|endoftext|>"), Some(300));
        assert_eq!(vocab.lookup_token("aĠb"), Some(301));
        assert_eq!(vocab.lookup_surface(301), Some("aĠb"));

        // Re-registering the same pairs is a no-op.
        vocab.extend_added(&added).unwrap();
        assert_eq!(vocab.len(), before + 2);
    }

    #[test]
    fn test_extend_added_conflicts() {
        let vocab = SurfaceVocab::<u32>::from_raw(&fixture_raw_vocab()).unwrap();

        // Surface "hello" already has id 259.
        let mut v = vocab.clone();
        let a = added(&vocab, &[AddedTokenSpec::new(400, "hello")]);
        assert!(matches!(
            v.extend_added(&a),
            Err(BytechipperError::AddedTokenConflict { token: 400, existing: 259, .. })
        ));

        // Id 259 already names "hello".
        let mut v = vocab.clone();
        let a = added(&vocab, &[AddedTokenSpec::new(259, "<|x|>")]);
        assert!(matches!(
            v.extend_added(&a),
            Err(BytechipperError::AddedTokenConflict { token: 259, existing: 259, surface, .. })
                if surface == "hello"
        ));

        // Matching surface and id is accepted.
        let mut v = vocab.clone();
        let a = added(&vocab, &[AddedTokenSpec::new(259, "hello")]);
        v.extend_added(&a).unwrap();
    }
}
