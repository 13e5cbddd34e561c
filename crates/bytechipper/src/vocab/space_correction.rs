//! # Leading-Space Correction
//!
//! The trained model merges a lone leading-space marker (``'Ġ'``) into the
//! following token more eagerly than the merge table predicts. After encoding,
//! a ``[sentinel, x]`` pair is collapsed into ``"Ġ" + surface(x)`` whenever that
//! surface is in the vocab.
//!
//! The table is bound to one sentinel token, and can be disabled through
//! [`TokenizerOptions`](crate::TokenizerOptions) for vocabularies without the
//! quirk.

use core::fmt::Debug;

use crate::{
    types::{BCHashMap, TokenType},
    vocab::{SurfaceVocab, TokenTokenMap, byte_surface::SPACE_SURFACE},
};

/// ``{ x -> "Ġ" + x }`` correction table for one sentinel token.
#[derive(Clone, PartialEq)]
pub struct LeadingSpaceCorrection<T: TokenType> {
    sentinel: T,
    corrections: TokenTokenMap<T>,
}

impl<T: TokenType> Debug for LeadingSpaceCorrection<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("LeadingSpaceCorrection")
            .field("sentinel", &self.sentinel)
            .field("corrections", &self.corrections.len())
            .finish()
    }
}

impl<T: TokenType> LeadingSpaceCorrection<T> {
    /// Build a correction table.
    pub fn new(
        sentinel: T,
        corrections: TokenTokenMap<T>,
    ) -> Self {
        Self {
            sentinel,
            corrections,
        }
    }

    /// Derive the table from a vocab.
    ///
    /// Every surface ``"Ġ" + rest`` where ``rest`` is also in the vocab yields
    /// the entry ``token(rest) -> token("Ġ" + rest)``.
    ///
    /// ## Arguments
    /// * `vocab` - The surface vocab.
    /// * `sentinel` - The sentinel override; defaults to the token of ``"Ġ"``.
    ///
    /// ## Returns
    /// `None` when no sentinel is given and ``"Ġ"`` is not in the vocab.
    pub fn from_vocab(
        vocab: &SurfaceVocab<T>,
        sentinel: Option<T>,
    ) -> Option<Self> {
        let sentinel =
            sentinel.or_else(|| vocab.lookup_token(SPACE_SURFACE.encode_utf8(&mut [0; 4])))?;

        let mut corrections: TokenTokenMap<T> = BCHashMap::default();
        for (surface, &token) in vocab.surface_tokens() {
            if let Some(rest) = surface.strip_prefix(SPACE_SURFACE)
                && let Some(rest_token) = vocab.lookup_token(rest)
            {
                corrections.insert(rest_token, token);
            }
        }

        Some(Self::new(sentinel, corrections))
    }

    /// The sentinel token.
    pub fn sentinel(&self) -> T {
        self.sentinel
    }

    /// The number of corrections.
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    /// Is the correction map empty?
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Look up the correction for the token after a sentinel.
    #[inline]
    pub fn lookup(
        &self,
        token: T,
    ) -> Option<T> {
        self.corrections.get(&token).copied()
    }

    /// Collapse ``[sentinel, x]`` pairs in `tokens[start..]`, in place.
    ///
    /// Scanning resumes at the corrected position; so a correction only
    /// chains when the corrected token is itself the sentinel.
    pub fn apply(
        &self,
        tokens: &mut Vec<T>,
        start: usize,
    ) {
        if self.corrections.is_empty() || tokens.len() < start + 2 {
            return;
        }

        let mut write = start;
        let mut read = start;
        while read < tokens.len() {
            let mut current = tokens[read];
            read += 1;
            while current == self.sentinel
                && let Some(&next) = tokens.get(read)
                && let Some(corrected) = self.lookup(next)
            {
                current = corrected;
                read += 1;
            }
            tokens[write] = current;
            write += 1;
        }
        tokens.truncate(write);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_raw_vocab;

    fn table() -> LeadingSpaceCorrection<u32> {
        let vocab = SurfaceVocab::from_raw(&fixture_raw_vocab()).unwrap();
        LeadingSpaceCorrection::from_vocab(&vocab, None).unwrap()
    }

    #[test]
    fn test_from_vocab() {
        let table = table();
        assert_eq!(table.sentinel(), 32);

        // "Ġhello" 269, "hello" 259.
        assert_eq!(table.lookup(259), Some(269));
        // "Ġworld" 264, but "world" is not in the vocab.
        assert_eq!(table.lookup(264), None);
        // "Ġw" 261, "w" 119.
        assert_eq!(table.lookup(119), Some(261));
        // "Ġthe" 266, "the" is not in the vocab.
        assert_eq!(table.lookup(266), None);
    }

    #[test]
    fn test_sentinel_override() {
        let vocab = SurfaceVocab::from_raw(&fixture_raw_vocab()).unwrap();
        let table = LeadingSpaceCorrection::<u32>::from_vocab(&vocab, Some(7)).unwrap();
        assert_eq!(table.sentinel(), 7);
        assert_eq!(table.lookup(259), Some(269));
    }

    #[test]
    fn test_apply() {
        let table = table();

        let mut tokens = vec![32, 259];
        table.apply(&mut tokens, 0);
        assert_eq!(tokens, vec![269]);

        let mut tokens = vec![32, 32, 259, 1, 32];
        table.apply(&mut tokens, 0);
        assert_eq!(tokens, vec![32, 269, 1, 32]);

        let mut tokens = vec![32, 259, 32, 119, 32, 259];
        table.apply(&mut tokens, 0);
        assert_eq!(tokens, vec![269, 261, 269]);

        let mut tokens = vec![];
        table.apply(&mut tokens, 0);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_apply_once() {
        let mut corrections = TokenTokenMap::default();
        corrections.insert(5_u32, 6);
        corrections.insert(6, 7);
        let table = LeadingSpaceCorrection::new(1, corrections);

        // [1, 5] => 6; the 6 is not re-read as a pair tail.
        let mut tokens = vec![1, 5, 6];
        table.apply(&mut tokens, 0);
        assert_eq!(tokens, vec![6, 6]);

        let mut tokens = vec![1, 1, 5];
        table.apply(&mut tokens, 0);
        assert_eq!(tokens, vec![1, 6]);
    }

    #[test]
    fn test_apply_rescans_sentinel() {
        let mut corrections = TokenTokenMap::default();
        corrections.insert(5_u32, 1);
        corrections.insert(6, 9);
        let table = LeadingSpaceCorrection::new(1, corrections);

        let mut tokens = vec![1, 5, 6, 2];
        table.apply(&mut tokens, 0);
        assert_eq!(tokens, vec![9, 2]);
    }

    #[test]
    fn test_apply_from_start() {
        let table = table();

        let mut tokens = vec![32, 259, 32, 259];
        table.apply(&mut tokens, 2);
        assert_eq!(tokens, vec![32, 259, 269]);

        let mut tokens = vec![32, 259];
        table.apply(&mut tokens, 1);
        assert_eq!(tokens, vec![32, 259]);
    }
}
