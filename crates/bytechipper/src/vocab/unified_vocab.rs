//! # Unified Token Vocabulary

use crate::{
    TokenizerOptions,
    config::TokenizerSpec,
    errors::BCResult,
    normalization::NormalizationForm,
    types::{TokenType, try_token},
    vocab::{
        AddedTokenVocab,
        ByteMapVocab,
        LeadingSpaceCorrection,
        MergeTable,
        SurfaceVocab,
    },
};

/// Unified token vocabulary.
///
/// All lookup tables for one loaded configuration; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedTokenVocab<T: TokenType> {
    surfaces: SurfaceVocab<T>,
    byte_vocab: ByteMapVocab<T>,
    added: AddedTokenVocab<T>,
    merges: MergeTable<T>,
    space_correction: Option<LeadingSpaceCorrection<T>>,
    normalizer: NormalizationForm,
}

impl<T: TokenType> AsRef<UnifiedTokenVocab<T>> for UnifiedTokenVocab<T> {
    fn as_ref(&self) -> &UnifiedTokenVocab<T> {
        self
    }
}

impl<T: TokenType> UnifiedTokenVocab<T> {
    /// Build all tables from a configuration.
    ///
    /// ## Arguments
    /// * `spec` - The vocab, merges, added tokens and normalizer.
    /// * `options` - Controls the leading-space correction.
    ///
    /// ## Returns
    /// The vocab, or the first configuration error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_spec(
        spec: &TokenizerSpec,
        options: &TokenizerOptions,
    ) -> BCResult<Self> {
        let mut surfaces = SurfaceVocab::<T>::from_raw(&spec.vocab)?;
        let byte_vocab = ByteMapVocab::from_surface_vocab(&surfaces)?;
        let added = AddedTokenVocab::from_specs(&spec.added_tokens, &byte_vocab)?;
        surfaces.extend_added(&added)?;

        let merges = MergeTable::from_merges(&spec.merges, &surfaces)?;

        let space_correction = if options.leading_space_correction {
            let sentinel = options.space_sentinel.map(try_token::<T>).transpose()?;
            let table = LeadingSpaceCorrection::from_vocab(&surfaces, sentinel);
            if table.is_none() {
                log::warn!("no leading-space sentinel in vocab; correction disabled");
            }
            table
        } else {
            None
        };

        log::debug!(
            "built vocab: {} surfaces, {} merges, {} added tokens, {} space corrections",
            surfaces.len(),
            merges.len(),
            added.len(),
            space_correction.as_ref().map_or(0, LeadingSpaceCorrection::len),
        );

        Ok(Self {
            surfaces,
            byte_vocab,
            added,
            merges,
            space_correction,
            normalizer: spec.normalizer,
        })
    }

    /// The number of surface entries, added tokens included.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Is this vocab empty?
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// The largest token, if any.
    pub fn max_token(&self) -> Option<T> {
        self.surfaces.max_token()
    }

    /// The surface vocab.
    pub fn surfaces(&self) -> &SurfaceVocab<T> {
        &self.surfaces
    }

    /// The byte table.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        &self.byte_vocab
    }

    /// The added tokens.
    pub fn added_tokens(&self) -> &AddedTokenVocab<T> {
        &self.added
    }

    /// The merge table.
    pub fn merges(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// The leading-space correction, if enabled.
    pub fn space_correction(&self) -> Option<&LeadingSpaceCorrection<T>> {
        self.space_correction.as_ref()
    }

    /// The normalization form applied before splitting.
    pub fn normalizer(&self) -> NormalizationForm {
        self.normalizer
    }

    /// Look up the token for a surface string.
    pub fn lookup_token(
        &self,
        surface: &str,
    ) -> Option<T> {
        self.surfaces.lookup_token(surface)
    }

    /// Look up the surface string for a token.
    pub fn lookup_surface(
        &self,
        token: T,
    ) -> Option<&str> {
        self.surfaces.lookup_surface(token)
    }
}
