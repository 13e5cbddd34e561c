//! # Tokenizer Options

use std::sync::Arc;

use crate::{
    BytePairEncoder,
    DictionaryDecoder,
    TokenType,
    Tokenizer,
    UnifiedTokenVocab,
    config::TokenizerSpec,
    errors::BCResult,
    regex::{GPT2_WORD_PATTERN, RegexPattern},
    segmentation::WordSegmentor,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerOptions {
    /// Apply the leading-space correction after encoding.
    pub leading_space_correction: bool,

    /// Override the leading-space sentinel; defaults to the token of ``"Ġ"``.
    pub space_sentinel: Option<u32>,

    /// The word split pattern.
    pub word_pattern: RegexPattern,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            leading_space_correction: true,
            space_sentinel: None,
            word_pattern: GPT2_WORD_PATTERN.into(),
        }
    }
}

impl TokenizerOptions {
    /// Sets whether the leading-space correction is applied.
    pub fn with_leading_space_correction(
        mut self,
        enabled: bool,
    ) -> Self {
        self.leading_space_correction = enabled;
        self
    }

    /// Sets the leading-space sentinel override.
    pub fn with_space_sentinel(
        mut self,
        sentinel: Option<u32>,
    ) -> Self {
        self.space_sentinel = sentinel;
        self
    }

    /// Sets the word split pattern.
    pub fn with_word_pattern<P: Into<RegexPattern>>(
        mut self,
        pattern: P,
    ) -> Self {
        self.word_pattern = pattern.into();
        self
    }

    /// Build a [`Tokenizer`] for the given configuration.
    ///
    /// ## Returns
    /// The tokenizer, or the first configuration error; a tokenizer is never
    /// returned partially built.
    pub fn build<T: TokenType>(
        &self,
        spec: &TokenizerSpec,
    ) -> BCResult<Tokenizer<T>> {
        let vocab: Arc<UnifiedTokenVocab<T>> = Arc::new(UnifiedTokenVocab::from_spec(spec, self)?);
        self.build_for_vocab(vocab)
    }

    /// Build a [`Tokenizer`] around an existing vocab.
    pub fn build_for_vocab<T: TokenType>(
        &self,
        vocab: Arc<UnifiedTokenVocab<T>>,
    ) -> BCResult<Tokenizer<T>> {
        let segmentor = WordSegmentor::from_pattern(self.word_pattern.clone())?;
        let encoder = BytePairEncoder::new(vocab.clone(), segmentor)?;
        let decoder = DictionaryDecoder::from_unified_vocab(vocab.clone())?;

        Ok(Tokenizer::new(vocab, Arc::new(encoder), Arc::new(decoder)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_spec;

    #[test]
    fn test_defaults() {
        let options = TokenizerOptions::default();
        assert!(options.leading_space_correction);
        assert_eq!(options.space_sentinel, None);
        assert_eq!(options.word_pattern.as_str(), GPT2_WORD_PATTERN.as_str());
    }

    #[test]
    fn test_builders() {
        let options = TokenizerOptions::default()
            .with_leading_space_correction(false)
            .with_space_sentinel(Some(3))
            .with_word_pattern(r"\w+|\W+");

        assert!(!options.leading_space_correction);
        assert_eq!(options.space_sentinel, Some(3));
        assert_eq!(
            options.word_pattern,
            RegexPattern::Adaptive(r"\w+|\W+".to_string())
        );
    }

    #[test]
    fn test_word_pattern_override() {
        let tokenizer = TokenizerOptions::default()
            .with_word_pattern(r"\S+|\s+")
            .build::<u32>(&fixture_spec())
            .unwrap();

        // " " and "hello" are separate words, so no " hello" span is merged;
        // the correction still joins them.
        assert_eq!(tokenizer.encode("a hello").unwrap(), vec![97, 269]);

        let tokenizer = TokenizerOptions::default()
            .with_word_pattern(r"\S+|\s+")
            .with_leading_space_correction(false)
            .build::<u32>(&fixture_spec())
            .unwrap();
        assert_eq!(tokenizer.encode("a hello").unwrap(), vec![97, 32, 259]);
    }

    #[test]
    fn test_bad_word_pattern() {
        assert!(
            TokenizerOptions::default()
                .with_word_pattern("(")
                .build::<u32>(&fixture_spec())
                .is_err()
        );
    }
}
