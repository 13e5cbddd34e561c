//! # Tokenizer Configuration
//!
//! [`TokenizerSpec`] is the fully-parsed configuration a tokenizer is built
//! from. It is format independent; see [`io`](crate::io) for loading one
//! from a ``tokenizer.json`` file.

use crate::{normalization::NormalizationForm, types::BCHashMap};

/// One added token: a literal string with a fixed id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddedTokenSpec {
    /// The token id.
    pub id: u32,

    /// The literal content.
    pub content: String,
}

impl AddedTokenSpec {
    /// Create a new added token.
    pub fn new<S: Into<String>>(
        id: u32,
        content: S,
    ) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

/// Vocabulary, merges, added tokens and normalizer of one tokenizer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TokenizerSpec {
    /// ``{ surface -> id }``; ids must be unique.
    pub vocab: BCHashMap<String, u32>,

    /// ``"<left> <right>"`` merge rules, in priority order.
    pub merges: Vec<String>,

    /// Added tokens, in registration order.
    pub added_tokens: Vec<AddedTokenSpec>,

    /// The normalization applied before splitting.
    pub normalizer: NormalizationForm,
}

impl TokenizerSpec {
    /// Create a spec with no added tokens and no normalization.
    pub fn new<I, S>(
        vocab: BCHashMap<String, u32>,
        merges: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocab,
            merges: merges.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Add an added token.
    pub fn with_added_token<S: Into<String>>(
        mut self,
        id: u32,
        content: S,
    ) -> Self {
        self.added_tokens.push(AddedTokenSpec::new(id, content));
        self
    }

    /// Set the normalizer.
    pub fn with_normalizer(
        mut self,
        normalizer: NormalizationForm,
    ) -> Self {
        self.normalizer = normalizer;
        self
    }
}
