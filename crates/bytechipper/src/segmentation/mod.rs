//! # Text Segmentation
//!
//! Encoding splits text twice before any merging happens:
//!
//! 1. [`AddedTokenSplitter`] slices added-token literals out of the raw text,
//!    yielding [`SpanRef::Literal`] and [`SpanRef::Text`] elements.
//! 2. [`WordSegmentor`] splits each text element into words; the GPT-2
//!    pattern runs on the [`Gpt2Words`] lexer.

pub mod added_token_splitter;
pub mod gpt2_lexer;
pub mod word_segmentor;

#[doc(inline)]
pub use added_token_splitter::{AddedTokenSpans, AddedTokenSplitter, SpanRef};
#[doc(inline)]
pub use gpt2_lexer::Gpt2Words;
#[doc(inline)]
pub use word_segmentor::{WordSegmentor, Words};
