//! # `bytechipper` Byte-Level BPE Tokenizer
//!
//! This is a byte-level BPE tokenizer for GPT-2 / GPT-NeoX style
//! vocabularies, as distributed in HuggingFace ``tokenizer.json`` files.
//!
//! See:
//! * [`Tokenizer`] to encode text into tokens and decode tokens into text.
//! * [`TokenizerSpec`] / [`TokenizerOptions`] to configure and build one.
//! * [`io`] to load a [`TokenizerSpec`] from a ``tokenizer.json`` file.
//! * [`vocab`] for the lookup tables, and the byte <=> surface codec.
//! * [`encoders`] and [`decoders`] for the underlying encode / decode traits.
//!
//! ## Encoding Pipeline
//!
//! ```text
//! text -> normalize -> added-token split -> word split
//!      -> bytes -> byte tokens -> rule-major merges
//!      -> leading-space correction -> tokens
//! ```
//!
//! Decoding maps each token straight to its bytes, and then to a (lossy)
//! UTF-8 string.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``json``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::BCHash{*}`` type alias machinery.
//!
//! #### feature: ``json``
//!
//! This enables the [`io`] module, which reads HuggingFace ``tokenizer.json`` files.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! #### feature: ``testing``
//!
//! This exports the [`testing`] fixtures for downstream tests.
//!
//! ## Example
//!
//! ```rust
//! use bytechipper::{Tokenizer, TokenizerOptions, TokenizerSpec, types::BCHashMap, vocab::byte_surface::byte_to_surface};
//!
//! let mut vocab: BCHashMap<String, u32> = (0..=255u8)
//!     .map(|b| (byte_to_surface(b).to_string(), b as u32))
//!     .collect();
//! vocab.insert("hi".to_string(), 256);
//!
//! let spec = TokenizerSpec::new(vocab, ["h i"]).with_added_token(257, "<|endoftext|>");
//! let tokenizer: Tokenizer<u32> = TokenizerOptions::default().build(&spec)?;
//!
//! let tokens = tokenizer.encode("hi<|endoftext|>")?;
//! assert_eq!(tokens, vec![256, 257]);
//! assert_eq!(tokenizer.decode(&tokens)?, "hi<|endoftext|>");
//! # Ok::<(), bytechipper::BytechipperError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod config;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod normalization;
pub mod regex;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[cfg(feature = "json")]
pub mod io;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use config::{AddedTokenSpec, TokenizerSpec};
#[doc(inline)]
pub use decoders::{DictionaryDecoder, TokenDecoder};
#[doc(inline)]
pub use encoders::{BytePairEncoder, TokenEncoder};
#[doc(inline)]
pub use errors::{BCResult, BytechipperError, ErrorKind};
#[doc(inline)]
pub use normalization::NormalizationForm;
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::UnifiedTokenVocab;
