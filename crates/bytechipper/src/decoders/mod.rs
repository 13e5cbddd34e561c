//! # Decoders
//!
//! Decoding needs no segmentation: each token maps straight to its bytes.

pub mod dictionary_decoder;
pub mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::DictionaryDecoder;
#[doc(inline)]
pub use token_decoder::{TokenDecoder, string_from_utf8_lossy};
