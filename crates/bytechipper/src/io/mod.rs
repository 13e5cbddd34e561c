//! # Configuration IO
//!
//! ## Loading A Tokenizer
//!
//! ```rust,no_run
//! use bytechipper::{Tokenizer, TokenizerOptions, io::load_tokenizer_path};
//!
//! fn example() -> bytechipper::BCResult<Vec<u32>> {
//!     let tokenizer: Tokenizer<u32> =
//!         load_tokenizer_path("tokenizer.json", &TokenizerOptions::default())?;
//!
//!     tokenizer.encode("hello world")
//! }
//! ```

mod hf_json;

#[doc(inline)]
pub use hf_json::*;
