//! # Vocabulary
//!
//! Everything here is built once from a [`TokenizerSpec`](crate::TokenizerSpec)
//! and never mutated afterward.
//!
//! * [`byte_surface`] - the byte <=> surface code point bijection.
//! * [`SurfaceVocab`] - the ``surface <=> token`` tables.
//! * [`ByteMapVocab`] - the ``byte => token`` table.
//! * [`AddedTokenVocab`] - the ordered added tokens.
//! * [`MergeTable`] - the ranked merge rules.
//! * [`LeadingSpaceCorrection`] - the ``[sentinel, x]`` correction table.
//! * [`UnifiedTokenVocab`] - all of the above.

pub mod added_vocab;
pub mod byte_surface;
pub mod byte_vocab;
pub mod merge_table;
pub mod space_correction;
pub mod surface_vocab;
pub mod unified_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use added_vocab::{AddedToken, AddedTokenVocab};
#[doc(inline)]
pub use byte_vocab::ByteMapVocab;
#[doc(inline)]
pub use merge_table::{MergeRule, MergeTable};
#[doc(inline)]
pub use space_correction::LeadingSpaceCorrection;
#[doc(inline)]
pub use surface_vocab::SurfaceVocab;
#[doc(inline)]
pub use unified_vocab::UnifiedTokenVocab;
#[doc(inline)]
pub use vocab_types::*;
