//! # Encoders
//!
//! * [`TokenEncoder`] - the text => tokens trait.
//! * [`BytePairEncoder`] - the added-token / word / merge pipeline.
//! * [`SpanEncoder`] - the per-word merge policy:
//!   * [`RuleMajorSpanEncoder`] - the default.
//!   * [`ReferenceSpanEncoder`] - a literal pass per rule.

pub mod byte_pair_encoder;
pub mod span_encoder;
pub mod token_encoder;

#[doc(inline)]
pub use byte_pair_encoder::BytePairEncoder;
#[doc(inline)]
pub use span_encoder::{ReferenceSpanEncoder, RuleMajorSpanEncoder, SpanEncoder};
#[doc(inline)]
pub use token_encoder::TokenEncoder;
