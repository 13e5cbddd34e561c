//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{BCResult, BytechipperError};

/// A type that can be used as a token in a BPE-based encoders.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Expected bytes/token ratio.
pub const EXPECTED_BYTES_PER_TOKEN: f32 = 4.0;

/// A pair of tokens.
pub type Pair<T> = (T, T);

/// Convert an external token id into `T`.
///
/// ## Returns
/// The token, or [`BytechipperError::TokenOutOfRange`] if `id` does not fit `T`.
pub fn try_token<T: TokenType>(id: u32) -> BCResult<T> {
    T::from_u32(id).ok_or(BytechipperError::TokenOutOfRange { id: id as u64 })
}

/// Widen a token to `u64`, for error reporting.
pub fn token_id<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type BCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BCHashSet<V> = ahash::AHashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type BCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BCHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_try_token() {
        assert_eq!(try_token::<u32>(70_000).unwrap(), 70_000);
        assert_eq!(try_token::<u16>(65_535).unwrap(), 65_535);
        assert!(matches!(
            try_token::<u16>(70_000),
            Err(BytechipperError::TokenOutOfRange { id: 70_000 })
        ));

        assert_eq!(token_id(12_u16), 12);
    }
}
