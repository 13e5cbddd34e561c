//! # Vocabulary Types

use crate::types::{BCHashMap, Pair};

/// `{ String -> T }` map, keyed by surface string.
///
/// ## Style Hints
/// Instance names should prefer `surface_tokens`, or `surface_token_map`.
pub type SurfaceTokenMap<T> = BCHashMap<String, T>;

/// `{ T -> String }` map, the inverse of [`SurfaceTokenMap`].
///
/// ## Style Hints
/// Instance names should prefer `token_surfaces`, or `token_surface_map`.
pub type TokenSurfaceMap<T> = BCHashMap<T, String>;

/// `{ T -> u8 }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_bytes`, or `token_byte_map`.
pub type TokenByteMap<T> = BCHashMap<T, u8>;

/// `[T; 256]` array.
///
/// ## Style Hints
/// Instance names should prefer `byte_tokens`, or `byte_token_array`.
pub type ByteTokenArray<T> = [T; 256];

/// `{ Pair<T> -> Vec<rank> }` map; ranks ascending.
///
/// ## Style Hints
/// Instance names should prefer `pair_ranks`.
pub type PairRanksMap<T> = BCHashMap<Pair<T>, Vec<u32>>;

/// `{ T -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `corrections`.
pub type TokenTokenMap<T> = BCHashMap<T, T>;
