//! # Byte/Surface Codec
//!
//! Byte-level BPE vocabularies are keyed by *surface strings*: every raw byte
//! is represented by one printable code point, so that arbitrary byte sequences
//! can be stored in a text-keyed table.
//!
//! The printable bytes ``0x21..=0x7E``, ``0xA1..=0xAC`` and ``0xAE..=0xFF``
//! are their own surface. The remaining 68 bytes are assigned, in ascending
//! byte order, to ``U+0100`` upwards; so the space byte ``0x20`` becomes ``'Ġ'``
//! (``U+0120``).
//!
//! Both directions are precomputed as static tables.

use crate::errors::{BCResult, BytechipperError};

/// The surface of the space byte.
pub const SPACE_SURFACE: char = '\u{0120}';

/// One past the largest surface code point.
const SURFACE_LIMIT: usize = 0x144;

const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x21..=0x7E | 0xA1..=0xAC | 0xAE..=0xFF)
}

const fn build_byte_surfaces() -> [char; 256] {
    let mut table = ['\0'; 256];
    let mut shifted = 0;
    let mut b = 0;
    while b < 256 {
        let byte = b as u8;
        table[b] = if is_printable(byte) {
            byte as char
        } else {
            let c = match char::from_u32(0x100 + shifted) {
                Some(c) => c,
                None => '\0',
            };
            shifted += 1;
            c
        };
        b += 1;
    }
    table
}

const fn build_surface_bytes() -> [Option<u8>; SURFACE_LIMIT] {
    let surfaces = build_byte_surfaces();
    let mut table = [None; SURFACE_LIMIT];
    let mut b = 0;
    while b < 256 {
        table[surfaces[b] as usize] = Some(b as u8);
        b += 1;
    }
    table
}

/// Byte ordinal => surface code point.
static BYTE_SURFACES: [char; 256] = build_byte_surfaces();

/// Surface code point => byte ordinal.
static SURFACE_BYTES: [Option<u8>; SURFACE_LIMIT] = build_surface_bytes();

/// Get the surface code point of a byte.
#[inline(always)]
pub fn byte_to_surface(byte: u8) -> char {
    BYTE_SURFACES[byte as usize]
}

/// Get the byte of a surface code point.
///
/// ## Returns
/// `None` if `c` is not one of the 256 surface code points.
#[inline(always)]
pub fn surface_to_byte(c: char) -> Option<u8> {
    SURFACE_BYTES.get(c as usize).copied().flatten()
}

/// Map a byte sequence to its surface string.
pub fn bytes_to_surface(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| byte_to_surface(b)).collect()
}

/// Map a surface string back to its bytes.
///
/// ## Returns
/// The bytes, or [`BytechipperError::InvalidSurface`] on a character
/// outside the surface alphabet.
pub fn surface_to_bytes(surface: &str) -> BCResult<Vec<u8>> {
    surface
        .chars()
        .map(|ch| {
            surface_to_byte(ch).ok_or_else(|| BytechipperError::InvalidSurface {
                surface: surface.to_string(),
                ch,
            })
        })
        .collect()
}
