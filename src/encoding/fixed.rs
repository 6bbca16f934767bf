//! Fixed-width big-endian integer encoding.
//!
//! Curve coordinates, scalars, and signature components are always
//! non-negative and bounded by a known modulus, so each is written into a
//! fixed number of bytes, left-filled with `0x00`. Decoding is the exact
//! inverse and treats the bytes as an unsigned integer.

use num_bigint::BigUint;

/// Writes `value` big-endian into `out`, left-filled with zero bytes.
///
/// `value` must fit in `out.len()` bytes. Callers only pass values reduced
/// below a modulus that fits; excess high-order bytes are dropped.
pub(crate) fn write_be(value: &BigUint, out: &mut [u8]) {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= out.len());

    out.fill(0);

    let take = bytes.len().min(out.len());
    let width = out.len();
    out[width - take..].copy_from_slice(&bytes[bytes.len() - take..]);
}

/// Encodes `value` big-endian into a fixed `N`-byte array.
///
/// Precondition: `value < 2^(8·N)`. Callers reduce below a modulus that
/// fits `N` bytes first (`p`, `r`, or a 512-bit digest); a wider value
/// fails a debug assertion and is truncated to its low `N` bytes in
/// release builds.
pub(crate) fn to_be_array<const N: usize>(value: &BigUint) -> [u8; N] {
    let mut out = [0u8; N];
    write_be(value, &mut out);

    out
}

/// Decodes big-endian bytes as an unsigned integer.
#[inline]
pub(crate) fn from_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
