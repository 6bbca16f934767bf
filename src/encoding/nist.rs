//! NIST SP 800-185 encoding primitives.
//!
//! This implementation is byte-oriented: every string is a whole number of
//! bytes, so bit lengths are always multiples of eight and the bit-level
//! padding steps of the standard collapse to byte operations.
//!
//! Integers are taken as `u64`, which is always below the `2^2040` bound the
//! standard imposes on `left_encode` and `right_encode`.

use crate::error::{Error, Result};

/// Returns the minimal big-endian encoding of `x`, at least one byte long.
#[inline]
fn minimal_be(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = (x.leading_zeros() / 8).min(7) as usize;

    bytes[skip..].to_vec()
}

/// Encodes `x` as its byte count followed by its big-endian bytes.
///
/// `left_encode(0) == [0x01, 0x00]`.
pub fn left_encode(x: u64) -> Vec<u8> {
    let digits = minimal_be(x);

    let mut out = Vec::with_capacity(digits.len() + 1);
    out.push(digits.len() as u8);
    out.extend_from_slice(&digits);

    out
}

/// Encodes `x` as its big-endian bytes followed by their count.
///
/// `right_encode(0) == [0x00, 0x01]`.
pub fn right_encode(x: u64) -> Vec<u8> {
    let mut out = minimal_be(x);
    let n = out.len() as u8;
    out.push(n);

    out
}

/// Prefixes `s` with the `left_encode` of its length in bits.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let prefix = left_encode(8 * s.len() as u64);

    let mut out = Vec::with_capacity(prefix.len() + s.len());
    out.extend_from_slice(&prefix);
    out.extend_from_slice(s);

    out
}

/// Prepends `left_encode(w)` to `x` and zero-pads the result to a multiple
/// of `w` bytes.
///
/// # Errors
///
/// Returns [`Error::DomainError`] if `w` is zero.
pub fn bytepad(x: &[u8], w: usize) -> Result<Vec<u8>> {
    if w == 0 {
        return Err(Error::DomainError("bytepad width must be positive"));
    }

    Ok(bytepad_unchecked(x, w))
}

/// `bytepad` for callers that pass a non-zero constant width.
pub(crate) fn bytepad_unchecked(x: &[u8], w: usize) -> Vec<u8> {
    let prefix = left_encode(w as u64);
    let len = prefix.len() + x.len();
    let padded_len = len.div_ceil(w) * w;

    let mut z = Vec::with_capacity(padded_len);
    z.extend_from_slice(&prefix);
    z.extend_from_slice(x);
    z.resize(padded_len, 0);

    z
}

/// Returns the bytes of `x` at positions `a..b`, clamped to the length of `x`.
///
/// The result is empty when `a >= b` or `a >= x.len()`.
pub fn substring(x: &[u8], a: usize, b: usize) -> &[u8] {
    if a >= b || a >= x.len() {
        return &[];
    }

    &x[a..b.min(x.len())]
}
