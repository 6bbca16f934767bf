//! Sponge construction over Keccak-f[1600].
//!
//! The sponge absorbs the padded input one rate-sized block at a time,
//! permuting after every block, then squeezes rate-sized blocks until the
//! requested output length is reached.
//!
//! Domain-separation suffixes (SHAKE's `1111`, cSHAKE's `00`, SHA-3's `01`)
//! are appended by the caller as a single trailing byte before padding; the
//! 10*1 padding then ORs the closing bit into the last byte of the final
//! block, so a lone pad byte becomes `suffix | 0x80`.

use crate::error::{Error, Result};
use crate::hash::keccak::{State, keccak_f};

/// Width of the Keccak-f[1600] state in bits.
pub const STATE_BITS: usize = 1600;

/// Capacity used by every function of this crate.
pub const CAPACITY_BITS: usize = 512;

/// Rate in bytes for [`CAPACITY_BITS`].
pub const RATE_BYTES: usize = (STATE_BITS - CAPACITY_BITS) / 8;

/// Runs the sponge over `input`, which already ends with its suffix byte.
///
/// # Errors
///
/// Returns [`Error::DomainError`] if `output_bits` is not a multiple of 8,
/// or if `capacity_bits` does not leave a positive rate made of whole lanes.
pub fn sponge(input: &[u8], output_bits: usize, capacity_bits: usize) -> Result<Vec<u8>> {
    let out_len = output_len(output_bits)?;

    if capacity_bits == 0 || capacity_bits >= STATE_BITS || capacity_bits % 64 != 0 {
        return Err(Error::DomainError(
            "capacity must leave a positive rate of whole lanes",
        ));
    }

    Ok(absorb_squeeze(input, out_len, (STATE_BITS - capacity_bits) / 8))
}

/// Converts an output length in bits to bytes.
pub(crate) fn output_len(output_bits: usize) -> Result<usize> {
    if output_bits % 8 != 0 {
        return Err(Error::DomainError("output length must be a multiple of 8 bits"));
    }

    Ok(output_bits / 8)
}

/// Pads `input` with 10*1 to a multiple of `rate` bytes.
fn pad(input: &[u8], rate: usize) -> Vec<u8> {
    let padded_len = input.len().div_ceil(rate).max(1) * rate;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(input);
    padded.resize(padded_len, 0);
    padded[padded_len - 1] |= 0x80;

    padded
}

/// Pads, absorbs, and squeezes `out_len` bytes at the given rate.
pub(crate) fn absorb_squeeze(input: &[u8], out_len: usize, rate: usize) -> Vec<u8> {
    let padded = pad(input, rate);
    let lanes = rate / 8;

    let mut state: State = [0u64; 25];

    for block in padded.chunks_exact(rate) {
        for (lane, word) in state.iter_mut().zip(block.chunks_exact(8)) {
            *lane ^= u64::from_le_bytes([
                word[0], word[1], word[2], word[3], word[4], word[5], word[6], word[7],
            ]);
        }

        keccak_f(&mut state);
    }

    let mut out = Vec::with_capacity(out_len + rate);

    while out.len() < out_len {
        if !out.is_empty() {
            keccak_f(&mut state);
        }

        for lane in &state[..lanes] {
            out.extend_from_slice(&lane.to_le_bytes());
        }
    }

    out.truncate(out_len);
    out
}
