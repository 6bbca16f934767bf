//! Schnorr signing and verification over Ed448.
//!
//! Signing needs no randomness: the nonce is derived from the secret and
//! the message. Verification only accepts the canonical `h || z` encoding,
//! with `z` reduced below the group order.

use num_bigint::BigUint;
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::encoding::fixed::{from_be, to_be_array};
use crate::error::{Error, Result};
use crate::keys::ed448::core::derive_secret;
use crate::keys::ed448::{KeyPair, Point, PublicKey, SCALAR_LEN, Scalar};
use crate::mac::kmac::core::kmacxof256_array;

/// Length in bytes of the challenge `h`.
const CHALLENGE_LEN: usize = 64;

/// Length in bytes of an encoded signature: `h (64) || z (56)`.
pub const SIGNATURE_LEN: usize = CHALLENGE_LEN + SCALAR_LEN;

const NONCE_CUSTOM: &[u8] = b"N";
const CHALLENGE_CUSTOM: &[u8] = b"T";

/// A Schnorr signature `(h, z)`.
///
/// `h` is the full 512-bit challenge and is never reduced; `z` is a scalar
/// modulo `r` when produced by [`sign`]. Decoding checks the length only,
/// all other validity (including `z < r`) is decided by [`verify`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    h: BigUint,
    z: BigUint,
}

impl Signature {
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    pub fn z(&self) -> &BigUint {
        &self.z
    }

    /// Encodes the signature as `h || z`, both big-endian.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..CHALLENGE_LEN].copy_from_slice(&to_be_array::<CHALLENGE_LEN>(&self.h));
        out[CHALLENGE_LEN..].copy_from_slice(&to_be_array::<SCALAR_LEN>(&self.z));

        out
    }

    /// Decodes an `h || z` encoding.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedInput`] unless `bytes` is exactly
    /// [`SIGNATURE_LEN`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(Error::MalformedInput {
                what: "signature",
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            });
        }

        let (h, z) = bytes.split_at(CHALLENGE_LEN);

        Ok(Self {
            h: from_be(h),
            z: from_be(z),
        })
    }
}

/// Signs `message` with the key pair derived from `passphrase`.
pub fn sign(message: &[u8], passphrase: &[u8]) -> Signature {
    sign_with_secret(message, &derive_secret(passphrase))
}

/// Signs `message` with an already derived key pair.
pub fn sign_with_keypair(message: &[u8], keypair: &KeyPair) -> Signature {
    sign_with_secret(message, keypair.secret())
}

/// Verifies `signature` on `message` under `public`.
///
/// Returns `false` for any invalid signature, including one whose `z` is
/// not reduced below the group order; there is no error path.
pub fn verify(signature: &Signature, message: &[u8], public: &PublicKey) -> bool {
    // z must be reduced mod r; z + r, z + 2r, z + 3r also fit in 56 bytes
    // and would otherwise verify as distinct encodings of one signature.
    if signature.z >= *Scalar::order() || signature.h.bits() > 8 * CHALLENGE_LEN as u64 {
        tracing::debug!(message_len = message.len(), "schnorr signature not canonical");
        return false;
    }

    let u = &Point::generator().scalar_mul(&signature.z) + &public.point().scalar_mul(&signature.h);
    let expected = challenge(&u, message);
    let valid: bool = expected
        .ct_eq(&to_be_array::<CHALLENGE_LEN>(&signature.h))
        .into();

    if !valid {
        tracing::debug!(message_len = message.len(), "schnorr signature rejected");
    }

    valid
}

fn sign_with_secret(message: &[u8], s: &Scalar) -> Signature {
    let s_bytes = Zeroizing::new(s.to_bytes());
    let nonce = Zeroizing::new(kmacxof256_array::<64>(s_bytes.as_ref(), message, NONCE_CUSTOM));
    let k = Scalar::from_digest(nonce.as_ref());

    let u = &Point::generator() * &k;
    let h = from_be(&challenge(&u, message));
    let z = &k - &(&Scalar::reduce(&h) * s);

    tracing::debug!(message_len = message.len(), "schnorr sign");

    Signature {
        h,
        z: z.value().clone(),
    }
}

/// `KMACXOF256(U.x, m, 512, "T")`.
fn challenge(u: &Point, message: &[u8]) -> [u8; CHALLENGE_LEN] {
    kmacxof256_array(&u.x().to_bytes(), message, CHALLENGE_CUSTOM)
}
