//! Ed448-Goldilocks key material.
//!
//! Keys are derived deterministically from a passphrase:
//!
//! ```text
//! s = 4 · int(KMACXOF256(passphrase, "", 512, "SK")) mod r
//! V = G · s
//! ```
//!
//! The same passphrase therefore always yields the same key pair, and the
//! passphrase itself is the only thing a user needs to keep.

use std::fmt;

use zeroize::Zeroizing;

use super::point::{POINT_LEN, Point};
use super::scalar::{SCALAR_LEN, Scalar};
use crate::error::Result;
use crate::mac::kmac::core::kmacxof256_array;

/// Customization string of secret-key derivation.
const SECRET_CUSTOM: &[u8] = b"SK";

/// An Ed448 public key `V = G · s`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wraps a curve point. The point is assumed to come from a trusted
    /// source; use [`PublicKey::from_bytes`] for untrusted encodings.
    pub fn from_point(point: Point) -> Self {
        Self(point)
    }

    pub fn point(&self) -> &Point {
        &self.0
    }

    /// Returns the `x || y` encoding of the key.
    #[inline]
    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        self.0.to_bytes()
    }

    /// Decodes a public key, validating that it lies on the curve.
    ///
    /// # Errors
    ///
    /// Same as [`Point::from_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Point::from_bytes(bytes).map(Self)
    }
}

/// A secret scalar together with its public key.
///
/// `Debug` only shows the public half.
#[derive(Clone)]
pub struct KeyPair {
    secret: Scalar,
    public: PublicKey,
}

impl KeyPair {
    /// Derives the key pair of `passphrase`.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        Self::from_secret(derive_secret(passphrase))
    }

    /// Completes a key pair from a known secret scalar.
    pub fn from_secret(secret: Scalar) -> Self {
        let public = PublicKey(&Point::generator() * &secret);

        Self { secret, public }
    }

    #[inline]
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// Big-endian encoding of the secret scalar.
    ///
    /// Wrapped so the copy is wiped when dropped.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; SCALAR_LEN]> {
        Zeroizing::new(self.secret.to_bytes())
    }

    #[inline]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Derives the Ed448 key pair of a passphrase.
///
/// Deterministic: the same passphrase always produces the same keys. An
/// empty passphrase is accepted and yields a fixed, well-known key pair.
pub fn generate_keypair(passphrase: &[u8]) -> KeyPair {
    let keypair = KeyPair::from_passphrase(passphrase);
    tracing::debug!(passphrase_len = passphrase.len(), "derived key pair");

    keypair
}

/// `4 · int(KMACXOF256(passphrase, "", 512, "SK")) mod r`.
pub(crate) fn derive_secret(passphrase: &[u8]) -> Scalar {
    let digest = Zeroizing::new(kmacxof256_array::<64>(passphrase, b"", SECRET_CUSTOM));

    Scalar::from_digest(digest.as_ref())
}
