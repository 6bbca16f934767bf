//! Public-key encryption to an Ed448 key and the matching decryption.
//!
//! Each message uses a fresh ephemeral scalar `k`. The cryptogram carries
//! `Z = G·k` in the clear; only the holder of the secret scalar behind the
//! recipient key can recompute the shared point `W` and the session keys.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::encryption::cryptogram::{
    Cryptogram, KeyMaterial, apply_keystream, authenticate, derive_keys, split_keys, tags_match,
};
use crate::error::{Error, Result};
use crate::keys::ed448::core::derive_secret;
use crate::keys::ed448::{KeyPair, POINT_LEN, Point, PublicKey, Scalar};

const KEY_CUSTOM: &[u8] = b"PK";
const CIPHER_CUSTOM: &[u8] = b"PKE";
const TAG_CUSTOM: &[u8] = b"PKA";

/// Encrypts `message` to `public` with an ephemeral scalar drawn from the
/// operating system.
pub fn encrypt(message: &[u8], public: &PublicKey) -> Vec<u8> {
    encrypt_with_rng(message, public, &mut OsRng)
}

/// Encrypts `message` to `public` with an ephemeral scalar drawn from `rng`.
///
/// The result is `POINT_LEN + message.len() + TAG_LEN` bytes long.
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    message: &[u8],
    public: &PublicKey,
    rng: &mut R,
) -> Vec<u8> {
    let k = Scalar::random(rng);
    let w = public.point() * &k;
    let z = &Point::generator() * &k;

    let keys = session_keys(&w);
    let (ke, ka) = split_keys(&keys);

    let ciphertext = apply_keystream(ke, message, CIPHER_CUSTOM);
    let tag = authenticate(ka, message, TAG_CUSTOM);

    tracing::debug!(message_len = message.len(), "public-key encrypt");

    Cryptogram::assemble(&z.to_bytes(), &ciphertext, &tag)
}

/// Decrypts a cryptogram addressed to the key pair derived from
/// `passphrase`.
///
/// # Errors
///
/// - [`Error::MalformedInput`] if the cryptogram is shorter than
///   `POINT_LEN + TAG_LEN`.
/// - [`Error::InvalidPoint`] if the leading point does not decode.
/// - [`Error::AuthenticationFailure`] on a wrong passphrase or altered
///   data. No plaintext is returned in that case.
pub fn decrypt(cryptogram: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    open(cryptogram, &derive_secret(passphrase))
}

/// Same as [`decrypt`], with an already derived key pair.
pub fn decrypt_with_keypair(cryptogram: &[u8], keypair: &KeyPair) -> Result<Vec<u8>> {
    open(cryptogram, keypair.secret())
}

fn open(cryptogram: &[u8], secret: &Scalar) -> Result<Vec<u8>> {
    let parts = Cryptogram::parse(cryptogram, POINT_LEN)?;
    let z = Point::from_bytes(parts.ephemeral)?;
    let w = &z * secret;

    let keys = session_keys(&w);
    let (ke, ka) = split_keys(&keys);

    let mut plaintext = Zeroizing::new(apply_keystream(ke, parts.ciphertext, CIPHER_CUSTOM));
    let expected = authenticate(ka, &plaintext, TAG_CUSTOM);

    if !tags_match(&expected, parts.tag) {
        tracing::warn!(cryptogram_len = cryptogram.len(), "public-key tag mismatch");
        return Err(Error::AuthenticationFailure);
    }

    tracing::debug!(message_len = plaintext.len(), "public-key decrypt");

    Ok(std::mem::take(&mut *plaintext))
}

/// `KMACXOF256(W.x, "", 1024, "PK")`.
fn session_keys(w: &Point) -> KeyMaterial {
    let shared = Zeroizing::new(w.x().to_bytes());

    derive_keys(shared.as_ref(), KEY_CUSTOM)
}
