//! Passphrase-based encryption and decryption.
//!
//! A fresh random nonce salts the key derivation for every message, so the
//! passphrase alone is enough to decrypt while no two cryptograms share a
//! keystream.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::encryption::cryptogram::{
    Cryptogram, KeyMaterial, apply_keystream, authenticate, derive_keys, split_keys, tags_match,
};
use crate::error::{Error, Result};

/// Length in bytes of the random nonce heading a symmetric cryptogram.
pub const NONCE_LEN: usize = 64;

const KEY_CUSTOM: &[u8] = b"S";
const CIPHER_CUSTOM: &[u8] = b"SKE";
const TAG_CUSTOM: &[u8] = b"SKA";

/// Encrypts `message` under `passphrase` with a nonce drawn from the
/// operating system.
pub fn encrypt(message: &[u8], passphrase: &[u8]) -> Vec<u8> {
    encrypt_with_rng(message, passphrase, &mut OsRng)
}

/// Encrypts `message` under `passphrase` with a nonce drawn from `rng`.
///
/// The result is `NONCE_LEN + message.len() + TAG_LEN` bytes long.
pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
    message: &[u8],
    passphrase: &[u8],
    rng: &mut R,
) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let keys = session_keys(&nonce, passphrase);
    let (ke, ka) = split_keys(&keys);

    let ciphertext = apply_keystream(ke, message, CIPHER_CUSTOM);
    let tag = authenticate(ka, message, TAG_CUSTOM);

    tracing::debug!(message_len = message.len(), "symmetric encrypt");

    Cryptogram::assemble(&nonce, &ciphertext, &tag)
}

/// Decrypts a cryptogram produced by [`encrypt`].
///
/// # Errors
///
/// - [`Error::MalformedInput`] if the cryptogram is shorter than
///   `NONCE_LEN + TAG_LEN`.
/// - [`Error::AuthenticationFailure`] if the passphrase is wrong or any
///   byte was altered. No plaintext is returned in that case.
pub fn decrypt(cryptogram: &[u8], passphrase: &[u8]) -> Result<Vec<u8>> {
    let parts = Cryptogram::parse(cryptogram, NONCE_LEN)?;

    let keys = session_keys(parts.ephemeral, passphrase);
    let (ke, ka) = split_keys(&keys);

    let mut plaintext = Zeroizing::new(apply_keystream(ke, parts.ciphertext, CIPHER_CUSTOM));
    let expected = authenticate(ka, &plaintext, TAG_CUSTOM);

    if !tags_match(&expected, parts.tag) {
        tracing::warn!(cryptogram_len = cryptogram.len(), "symmetric tag mismatch");
        return Err(Error::AuthenticationFailure);
    }

    tracing::debug!(message_len = plaintext.len(), "symmetric decrypt");

    Ok(std::mem::take(&mut *plaintext))
}

/// `KMACXOF256(nonce || passphrase, "", 1024, "S")`.
fn session_keys(nonce: &[u8], passphrase: &[u8]) -> KeyMaterial {
    let mut key = Zeroizing::new(Vec::with_capacity(nonce.len() + passphrase.len()));
    key.extend_from_slice(nonce);
    key.extend_from_slice(passphrase);

    derive_keys(&key, KEY_CUSTOM)
}
