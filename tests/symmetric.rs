use keccurve::Error;
use keccurve::encryption::TAG_LEN;
use keccurve::encryption::symmetric::{NONCE_LEN, decrypt, encrypt, encrypt_with_rng};
use proptest::collection::vec;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// -------------------------------------------------------
// 1. ROUND TRIPS
// -------------------------------------------------------

#[test]
fn encrypt_then_decrypt() {
    let message = b"Hello, world!";
    let cryptogram = encrypt(message, b"passphrase");

    assert_eq!(cryptogram.len(), NONCE_LEN + message.len() + TAG_LEN);
    assert_eq!(decrypt(&cryptogram, b"passphrase").unwrap(), message);
}

#[test]
fn empty_message_and_passphrase() {
    let cryptogram = encrypt(b"", b"");

    assert_eq!(cryptogram.len(), NONCE_LEN + TAG_LEN);
    assert!(decrypt(&cryptogram, b"").unwrap().is_empty());
}

#[test]
fn message_longer_than_one_block() {
    let message: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();
    let cryptogram = encrypt(&message, b"pw");

    assert_eq!(decrypt(&cryptogram, b"pw").unwrap(), message);
}

#[test]
fn fresh_nonce_per_encryption() {
    let a = encrypt(b"same message", b"pw");
    let b = encrypt(b"same message", b"pw");

    assert_ne!(a, b);
    assert_ne!(&a[..NONCE_LEN], &b[..NONCE_LEN]);
}

#[test]
fn seeded_rng_is_reproducible() {
    let a = encrypt_with_rng(b"message", b"pw", &mut StdRng::seed_from_u64(7));
    let b = encrypt_with_rng(b"message", b"pw", &mut StdRng::seed_from_u64(7));

    assert_eq!(a, b);
    assert_eq!(decrypt(&a, b"pw").unwrap(), b"message");
}

#[test]
fn ciphertext_hides_plaintext() {
    let message = [0u8; 64];
    let cryptogram = encrypt(&message, b"pw");

    assert_ne!(&cryptogram[NONCE_LEN..NONCE_LEN + message.len()], &message[..]);
}

// -------------------------------------------------------
// 2. AUTHENTICATION
// -------------------------------------------------------

#[test]
fn wrong_passphrase_fails() {
    let cryptogram = encrypt(b"secret", b"right");

    assert_eq!(decrypt(&cryptogram, b"wrong"), Err(Error::AuthenticationFailure));
}

#[test]
fn tampered_fields_fail() {
    let cryptogram = encrypt(b"attack at dawn", b"pw");

    for index in [0, NONCE_LEN, NONCE_LEN + 5, cryptogram.len() - 1] {
        let mut tampered = cryptogram.clone();
        tampered[index] ^= 0x01;

        assert_eq!(
            decrypt(&tampered, b"pw"),
            Err(Error::AuthenticationFailure),
            "flip at byte {index} must be detected"
        );
    }
}

#[test]
fn failure_message() {
    assert_eq!(
        Error::AuthenticationFailure.to_string(),
        "invalid passphrase or corrupted data"
    );
}

// -------------------------------------------------------
// 3. MALFORMED INPUT
// -------------------------------------------------------

#[test]
fn truncated_cryptogram_is_malformed() {
    let cryptogram = encrypt(b"", b"pw");

    assert!(matches!(
        decrypt(&cryptogram[..NONCE_LEN + TAG_LEN - 1], b"pw"),
        Err(Error::MalformedInput { .. })
    ));
    assert!(matches!(decrypt(&[], b"pw"), Err(Error::MalformedInput { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn round_trip_any_message(
        message in vec(any::<u8>(), 0..600),
        passphrase in vec(any::<u8>(), 0..40),
    ) {
        let cryptogram = encrypt(&message, &passphrase);

        prop_assert_eq!(decrypt(&cryptogram, &passphrase).unwrap(), message);
    }
}
