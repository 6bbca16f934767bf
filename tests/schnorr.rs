use keccurve::Error;
use keccurve::keys::ed448::{SCALAR_LEN, Scalar, generate_keypair};
use num_bigint::BigUint;
use keccurve::signatures::schnorr::{SIGNATURE_LEN, Signature, sign, sign_with_keypair, verify};

const HELLO_H: &str = "eeb12c13fe849664fd36d0bd3298c26ee606cf5ea855aa66f72519d2e5c740af\
                       d2b9d746fafd89d2d3e7296e2539a9516ab484d90037e72e28b6c55b4b2a21c0";

const HELLO_Z: &str = "2d976372f87adb2ee26a9ae929fc7758b19a89ca378850f2ad5d176af9c4017d\
                       f653759a67643a3883917fcdf2e2c08a7e9cbf6824d2c601";

// -------------------------------------------------------
// 1. KNOWN ANSWER
// -------------------------------------------------------

#[test]
fn sign_known_answer() {
    let signature = sign(b"hello", b"passphrase");
    let bytes = signature.to_bytes();

    assert_eq!(bytes[..64].to_vec(), hex::decode(HELLO_H).unwrap());
    assert_eq!(bytes[64..].to_vec(), hex::decode(HELLO_Z).unwrap());
}

#[test]
fn sign_and_verify() {
    let keypair = generate_keypair(b"passphrase");
    let signature = sign(b"hello", b"passphrase");

    assert!(verify(&signature, b"hello", keypair.public_key()));
    assert_eq!(sign_with_keypair(b"hello", &keypair), signature);
}

// -------------------------------------------------------
// 2. REJECTION
// -------------------------------------------------------

#[test]
fn modified_message_is_rejected() {
    let keypair = generate_keypair(b"passphrase");
    let signature = sign(b"hello", b"passphrase");

    assert!(!verify(&signature, b"hellp", keypair.public_key()));
    assert!(!verify(&signature, b"", keypair.public_key()));
}

#[test]
fn flipped_signature_bits_are_rejected() {
    let keypair = generate_keypair(b"passphrase");
    let bytes = sign(b"hello", b"passphrase").to_bytes();

    // One bit in h, one in z.
    for index in [0, 63, 64, SIGNATURE_LEN - 1] {
        let mut tampered = bytes;
        tampered[index] ^= 0x01;
        let signature = Signature::from_bytes(&tampered).unwrap();

        assert!(
            !verify(&signature, b"hello", keypair.public_key()),
            "flip at byte {index} must be rejected"
        );
    }
}

#[test]
fn unreduced_z_is_rejected() {
    let keypair = generate_keypair(b"passphrase");
    let signature = sign(b"hello", b"passphrase");
    assert!(verify(&signature, b"hello", keypair.public_key()));

    // z + k·r for k = 1..=3 still fits in 56 bytes.
    for k in 1u32..=3 {
        let widened = signature.z() + Scalar::order() * k;
        let z_bytes = widened.to_bytes_be();
        assert!(z_bytes.len() <= SCALAR_LEN);

        let mut bytes = signature.to_bytes();
        bytes[64..].fill(0);
        bytes[SIGNATURE_LEN - z_bytes.len()..].copy_from_slice(&z_bytes);

        let alias = Signature::from_bytes(&bytes).unwrap();
        assert_ne!(alias, signature);
        assert_eq!(alias.z(), &widened);
        assert!(
            !verify(&alias, b"hello", keypair.public_key()),
            "z + {k}·r must be rejected"
        );
    }
}

#[test]
fn z_equal_to_order_is_rejected() {
    let keypair = generate_keypair(b"passphrase");
    let mut bytes = sign(b"hello", b"passphrase").to_bytes();

    let order: BigUint = Scalar::order().clone();
    let order_bytes = order.to_bytes_be();
    bytes[64..].fill(0);
    bytes[SIGNATURE_LEN - order_bytes.len()..].copy_from_slice(&order_bytes);

    let signature = Signature::from_bytes(&bytes).unwrap();
    assert!(!verify(&signature, b"hello", keypair.public_key()));
}

#[test]
fn other_public_key_is_rejected() {
    let other = generate_keypair(b"not the signer");
    let signature = sign(b"hello", b"passphrase");

    assert!(!verify(&signature, b"hello", other.public_key()));
}

// -------------------------------------------------------
// 3. ENCODING
// -------------------------------------------------------

#[test]
fn signature_round_trip() {
    let signature = sign(b"round trip", b"pw");
    let decoded = Signature::from_bytes(&signature.to_bytes()).unwrap();

    assert_eq!(decoded, signature);
}

#[test]
fn wrong_length_is_malformed() {
    let bytes = sign(b"m", b"pw").to_bytes();

    assert_eq!(
        Signature::from_bytes(&bytes[..SIGNATURE_LEN - 1]),
        Err(Error::MalformedInput {
            what: "signature",
            expected: SIGNATURE_LEN,
            actual: SIGNATURE_LEN - 1,
        })
    );
}

#[test]
fn signing_is_deterministic() {
    assert_eq!(sign(b"m", b"pw"), sign(b"m", b"pw"));
    assert_ne!(sign(b"m", b"pw"), sign(b"n", b"pw"));
}
