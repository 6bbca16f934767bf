use keccurve::Error;
use keccurve::hash::cshake256;
use keccurve::mac::kmac::{digest, kmacxof256, tag};

fn nist_key() -> Vec<u8> {
    (0x40..=0x5f).collect()
}

fn nist_long_data() -> Vec<u8> {
    (0x00..=0xc7).collect()
}

// -------------------------------------------------------
// 1. NIST SP 800-185 SAMPLES
// -------------------------------------------------------

#[test]
fn kmacxof256_nist_sample_4() {
    let expected = hex::decode(
        "1755133f1534752aad0748f2c706fb5c784512cab835cd15676b16c0c6647fa9\
         6faa7af634a0bf8ff6df39374fa00fad9a39e322a7c92065a64eb1fb0801eb2b",
    )
    .unwrap();

    let got = kmacxof256(
        &nist_key(),
        &[0x00, 0x01, 0x02, 0x03],
        512,
        b"My Tagged Application",
    )
    .unwrap();
    assert_eq!(got, expected);
}

#[test]
fn kmacxof256_nist_sample_5() {
    let expected = hex::decode(
        "ff7b171f1e8a2b24683eed37830ee797538ba8dc563f6da1e667391a75edc02c\
         a633079f81ce12a25f45615ec89972031d18337331d24ceb8f8ca8e6a19fd98b",
    )
    .unwrap();

    let got = kmacxof256(&nist_key(), &nist_long_data(), 512, b"").unwrap();
    assert_eq!(got, expected);
}

#[test]
fn kmacxof256_nist_sample_6() {
    let expected = hex::decode(
        "d5be731c954ed7732846bb59dbe3a8e30f83e77a4bff4459f2f1c2b4ecebb8ce\
         67ba01c62e8ab8578d2d499bd1bb276768781190020a306a97de281dcc30305d",
    )
    .unwrap();

    let got = kmacxof256(&nist_key(), &nist_long_data(), 512, b"My Tagged Application").unwrap();
    assert_eq!(got, expected);
}

#[test]
fn kmacxof256_empty_key_and_custom() {
    let expected =
        hex::decode("1afcaaac06818dfa05e9198d655be1567943a1a01b8422005411f0cb03379518").unwrap();

    assert_eq!(
        kmacxof256(b"", &[0x00, 0x01, 0x02, 0x03], 256, b"").unwrap(),
        expected
    );
}

// -------------------------------------------------------
// 2. DERIVED FUNCTIONS
// -------------------------------------------------------

#[test]
fn digest_of_abc() {
    let expected = hex::decode(
        "05dbf5d9fc4f0d3896643149bb451968ef2be064ebd5d6829dd9a57b79cc9a2e\
         ccc6923e1b78fd054bb925ff1f4171484840fc4115714299f52d60903cd205cc",
    )
    .unwrap();

    assert_eq!(digest(b"abc").to_vec(), expected);
}

#[test]
fn tag_of_abc() {
    let expected = hex::decode(
        "abdc92a5d038892d7b643317d09e4e05d8ca8fd792dc79454ff720f600d2f56a\
         0d4bac441ec415b8a7184d44cce65db5fd7d5a075bdc8791664492349e09e69d",
    )
    .unwrap();

    assert_eq!(tag(b"pw", b"abc").to_vec(), expected);
}

#[test]
fn digest_is_kmac_with_empty_key() {
    let data = b"some file contents";

    assert_eq!(
        digest(data).to_vec(),
        kmacxof256(b"", data, 512, b"D").unwrap()
    );
}

// -------------------------------------------------------
// 3. PROPERTIES
// -------------------------------------------------------

#[test]
fn kmac_is_not_plain_cshake() {
    let data = [0x00, 0x01, 0x02, 0x03];

    assert_ne!(
        kmacxof256(b"", &data, 256, b"").unwrap(),
        cshake256(&data, 256, b"", b"").unwrap()
    );
}

#[test]
fn shorter_output_is_prefix_of_longer() {
    let short = kmacxof256(b"key", b"data", 512, b"S").unwrap();
    let long = kmacxof256(b"key", b"data", 1024 * 8, b"S").unwrap();

    assert_eq!(&long[..64], short.as_slice());
}

#[test]
fn key_and_customization_separate_outputs() {
    let base = kmacxof256(b"key", b"data", 256, b"S").unwrap();

    assert_ne!(base, kmacxof256(b"kez", b"data", 256, b"S").unwrap());
    assert_ne!(base, kmacxof256(b"key", b"data", 256, b"T").unwrap());
    assert_ne!(base, kmacxof256(b"key", b"datb", 256, b"S").unwrap());
}

#[test]
fn long_key_spanning_several_blocks() {
    let key = vec![0x5a; 400];

    let a = kmacxof256(&key, b"data", 256, b"").unwrap();
    let b = kmacxof256(&key, b"data", 256, b"").unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
}

#[test]
fn unaligned_output_length_is_domain_error() {
    assert!(matches!(
        kmacxof256(b"k", b"d", 100, b""),
        Err(Error::DomainError(_))
    ));
}
