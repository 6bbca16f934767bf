//! Scalars modulo the prime order `r` of the Ed448-Goldilocks base point.
//!
//! ```text
//! r = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885
//! ```
//!
//! The curve has cofactor 4. Scalars derived from digests or random bytes
//! are multiplied by the cofactor before reduction, which is how every
//! secret, nonce, and ephemeral value of the protocol layer is formed.
//!
//! Representation: a `BigUint` always reduced into `[0, r)`, encoded as
//! [`SCALAR_LEN`] big-endian bytes.

use std::ops::{Add, Mul, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::encoding::fixed::{from_be, to_be_array};

/// Length in bytes of an encoded scalar.
pub const SCALAR_LEN: usize = 56;

/// Cofactor of the curve.
pub const COFACTOR: u32 = 4;

/// Number of random bytes drawn for an ephemeral scalar.
const RANDOM_LEN: usize = 64;

/// Big-endian bytes of `r`.
const ORDER_BYTES: [u8; SCALAR_LEN] = [
    0x3f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x7c, 0xca, 0x23, 0xe9,
    0xc4, 0x4e, 0xdb, 0x49, 0xae, 0xd6, 0x36, 0x90,
    0x21, 0x6c, 0xc2, 0x72, 0x8d, 0xc5, 0x8f, 0x55,
    0x23, 0x78, 0xc2, 0x92, 0xab, 0x58, 0x44, 0xf3,
];

static ORDER: Lazy<BigUint> = Lazy::new(|| from_be(&ORDER_BYTES));

/// An integer modulo `r`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Scalar(BigUint);

impl Scalar {
    /// The group order `r`.
    pub fn order() -> &'static BigUint {
        &ORDER
    }

    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// Reduces `value` modulo `r`.
    pub fn reduce(value: &BigUint) -> Self {
        Self(value % &*ORDER)
    }

    /// Interprets `bytes` as a big-endian integer and reduces it modulo `r`.
    pub fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        Self::reduce(&from_be(bytes))
    }

    /// Interprets `digest` as a big-endian integer, multiplies it by the
    /// cofactor, and reduces modulo `r`.
    pub fn from_digest(digest: &[u8]) -> Self {
        Self((from_be(digest) * COFACTOR) % &*ORDER)
    }

    /// Draws a uniformly random 512-bit integer and maps it through
    /// [`Scalar::from_digest`].
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = Zeroizing::new([0u8; RANDOM_LEN]);
        rng.fill_bytes(bytes.as_mut());

        Self::from_digest(bytes.as_ref())
    }

    /// Encodes the scalar as [`SCALAR_LEN`] big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        to_be_array(&self.0)
    }

    /// The canonical integer representative in `[0, r)`.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<'a> Add<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &'a Scalar) -> Scalar {
        Scalar((&self.0 + &rhs.0) % &*ORDER)
    }
}

impl<'a> Sub<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &'a Scalar) -> Scalar {
        Scalar((&self.0 + &*ORDER - &rhs.0) % &*ORDER)
    }
}

impl<'a> Mul<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &'a Scalar) -> Scalar {
        Scalar((&self.0 * &rhs.0) % &*ORDER)
    }
}
