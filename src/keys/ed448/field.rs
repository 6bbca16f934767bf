//! Arithmetic in the prime field GF(p), p = 2^448 - 2^224 - 1.
//!
//! Elements are arbitrary-precision integers kept reduced into `[0, p)`.
//! Every operation returns a fresh, reduced element; nothing is mutated in
//! place.
//!
//! Since `p ≡ 3 (mod 4)`, square roots are computed with a single
//! exponentiation by `(p + 1) / 4`.

use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use crate::encoding::fixed::{from_be, to_be_array};

/// Length in bytes of one encoded coordinate.
pub const COORDINATE_LEN: usize = 56;

/// The field prime `2^448 - 2^224 - 1`.
pub(crate) static P: Lazy<BigUint> =
    Lazy::new(|| (BigUint::one() << 448u32) - (BigUint::one() << 224u32) - BigUint::one());

/// `(p + 1) / 4`; `p = 4q + 3`, so this is `q + 1`.
static SQRT_EXPONENT: Lazy<BigUint> = Lazy::new(|| (&*P >> 2u32) + 1u32);

/// An element of GF(p).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// The additive identity.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// Reduces an arbitrary non-negative integer into the field.
    pub fn new(value: BigUint) -> Self {
        Self(value % &*P)
    }

    /// Accepts `value` only if it is already reduced.
    pub fn from_canonical(value: BigUint) -> Option<Self> {
        (value < *P).then_some(Self(value))
    }

    /// Decodes big-endian bytes, rejecting values `>= p`.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::from_canonical(from_be(bytes))
    }

    /// Encodes the element as [`COORDINATE_LEN`] big-endian bytes.
    pub fn to_bytes(&self) -> [u8; COORDINATE_LEN] {
        to_be_array(&self.0)
    }

    /// The canonical integer representative.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Least significant bit of the canonical representative.
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    pub fn square(&self) -> Self {
        self * self
    }

    pub fn pow(&self, exponent: &BigUint) -> Self {
        Self(self.0.modpow(exponent, &P))
    }

    /// Multiplicative inverse. Zero has none and maps to zero.
    pub fn invert(&self) -> Self {
        Self(self.0.modinv(&P).unwrap_or_default())
    }

    /// Square root whose least significant bit equals `lsb`, if one exists.
    ///
    /// The candidate `v^((p+1)/4)` is negated when its parity is wrong and
    /// then checked by squaring; a failed check means `self` is a quadratic
    /// non-residue.
    pub fn sqrt(&self, lsb: bool) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }

        let mut root = self.pow(&SQRT_EXPONENT);
        if root.is_odd() != lsb {
            root = -&root;
        }

        (root.square() == *self).then_some(root)
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        Self::new(BigUint::from(value))
    }
}

impl<'a> Add<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % &*P)
    }
}

impl<'a> Sub<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement((&self.0 + &*P - &rhs.0) % &*P)
    }
}

impl<'a> Mul<&'a FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &'a FieldElement) -> FieldElement {
        FieldElement((&self.0 * &rhs.0) % &*P)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            return FieldElement::zero();
        }

        FieldElement(&*P - &self.0)
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}
