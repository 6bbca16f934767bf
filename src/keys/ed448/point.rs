//! Points of the Edwards curve `x^2 + y^2 = 1 + d·x^2·y^2` over GF(p),
//! `d = -39081` (Ed448-Goldilocks).
//!
//! Points are held in affine coordinates. Addition uses the complete
//! Edwards formula
//!
//! ```text
//! x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)
//! y3 = (y1·y2 - x1·x2) / (1 - d·x1·x2·y1·y2)
//! ```
//!
//! which has no exceptional cases because `d` is a non-square, so the same
//! routine doubles a point and adds the neutral element `(0, 1)`.
//!
//! Encoding: `x || y`, each coordinate as [`COORDINATE_LEN`] big-endian
//! unsigned bytes, [`POINT_LEN`] bytes in total.

use std::ops::{Add, Mul, Neg};

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::encoding::fixed::from_be;
use crate::error::{Error, Result};

use super::field::{COORDINATE_LEN, FieldElement};
use super::scalar::Scalar;

/// Length in bytes of an encoded point.
pub const POINT_LEN: usize = 2 * COORDINATE_LEN;

/// `|d|`; the curve constant itself is its negation.
const D_MAGNITUDE: u32 = 39081;

/// x-coordinate of the base point.
const GENERATOR_X: u32 = 8;

/// Big-endian bytes of the base point's y-coordinate (the even root).
const GENERATOR_Y: [u8; COORDINATE_LEN] = [
    0xc6, 0x6f, 0x6f, 0x05, 0x65, 0xe6, 0xd0, 0xb5,
    0xf2, 0xbb, 0x26, 0x3c, 0xeb, 0xb9, 0xf8, 0x54,
    0x0e, 0xb0, 0x46, 0xf4, 0x0e, 0xd0, 0xff, 0xf7,
    0xf8, 0x4d, 0x84, 0x65, 0x3b, 0x42, 0x8d, 0x98,
    0x9a, 0xab, 0xff, 0x93, 0xb6, 0xbf, 0x70, 0x08,
    0x01, 0x22, 0x80, 0x94, 0xe3, 0xdd, 0x0c, 0x2d,
    0x1c, 0x60, 0x0e, 0x3b, 0x0b, 0xcc, 0xfc, 0x32,
];

static D: Lazy<FieldElement> = Lazy::new(|| -FieldElement::from(D_MAGNITUDE));

static GENERATOR: Lazy<Point> = Lazy::new(|| Point {
    x: FieldElement::from(GENERATOR_X),
    y: FieldElement::new(from_be(&GENERATOR_Y)),
});

/// An affine point on Ed448-Goldilocks.
///
/// Every value of this type satisfies the curve equation; the only ways to
/// build one from untrusted data validate it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: FieldElement,
    y: FieldElement,
}

impl Point {
    /// The neutral element `(0, 1)`.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::one(),
        }
    }

    /// The base point `G = (8, y)` with even `y`, of prime order `r`.
    pub fn generator() -> Self {
        GENERATOR.clone()
    }

    /// Builds a point from integer coordinates, reducing them mod `p`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPoint`] if `(x, y)` is not on the curve.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self> {
        Self::from_coordinates(FieldElement::new(x), FieldElement::new(y))
    }

    /// Builds a point from field coordinates.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPoint`] if `(x, y)` is not on the curve.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        if !is_on_curve(&x, &y) {
            return Err(Error::InvalidPoint);
        }

        Ok(Self { x, y })
    }

    /// Recovers the point with x-coordinate `x` whose y-coordinate has least
    /// significant bit `lsb`.
    ///
    /// `y = sqrt((1 - x^2) / (1 - d·x^2))`. The denominator never vanishes
    /// since `d` is a non-square.
    ///
    /// # Errors
    ///
    /// [`Error::NoSquareRoot`] if no point has this x-coordinate.
    pub fn from_x(x: BigUint, lsb: bool) -> Result<Self> {
        let x = FieldElement::new(x);
        let x2 = x.square();
        let one = FieldElement::one();

        let numerator = &one - &x2;
        let denominator = &one - &(&*D * &x2);
        let y = (&numerator * &denominator.invert())
            .sqrt(lsb)
            .ok_or(Error::NoSquareRoot)?;

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == FieldElement::one()
    }

    pub fn double(&self) -> Self {
        self + self
    }

    /// Multiplies by a non-negative integer with left-to-right
    /// double-and-add. `k` is not reduced first.
    ///
    /// Not constant time.
    pub fn scalar_mul(&self, k: &BigUint) -> Self {
        let mut acc = Self::identity();

        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = &acc + self;
            }
        }

        acc
    }

    /// Encodes the point as `x || y`.
    pub fn to_bytes(&self) -> [u8; POINT_LEN] {
        let mut out = [0u8; POINT_LEN];
        out[..COORDINATE_LEN].copy_from_slice(&self.x.to_bytes());
        out[COORDINATE_LEN..].copy_from_slice(&self.y.to_bytes());

        out
    }

    /// Decodes and validates an encoded point.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedInput`] if `bytes` is not [`POINT_LEN`] long.
    /// - [`Error::InvalidPoint`] if a coordinate is not below `p` or the
    ///   pair is not on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != POINT_LEN {
            return Err(Error::MalformedInput {
                what: "point",
                expected: POINT_LEN,
                actual: bytes.len(),
            });
        }

        let (x, y) = bytes.split_at(COORDINATE_LEN);
        let x = FieldElement::from_bytes(x).ok_or(Error::InvalidPoint)?;
        let y = FieldElement::from_bytes(y).ok_or(Error::InvalidPoint)?;

        Self::from_coordinates(x, y)
    }
}

fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
    let x2 = x.square();
    let y2 = y.square();

    let lhs = &x2 + &y2;
    let rhs = &FieldElement::one() + &(&*D * &(&x2 * &y2));

    lhs == rhs
}

impl<'a> Add<&'a Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &'a Point) -> Point {
        let one = FieldElement::one();

        let x1y2 = &self.x * &rhs.y;
        let y1x2 = &self.y * &rhs.x;
        let x1x2 = &self.x * &rhs.x;
        let y1y2 = &self.y * &rhs.y;
        let t = &*D * &(&x1x2 * &y1y2);

        let x = &(&x1y2 + &y1x2) * &(&one + &t).invert();
        let y = &(&y1y2 - &x1x2) * &(&one - &t).invert();

        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        &self + &rhs
    }
}

/// `-(x, y) = (-x, y)`.
impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point {
            x: -&self.x,
            y: self.y.clone(),
        }
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl<'a> Mul<&'a Scalar> for &Point {
    type Output = Point;

    fn mul(self, scalar: &'a Scalar) -> Point {
        self.scalar_mul(scalar.value())
    }
}
