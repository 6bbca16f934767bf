//! Ed448-Goldilocks key material and group arithmetic.
//!
//! The curve is the untwisted Edwards curve
//!
//! ```text
//! x² + y² = 1 + d·x²·y²   over GF(p),   p = 2⁴⁴⁸ − 2²²⁴ − 1,   d = −39081
//! ```
//!
//! with cofactor 4 and a base point `G = (8, y)` of prime order `r`.
//!
//! Arithmetic is done on arbitrary-precision integers in affine
//! coordinates. It is simple and auditable but neither fast nor constant
//! time; it is meant for file-level tooling, not for servers handling
//! adversarial timing measurements.

/// Key pair derivation and the public-facing key types.
pub(crate) mod core;

/// Arithmetic modulo the field prime `p`.
///
/// Provides addition, subtraction, multiplication, inversion, and
/// square roots with a chosen parity.
pub mod field;

/// Curve points: validation, encoding, the group law, and scalar
/// multiplication.
pub mod point;

/// Arithmetic modulo the group order `r`.
pub mod scalar;

pub use self::core::{KeyPair, PublicKey, generate_keypair};
pub use field::{COORDINATE_LEN, FieldElement};
pub use point::{POINT_LEN, Point};
pub use scalar::{COFACTOR, SCALAR_LEN, Scalar};
