//! The Keccak-f[1600] permutation.
//!
//! This is the primitive underneath every function of the `shake` and
//! `kmac` modules. The tables are process-wide constants and the permutation
//! only ever mutates the state it is handed, so concurrent callers never
//! share anything.

mod constants;
mod permutation;

pub use constants::{PI_LANES, ROTATION_OFFSETS, ROUND_CONSTANTS, ROUNDS};
pub use permutation::{State, keccak_f, keccak_p};
