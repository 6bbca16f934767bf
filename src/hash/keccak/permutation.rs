//! Keccak-p[1600, n] permutation.
//!
//! The state is 25 lanes of 64 bits, lane `(x, y)` stored at index
//! `x + 5 * y`. Every round applies theta, rho and pi, chi, then iota, in
//! that order.
//!
//! Two round implementations are provided, selected at compile time:
//! - the default one composes the individual step mappings, each of which
//!   is a small function operating on the whole state;
//! - with the `speed` feature, a fused round with unrolled column and row
//!   loops is used instead.
//!
//! Both produce bit-identical results.

use super::constants::{PI_LANES, ROTATION_OFFSETS, ROUND_CONSTANTS, ROUNDS};

/// The 1600-bit Keccak state as 25 little-endian lanes.
pub type State = [u64; 25];

/// Applies the last `rounds` rounds of Keccak-f[1600] to `state` in place.
///
/// Following FIPS 202, Keccak-p[1600, n] uses the round indices
/// `24 - n .. 24`. Values of `rounds` above 24 are treated as 24.
pub fn keccak_p(state: &mut State, rounds: usize) {
    let first = ROUNDS - rounds.min(ROUNDS);

    for rc in &ROUND_CONSTANTS[first..] {
        round(state, *rc);
    }
}

/// Applies the full 24-round Keccak-f[1600] permutation.
#[inline]
pub fn keccak_f(state: &mut State) {
    keccak_p(state, ROUNDS);
}

#[cfg(not(feature = "speed"))]
#[inline(always)]
fn round(state: &mut State, rc: u64) {
    theta(state);
    rho_pi(state);
    chi(state);
    iota(state, rc);
}

/// XORs every lane with the parities of the two neighbouring columns.
#[cfg(not(feature = "speed"))]
#[inline(always)]
fn theta(a: &mut State) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..25).step_by(5) {
            a[y + x] ^= d;
        }
    }
}

/// Rotates each lane by its offset and moves it to its pi position.
#[inline(always)]
fn rho_pi(a: &mut State) {
    let mut carry = a[1];

    for (&dst, &offset) in PI_LANES.iter().zip(ROTATION_OFFSETS.iter()) {
        let next = a[dst];
        a[dst] = carry.rotate_left(offset);
        carry = next;
    }
}

/// Non-linear row mixing: `a[x] ^= !a[x + 1] & a[x + 2]`.
#[cfg(not(feature = "speed"))]
#[inline(always)]
fn chi(a: &mut State) {
    for y in (0..25).step_by(5) {
        let row = [a[y], a[y + 1], a[y + 2], a[y + 3], a[y + 4]];

        for x in 0..5 {
            a[y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[cfg(not(feature = "speed"))]
#[inline(always)]
fn iota(a: &mut State, rc: u64) {
    a[0] ^= rc;
}

#[cfg(feature = "speed")]
#[inline(always)]
fn round(a: &mut State, rc: u64) {
    let c0 = a[0] ^ a[5] ^ a[10] ^ a[15] ^ a[20];
    let c1 = a[1] ^ a[6] ^ a[11] ^ a[16] ^ a[21];
    let c2 = a[2] ^ a[7] ^ a[12] ^ a[17] ^ a[22];
    let c3 = a[3] ^ a[8] ^ a[13] ^ a[18] ^ a[23];
    let c4 = a[4] ^ a[9] ^ a[14] ^ a[19] ^ a[24];

    macro_rules! column {
        ($x:expr, $d:expr) => {{
            let d = $d;
            a[$x] ^= d;
            a[$x + 5] ^= d;
            a[$x + 10] ^= d;
            a[$x + 15] ^= d;
            a[$x + 20] ^= d;
        }};
    }

    column!(0, c4 ^ c1.rotate_left(1));
    column!(1, c0 ^ c2.rotate_left(1));
    column!(2, c1 ^ c3.rotate_left(1));
    column!(3, c2 ^ c4.rotate_left(1));
    column!(4, c3 ^ c0.rotate_left(1));

    rho_pi(a);

    macro_rules! row {
        ($y:expr) => {{
            let (b0, b1, b2, b3, b4) = (a[$y], a[$y + 1], a[$y + 2], a[$y + 3], a[$y + 4]);
            a[$y] = b0 ^ (!b1 & b2);
            a[$y + 1] = b1 ^ (!b2 & b3);
            a[$y + 2] = b2 ^ (!b3 & b4);
            a[$y + 3] = b3 ^ (!b4 & b0);
            a[$y + 4] = b4 ^ (!b0 & b1);
        }};
    }

    row!(0);
    row!(5);
    row!(10);
    row!(15);
    row!(20);

    a[0] ^= rc;
}
