use keccurve::hash::keccak::{ROUNDS, State, keccak_f, keccak_p};

// -------------------------------------------------------
// 1. KNOWN ANSWER
// -------------------------------------------------------

#[test]
fn keccak_f_of_zero_state() {
    let mut state: State = [0u64; 25];
    keccak_f(&mut state);

    assert_eq!(state[0], 0xf1258f7940e1dde7);
    assert_eq!(state[1], 0x84d5ccf933c0478a);
    assert_eq!(state[2], 0xd598261ea65aa9ee);
    assert_eq!(state[3], 0xbd1547306f80494d);
    assert_eq!(state[4], 0x8b284e056253d057);
    assert_eq!(state[24], 0xeaf1ff7b5ceca249);
}

// -------------------------------------------------------
// 2. ROUND COUNTS
// -------------------------------------------------------

#[test]
fn keccak_p_full_rounds_matches_keccak_f() {
    let mut a: State = core::array::from_fn(|i| (i as u64).wrapping_mul(0x9e3779b97f4a7c15));
    let mut b = a;

    keccak_f(&mut a);
    keccak_p(&mut b, ROUNDS);

    assert_eq!(a, b);
}

#[test]
fn keccak_p_clamps_excess_rounds() {
    let mut a: State = [0x0123456789abcdef; 25];
    let mut b = a;

    keccak_p(&mut a, ROUNDS);
    keccak_p(&mut b, 100);

    assert_eq!(a, b);
}

#[test]
fn keccak_p_zero_rounds_is_identity() {
    let original: State = core::array::from_fn(|i| i as u64);
    let mut state = original;

    keccak_p(&mut state, 0);

    assert_eq!(state, original);
}

#[test]
fn keccak_p_uses_last_rounds() {
    // Twelve rounds then the last twelve is not the same as the full
    // permutation, since both runs use rounds 12..24.
    let mut split: State = [0u64; 25];
    keccak_p(&mut split, 12);
    keccak_p(&mut split, 12);

    let mut full: State = [0u64; 25];
    keccak_f(&mut full);

    assert_ne!(split, full);
}

// -------------------------------------------------------
// 3. DIFFUSION
// -------------------------------------------------------

#[test]
fn single_bit_flip_changes_every_lane() {
    let mut a: State = [0u64; 25];
    let mut b: State = [0u64; 25];
    b[0] = 1;

    keccak_f(&mut a);
    keccak_f(&mut b);

    for (x, y) in a.iter().zip(b.iter()) {
        assert_ne!(x, y);
    }
}
