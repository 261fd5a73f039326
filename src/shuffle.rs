//! Seed-reproducible deck ordering.
//!
//! Session decks are rebuilt from a persisted integer seed, so the draw
//! sequence has to be bit-identical across browsers and across rebuilds.
//! Everything here is integer arithmetic; the platform RNG is never
//! consulted once the seed is fixed.

/// Pseudo-random fraction in `[0, 1)` derived from `n` alone.
///
/// splitmix64 finalizer: add the golden-gamma increment, two
/// xor-multiply rounds, and a closing xor-shift, then take the top 53
/// bits as an exact `f64`. Carries no state: the shuffle derives each
/// draw from `(seed, position)`, so a deck order is a pure function of
/// its seed.
pub fn fraction(n: u64) -> f64 {
    let mut x = n.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^= x >> 31;
    (x >> 11) as f64 / (1u64 << 53) as f64
}

/// Fisher-Yates permutation of `items` determined entirely by `seed`.
///
/// Walks from the last index down to 1, drawing
/// `j = floor(fraction(seed + i) * (i + 1))` at each step. The draw is
/// offset by the loop index, not a running call counter; persisted seeds
/// depend on this exact recurrence, so it must not change.
pub fn shuffle<T: Clone>(items: &[T], seed: i64) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let draw = fraction(seed.wrapping_add(i as i64) as u64);
        let j = (draw * (i as f64 + 1.0)) as usize;
        out.swap(i, j);
    }
    out
}
