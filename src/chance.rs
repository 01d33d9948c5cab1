//! Percentage and probability chance rolls.
//!
//! The two rolls intentionally differ at the boundaries: the percentage
//! roll is an inclusive integer comparison (`p = 0` never succeeds,
//! `p = 100` always does, each point one unit wide), while the probability
//! roll compares strictly so a draw landing exactly on `q` counts as
//! failure. Do not unify them.

use rand::Rng;

/// Roll a chance of `p` percent.
///
/// The draw is an integer in `[1, 100]`, so `percent(25, rng)` succeeds on
/// average every fourth call. `p <= 0` never succeeds; `p >= 100` always
/// does.
#[inline]
pub fn percent<R: Rng + ?Sized>(p: i32, rng: &mut R) -> bool {
    rng.random_range(0..100) + 1 <= p
}

/// Roll a chance with probability `q`.
///
/// The draw is uniform in `[0, 1]` and succeeds strictly below `q`, so
/// `q <= 0.0` never succeeds and a draw landing exactly on `q` counts as
/// failure.
#[inline]
pub fn probability<R: Rng + ?Sized>(q: f32, rng: &mut R) -> bool {
    rng.random_range(0.0..=1.0) < q
}
