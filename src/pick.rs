//! Uniform and weighted discrete selection.
//!
//! The weighted pickers use the inverse-CDF method: one uniform draw against
//! the running prefix sum of the weights, so index `i` is chosen with
//! probability `weights[i] / sum(weights)`.
//!
//! Notes:
//! - The integer and float variants intentionally differ at the boundaries
//!   (draw in `[1, sum]` with `<=` vs draw in `[0, sum)` with `<`). Both
//!   keep zero-weight buckets unreachable; do not unify them.

use rand::Rng;

/// Fair coin flip.
#[inline]
pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_range(0..2) == 0
}

/// Return `a` or `b` with equal probability.
#[inline]
pub fn either<T, R: Rng + ?Sized>(a: T, b: T, rng: &mut R) -> T {
    if flip(rng) {
        a
    } else {
        b
    }
}

/// Return one of `a`, `b`, `c` with equal probability.
pub fn either3<T, R: Rng + ?Sized>(a: T, b: T, c: T, rng: &mut R) -> T {
    match rng.random_range(0..3) {
        0 => a,
        1 => b,
        _ => c,
    }
}

/// Uniform integer in `[min, max)`.
#[inline]
pub fn int_range<R: Rng + ?Sized>(min: i32, max: i32, rng: &mut R) -> i32 {
    rng.random_range(min..max)
}

/// Uniform float in `[min, max]`, both ends inclusive.
#[inline]
pub fn float_range<R: Rng + ?Sized>(min: f32, max: f32, rng: &mut R) -> f32 {
    rng.random_range(min..=max)
}

/// Uniform element of a non-empty slice.
///
/// Fixed-size arrays and `Vec`s both coerce to the slice, so one function
/// covers every indexable container.
///
/// # Panics
///
/// Panics if `items` is empty.
#[inline]
pub fn from_slice<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    assert!(!items.is_empty(), "from_slice: items must be non-empty");
    &items[rng.random_range(0..items.len())]
}

/// A closed enumeration whose values can be drawn uniformly.
///
/// Implementors list every value exactly once:
///
/// ```
/// use tombola::pick::Enumerated;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Suit { Clubs, Diamonds, Hearts, Spades }
///
/// impl Enumerated for Suit {
///     const VARIANTS: &'static [Self] =
///         &[Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
/// }
/// ```
pub trait Enumerated: Copy + Sized + 'static {
    /// All values of the type, each exactly once.
    const VARIANTS: &'static [Self];
}

/// Uniform value of a closed enumeration.
///
/// # Panics
///
/// Panics if `T::VARIANTS` is empty.
pub fn variant<T: Enumerated, R: Rng + ?Sized>(rng: &mut R) -> T {
    *from_slice(T::VARIANTS, rng)
}

/// Errors for the weighted pickers.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightError {
    /// The weight vector is empty.
    Empty,
    /// Every weight is zero, so no index is drawable.
    ZeroTotal,
    /// A weight is NaN or negative.
    InvalidWeight(f32),
}

impl std::fmt::Display for WeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "weights must be non-empty"),
            Self::ZeroTotal => write!(f, "weights must not sum to zero"),
            Self::InvalidWeight(w) => write!(f, "weight must be finite and >= 0 (got {w})"),
        }
    }
}

impl std::error::Error for WeightError {}

/// Draw an index with probability `weights[i] / sum(weights)`.
///
/// Integer variant: the draw is uniform in `[1, sum]` and the walk stops at
/// the first prefix sum `>=` the draw, so a zero-weight bucket can never be
/// chosen while every positive-weight bucket (first and last included) can.
pub fn weighted_index<R: Rng + ?Sized>(weights: &[u32], rng: &mut R) -> Result<usize, WeightError> {
    if weights.is_empty() {
        return Err(WeightError::Empty);
    }
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if total == 0 {
        return Err(WeightError::ZeroTotal);
    }

    let point = rng.random_range(0..total) + 1;
    let mut prefix = 0u64;
    for (i, &w) in weights.iter().enumerate() {
        prefix += u64::from(w);
        if point <= prefix {
            return Ok(i);
        }
    }
    // Unreachable with integer arithmetic; mirrors the float variant's clamp.
    Ok(weights.len() - 1)
}

/// Draw an index with probability `weights[i] / sum(weights)`.
///
/// Float variant: the draw is uniform in `[0, sum)` and the walk stops at
/// the first prefix sum strictly greater than the draw. If rounding in the
/// prefix sums lets the draw slip past the final bucket, the last index is
/// returned; the intended distribution is unaffected.
pub fn weighted_index_float<R: Rng + ?Sized>(
    weights: &[f32],
    rng: &mut R,
) -> Result<usize, WeightError> {
    if weights.is_empty() {
        return Err(WeightError::Empty);
    }
    let mut total = 0.0f32;
    for &w in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(WeightError::InvalidWeight(w));
        }
        total += w;
    }
    if total <= 0.0 {
        return Err(WeightError::ZeroTotal);
    }

    let point = rng.random_range(0.0..total);
    let mut prefix = 0.0f32;
    for (i, &w) in weights.iter().enumerate() {
        prefix += w;
        if point < prefix {
            return Ok(i);
        }
    }
    Ok(weights.len() - 1)
}
