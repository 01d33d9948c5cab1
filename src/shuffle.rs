//! In-place shuffling and sampling without replacement.
//!
//! `shuffle` is the forward Fisher–Yates walk; `subset` draws distinct
//! elements through a pool of still-available source indices.

use rand::Rng;

/// Shuffle a slice in place.
///
/// Forward Fisher–Yates: for each `i` from 1 upward, element `i` is swapped
/// with a uniformly chosen `j` in `[0, i]`. Every one of the `n!`
/// permutations is equally likely; O(n) time, O(1) extra space. Arrays and
/// `Vec`s both coerce to `&mut [T]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in 1..items.len() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Errors for [`subset`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubsetError {
    /// More elements were requested than the source holds.
    CountExceedsLen {
        /// Requested number of elements.
        count: usize,
        /// Length of the source slice.
        len: usize,
    },
}

impl std::fmt::Display for SubsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountExceedsLen { count, len } => {
                write!(f, "cannot draw {count} distinct elements from {len}")
            }
        }
    }
}

impl std::error::Error for SubsetError {}

/// Draw `count` distinct elements of `items`, in draw order.
///
/// A pool holds the source indices that are still available; each draw
/// removes one uniformly chosen index from the pool, so no source position
/// is used twice. `subset(items, items.len(), rng)` is a random permutation
/// of the whole slice.
pub fn subset<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, SubsetError> {
    if count > items.len() {
        return Err(SubsetError::CountExceedsLen {
            count,
            len: items.len(),
        });
    }

    let mut pool: Vec<usize> = (0..items.len()).collect();
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let slot = rng.random_range(0..pool.len());
        let index = pool.remove(slot);
        drawn.push(items[index].clone());
    }
    Ok(drawn)
}
