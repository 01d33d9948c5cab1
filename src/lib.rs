//! `tombola`: stateless random drawing utilities.
//!
//! Turns any [`rand::Rng`] into higher-level probabilistic draws: weighted
//! selection, unbiased shuffling, sampling without replacement, chance
//! rolls, and uniform sampling over simple shapes.
//!
//! Every function takes the generator as an explicit `&mut R` argument;
//! the crate holds no state of its own and never consults a global
//! generator, so callers control seeding and any seedable RNG doubles as a
//! deterministic stub in tests.
//!
//! Exposed modules:
//! - `pick`: uniform and weighted discrete selection.
//! - `shuffle`: in-place shuffling + sampling without replacement.
//! - `geom`: points on segments, in rectangles, on rectangle borders, unit directions.
//! - `chance`: percentage / probability chance rolls.

#![forbid(unsafe_code)]

pub mod chance;
pub mod geom;
pub mod pick;
pub mod shuffle;

pub use chance::{percent, probability};
pub use geom::{
    point_in_rect, point_on_rect_border, point_on_segment, point_on_segment3, unit_direction,
    Rect, RectBorderError,
};
pub use pick::{
    either, either3, flip, float_range, from_slice, int_range, variant, weighted_index,
    weighted_index_float, Enumerated, WeightError,
};
pub use shuffle::{shuffle, subset, SubsetError};
