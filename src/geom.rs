//! Uniform sampling over simple shapes.
//!
//! Segment and rectangle-interior sampling are plain interpolation of
//! uniform draws. Rectangle-border sampling is parameterized by arc length:
//! one draw over the whole perimeter, walked through the four sides in
//! fixed order, so each side receives probability mass proportional to its
//! length rather than a flat quarter.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_distr::{Distribution, UnitDisc};

/// An axis-aligned rectangle with `min` at the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner.
    pub min: Vec2,
    /// Top-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Rectangle spanning `min` to `max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Total border length, `2 * (width + height)`.
    #[inline]
    pub fn perimeter(&self) -> f32 {
        2.0 * (self.width() + self.height())
    }
}

/// Uniform point on the segment from `a` to `b`.
///
/// One `t` drawn in `[0, 1]` interpolates every coordinate, so the result
/// lies exactly on the segment.
pub fn point_on_segment<R: Rng + ?Sized>(a: Vec2, b: Vec2, rng: &mut R) -> Vec2 {
    let t = rng.random_range(0.0..=1.0);
    a.lerp(b, t)
}

/// Uniform point on the 3D segment from `a` to `b`.
pub fn point_on_segment3<R: Rng + ?Sized>(a: Vec3, b: Vec3, rng: &mut R) -> Vec3 {
    let t = rng.random_range(0.0..=1.0);
    a.lerp(b, t)
}

/// Uniform point inside `rect`, edges included.
///
/// The axes are drawn independently.
pub fn point_in_rect<R: Rng + ?Sized>(rect: Rect, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(rect.min.x..=rect.max.x),
        rng.random_range(rect.min.y..=rect.max.y),
    )
}

/// Errors for [`point_on_rect_border`].
#[derive(Debug, Clone, PartialEq)]
pub enum RectBorderError {
    /// Both dimensions are zero, so the border has no length to sample.
    ZeroPerimeter,
}

impl std::fmt::Display for RectBorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPerimeter => write!(f, "rect border has zero perimeter"),
        }
    }
}

impl std::error::Error for RectBorderError {}

/// Uniform point on the border of `rect`, by arc length.
///
/// One draw in `[0, perimeter)` is walked through the sides in fixed order:
/// top (left to right at `max.y`), right (bottom to top at `max.x`), bottom
/// (left to right at `min.y`), left (bottom to top at `min.x`). Longer
/// sides therefore receive proportionally more of the probability mass.
pub fn point_on_rect_border<R: Rng + ?Sized>(
    rect: Rect,
    rng: &mut R,
) -> Result<Vec2, RectBorderError> {
    let width = rect.width();
    let height = rect.height();
    let perimeter = 2.0 * (width + height);
    if perimeter <= 0.0 {
        return Err(RectBorderError::ZeroPerimeter);
    }

    let mut p = rng.random_range(0.0..perimeter);

    if p < width {
        return Ok(Vec2::new(rect.min.x + p, rect.max.y));
    }
    p -= width;

    if p < height {
        return Ok(Vec2::new(rect.max.x, rect.min.y + p));
    }
    p -= height;

    if p < width {
        return Ok(Vec2::new(rect.min.x + p, rect.min.y));
    }
    p -= width;

    Ok(Vec2::new(rect.min.x, rect.min.y + p))
}

/// Uniform direction on the unit circle.
///
/// Draws a point inside the unit disk and normalizes it; a degenerate draw
/// at the origin falls back to `Vec2::X` instead of producing NaN.
pub fn unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let [x, y]: [f32; 2] = UnitDisc.sample(rng);
    Vec2::new(x, y).normalize_or(Vec2::X)
}
