//! Flat function-style surface.
//!
//! Mirrors the free-function vocabulary (`add`, `dot`, `perp`, `tilde`, …) and
//! the five solver entry points so call sites can read like the equations they
//! implement, e.g. `api::perp(c, e_b) / api::perp(e_a, e_b)`.

pub use crate::solve::{
    case1, case2, case3, case4, case5, solve1, solve2, solve3, solve4, solve5,
};
pub use crate::vec2::{
    add, affine_transform, angle_to, dot, from_polar, invert, negate, perp, rotate, scale,
    similarity_transform, sub, tilde, to_polar, unit,
};

use crate::vec2::V2;

/// Signed area of the parallelogram spanned by `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: V2, b: V2) -> f64 {
    perp(a, b)
}

/// Area of the triangle closed by a solved case (`|perp(a, b)| / 2`).
#[inline]
pub fn triangle_area(a: V2, b: V2) -> f64 {
    perp(a, b).abs() / 2.0
}
