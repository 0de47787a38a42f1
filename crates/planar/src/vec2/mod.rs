//! 2D vector algebra.
//!
//! Purpose
//! - A plain `{x, y}` value type with derived polar accessors, the algebra the
//!   solver needs (dot, perp, tilde, similarity transform), and tolerance-based
//!   predicates under a single epsilon (`cfg::EPS`).
//! - Representation conversion between cartesian, polar and radius+cosines
//!   forms, plus a non-owning `View` for aliasing a live vector.
//!
//! Degenerate policy
//! - `unit` and `invert` of a vector shorter than `EPS` return `V2::ZERO`.
//!   They never panic and never produce NaN.
//!
//! Code cross-refs: `solve` (consumer), `Affine2` (2×3 coordinate map)

pub mod affine;
pub mod cfg;
pub mod ops;
pub mod repr;
mod types;

pub use affine::Affine2;
pub use cfg::EPS;
pub use ops::{
    add, affine_transform, angle_to, dot, from_polar, invert, negate, perp, rotate, scale,
    similarity_transform, sub, tilde, to_polar, unit,
};
pub use repr::{Desc, Keys, View};
pub use types::{Polar, V2};
