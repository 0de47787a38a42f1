//! Inline 2×3 affine map used for coordinate mapping.
//!
//! Layout follows SVG's `matrix(a b c d e f)`:
//! `[m11 m12 tx; m21 m22 ty; 0 0 1]`.

use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::types::V2;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Coefficients in SVG order (column-major, translation last).
    #[inline]
    pub fn from_svg(m11: f64, m21: f64, m12: f64, m22: f64, tx: f64, ty: f64) -> Self {
        Self {
            m: Matrix2::new(m11, m12, m21, m22),
            t: Vector2::new(tx, ty),
        }
    }

    /// Pure rotation by `w` radians (counter-clockwise).
    #[inline]
    pub fn rotation(w: f64) -> Self {
        let (s, c) = w.sin_cos();
        Self::from_svg(c, s, -s, c, 0.0, 0.0)
    }

    #[inline]
    pub fn translation(t: V2) -> Self {
        Self {
            m: Matrix2::identity(),
            t: t.into(),
        }
    }

    /// SVG coefficient tuple `(m11, m21, m12, m22, tx, ty)`.
    #[inline]
    pub fn to_svg(&self) -> [f64; 6] {
        [
            self.m[(0, 0)],
            self.m[(1, 0)],
            self.m[(0, 1)],
            self.m[(1, 1)],
            self.t.x,
            self.t.y,
        ]
    }

    #[inline]
    pub fn apply(&self, v: V2) -> V2 {
        let [m11, m21, m12, m22, tx, ty] = self.to_svg();
        v.affine_transform(m11, m21, m12, m22, tx, ty)
    }

    /// Linear part only (no translation), for direction vectors.
    #[inline]
    pub fn apply_linear(&self, v: V2) -> V2 {
        (self.m * Vector2::from(v)).into()
    }

    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// None if the linear part is singular.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
}
