//! Vector algebra on `V2`.
//!
//! - Free functions are pure and never touch their arguments.
//! - `V2::i*` methods mutate only the receiver and return it for chaining.
//! - Operator impls forward to the free functions.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::cfg::EPS;
use super::types::{Polar, V2};

#[inline]
pub fn add(a: V2, b: V2) -> V2 {
    V2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn sub(a: V2, b: V2) -> V2 {
    V2::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn dot(a: V2, b: V2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Symplectic (perp dot) product `a.x·b.y − a.y·b.x`; zero iff `a ∥ b`.
#[inline]
pub fn perp(a: V2, b: V2) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
pub fn scale(a: V2, s: f64) -> V2 {
    V2::new(s * a.x, s * a.y)
}

#[inline]
pub fn negate(a: V2) -> V2 {
    V2::new(-a.x, -a.y)
}

/// 90° counter-clockwise rotation `(−y, x)`.
#[inline]
pub fn tilde(a: V2) -> V2 {
    V2::new(-a.y, a.x)
}

/// Counter-clockwise rotation by `w` radians.
#[inline]
pub fn rotate(a: V2, w: f64) -> V2 {
    let (s, c) = w.sin_cos();
    V2::new(c * a.x - s * a.y, s * a.x + c * a.y)
}

/// `λ·a + μ·tilde(a)`: uniform scale by `hypot(λ, μ)` and rotation by `atan2(μ, λ)`.
#[inline]
pub fn similarity_transform(a: V2, lambda: f64, mu: f64) -> V2 {
    V2::new(lambda * a.x - mu * a.y, lambda * a.y + mu * a.x)
}

/// `a / |a|`, or the zero vector when `|a| ≤ EPS`.
#[inline]
pub fn unit(a: V2) -> V2 {
    scale(a, inv_or_zero(a.r()))
}

/// `a / |a|²`, or the zero vector when `|a| ≤ EPS`.
#[inline]
pub fn invert(a: V2) -> V2 {
    let r = a.r();
    scale(a, inv_or_zero(r) * inv_or_zero(r))
}

#[inline]
fn inv_or_zero(len: f64) -> f64 {
    if len > EPS {
        1.0 / len
    } else {
        0.0
    }
}

/// SVG-style 2×3 affine map `[m11 m12 tx; m21 m22 ty]`.
#[inline]
pub fn affine_transform(a: V2, m11: f64, m21: f64, m12: f64, m22: f64, tx: f64, ty: f64) -> V2 {
    V2::new(m11 * a.x + m12 * a.y + tx, m21 * a.x + m22 * a.y + ty)
}

/// Signed angle from `a` to `b` in (−π, π].
///
/// A perp product below `EPS` is snapped to zero, so (anti)parallel pairs give exactly 0 or π.
#[inline]
pub fn angle_to(a: V2, b: V2) -> f64 {
    let t = perp(a, b);
    let t = if t.abs() < EPS { 0.0 } else { t };
    t.atan2(dot(a, b))
}

#[inline]
pub fn to_polar(a: V2) -> Polar {
    a.to_polar()
}

#[inline]
pub fn from_polar(p: Polar) -> V2 {
    V2::from_polar(p)
}

impl V2 {
    #[inline]
    pub fn dot(&self, other: V2) -> f64 {
        dot(*self, other)
    }

    #[inline]
    pub fn perp(&self, other: V2) -> f64 {
        perp(*self, other)
    }

    #[inline]
    pub fn scale(&self, s: f64) -> V2 {
        scale(*self, s)
    }

    #[inline]
    pub fn tilde(&self) -> V2 {
        tilde(*self)
    }

    #[inline]
    pub fn rotate(&self, w: f64) -> V2 {
        rotate(*self, w)
    }

    #[inline]
    pub fn unit(&self) -> V2 {
        unit(*self)
    }

    #[inline]
    pub fn invert(&self) -> V2 {
        invert(*self)
    }

    #[inline]
    pub fn similarity_transform(&self, lambda: f64, mu: f64) -> V2 {
        similarity_transform(*self, lambda, mu)
    }

    #[inline]
    pub fn affine_transform(&self, m11: f64, m21: f64, m12: f64, m22: f64, tx: f64, ty: f64) -> V2 {
        affine_transform(*self, m11, m21, m12, m22, tx, ty)
    }

    #[inline]
    pub fn angle_to(&self, other: V2) -> f64 {
        angle_to(*self, other)
    }

    /// Copy `other` into the receiver.
    #[inline]
    pub fn assign(&mut self, other: V2) -> &mut Self {
        *self = other;
        self
    }

    #[inline]
    pub fn iadd(&mut self, other: V2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    pub fn isub(&mut self, other: V2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    pub fn iscale(&mut self, s: f64) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self
    }

    #[inline]
    pub fn inegate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    #[inline]
    pub fn itilde(&mut self) -> &mut Self {
        *self = tilde(*self);
        self
    }

    #[inline]
    pub fn irotate(&mut self, w: f64) -> &mut Self {
        *self = rotate(*self, w);
        self
    }

    #[inline]
    pub fn iunit(&mut self) -> &mut Self {
        *self = unit(*self);
        self
    }

    #[inline]
    pub fn iinvert(&mut self) -> &mut Self {
        *self = invert(*self);
        self
    }

    #[inline]
    pub fn isimilarity_transform(&mut self, lambda: f64, mu: f64) -> &mut Self {
        *self = similarity_transform(*self, lambda, mu);
        self
    }

    #[inline]
    pub fn iaffine_transform(
        &mut self,
        m11: f64,
        m21: f64,
        m12: f64,
        m22: f64,
        tx: f64,
        ty: f64,
    ) -> &mut Self {
        *self = affine_transform(*self, m11, m21, m12, m22, tx, ty);
        self
    }
}

impl Add for V2 {
    type Output = V2;
    #[inline]
    fn add(self, rhs: V2) -> V2 {
        add(self, rhs)
    }
}

impl Sub for V2 {
    type Output = V2;
    #[inline]
    fn sub(self, rhs: V2) -> V2 {
        sub(self, rhs)
    }
}

impl Neg for V2 {
    type Output = V2;
    #[inline]
    fn neg(self) -> V2 {
        negate(self)
    }
}

impl Mul<f64> for V2 {
    type Output = V2;
    #[inline]
    fn mul(self, s: f64) -> V2 {
        scale(self, s)
    }
}

impl Mul<V2> for f64 {
    type Output = V2;
    #[inline]
    fn mul(self, v: V2) -> V2 {
        scale(v, self)
    }
}

impl AddAssign for V2 {
    #[inline]
    fn add_assign(&mut self, rhs: V2) {
        self.iadd(rhs);
    }
}

impl SubAssign for V2 {
    #[inline]
    fn sub_assign(&mut self, rhs: V2) {
        self.isub(rhs);
    }
}

impl MulAssign<f64> for V2 {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.iscale(s);
    }
}
