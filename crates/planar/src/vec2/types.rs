//! The `V2` value type and its polar record.
//!
//! - `V2`: owning cartesian pair; `r`/`w` are derived on read.
//! - `Polar`: `{r, w}` record produced by `to_polar` and consumed by `from_polar`.
//! - Named constants are associated `const`s, so using one always yields a copy.
//!
//! Code cross-refs: `ops` (algebra), `repr::{Keys, Desc, View}` (construction forms).

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::cfg::EPS;

/// Plain 2D vector `{x, y}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

/// Polar form `{r, w}`: magnitude and direction in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub r: f64,
    pub w: f64,
}

impl V2 {
    pub const ZERO: V2 = V2 { x: 0.0, y: 0.0 };
    pub const X_UNIT: V2 = V2 { x: 1.0, y: 0.0 };
    pub const Y_UNIT: V2 = V2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from magnitude and direction.
    #[inline]
    pub fn from_polar(p: Polar) -> Self {
        let (sw, cw) = p.w.sin_cos();
        Self::new(p.r * cw, p.r * sw)
    }

    /// Build from a radius and explicit direction cosines (`x = r·cw`, `y = r·sw`).
    ///
    /// The cosines are taken as given; they are not renormalized.
    #[inline]
    pub fn from_cosines(r: f64, cw: f64, sw: f64) -> Self {
        Self::new(r * cw, r * sw)
    }

    /// Magnitude `hypot(x, y)`.
    #[inline]
    pub fn r(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction `atan2(y, x)` in (−π, π]; 0 for the zero vector.
    #[inline]
    pub fn w(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.r()
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.w()
    }

    /// Squared magnitude `x² + y²`.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn to_polar(&self) -> Polar {
        Polar {
            r: self.r(),
            w: self.w(),
        }
    }

    /// Rewrite both coordinates so that `|self| = r`, keeping the direction.
    ///
    /// A negative `r` keeps `|r|` and flips the direction (rotation by π).
    /// The zero vector has direction 0, so it becomes `(r, 0)`.
    pub fn set_magnitude(&mut self, r: f64) -> &mut Self {
        let w = self.w();
        *self = V2::from_polar(Polar { r, w });
        self
    }

    /// Rewrite both coordinates so that the direction is `w`, keeping the magnitude.
    pub fn set_direction(&mut self, w: f64) -> &mut Self {
        let r = self.r();
        *self = V2::from_polar(Polar { r, w });
        self
    }

    /// `|self| ≤ EPS`, the same cutoff `unit` and `invert` use.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.near_zero(EPS)
    }

    /// `| |self|² − 1 | < EPS`.
    #[inline]
    pub fn is_unit(&self) -> bool {
        (self.norm_squared() - 1.0).abs() < EPS
    }

    /// Coordinate-wise equality within `EPS`.
    #[inline]
    pub fn is_equal(&self, other: &V2) -> bool {
        self.near_equal(other, EPS)
    }

    /// Length test: `|self| ≤ eps`.
    #[inline]
    pub fn near_zero(&self, eps: f64) -> bool {
        self.r() <= eps
    }

    #[inline]
    pub fn near_equal(&self, other: &V2, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    /// `"(x,y)"` with `decimals` fixed places, or full native precision for
    /// `None` and `Some(0)`.
    pub fn to_string_with(&self, decimals: Option<usize>) -> String {
        match decimals {
            Some(n) if n > 0 => format!("({:.n$},{:.n$})", self.x, self.y, n = n),
            _ => format!("({},{})", self.x, self.y),
        }
    }
}

impl Polar {
    #[inline]
    pub const fn new(r: f64, w: f64) -> Self {
        Self { r, w }
    }

    #[inline]
    pub fn to_cartesian(&self) -> V2 {
        V2::from_polar(*self)
    }
}

impl fmt::Display for V2 {
    /// Honours the formatter precision: `format!("{:.2}", v)` prints `(3.00,4.00)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_with(f.precision());
        f.write_str(&s)
    }
}

impl From<Vector2<f64>> for V2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<V2> for Vector2<f64> {
    #[inline]
    fn from(v: V2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for V2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for V2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Polar> for V2 {
    #[inline]
    fn from(p: Polar) -> Self {
        V2::from_polar(p)
    }
}

impl From<V2> for Polar {
    #[inline]
    fn from(v: V2) -> Self {
        v.to_polar()
    }
}
