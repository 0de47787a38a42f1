//! Representation conversion (cartesian ↔ polar) and aliasing views.
//!
//! Construction forms
//! - `Keys` is the loose input record: any subset of `{x, y, r, w, cw, sw}`.
//! - `Keys::classify` maps it onto exactly one `Desc` variant by a fixed
//!   priority order. Conflicting keys are resolved by that order, never rejected:
//!   1. `x` or `y` → cartesian (missing coordinate is 0)
//!   2. `r` and `w` → polar
//!   3. `r`, `cw` and `sw` → radius + direction cosines
//!   4. `r` alone → polar with direction 0
//!   5. `w` alone → polar with unit magnitude
//!   6. nothing recognized → zero vector
//!
//! Views
//! - `View` is a non-owning handle over a `Cell<V2>`. It has no coordinates of
//!   its own; every read and write goes to the backing vector. Several views
//!   may alias the same vector.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use super::types::{Polar, V2};

/// Partial vector description as it arrives from callers (e.g. JSON).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Keys {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub r: Option<f64>,
    pub w: Option<f64>,
    pub cw: Option<f64>,
    pub sw: Option<f64>,
}

/// The recognized construction forms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Desc {
    Cartesian { x: f64, y: f64 },
    Polar { r: f64, w: f64 },
    Cosines { r: f64, cw: f64, sw: f64 },
}

impl Keys {
    /// Resolve the key set to one construction form (priority order in the module docs).
    pub fn classify(&self) -> Desc {
        match *self {
            Keys { x: Some(x), y, .. } => Desc::Cartesian {
                x,
                y: y.unwrap_or(0.0),
            },
            Keys {
                x: None,
                y: Some(y),
                ..
            } => Desc::Cartesian { x: 0.0, y },
            Keys {
                r: Some(r),
                w: Some(w),
                ..
            } => Desc::Polar { r, w },
            Keys {
                r: Some(r),
                cw: Some(cw),
                sw: Some(sw),
                ..
            } => Desc::Cosines { r, cw, sw },
            Keys { r: Some(r), .. } => Desc::Polar { r, w: 0.0 },
            Keys { w: Some(w), .. } => Desc::Polar { r: 1.0, w },
            _ => Desc::Cartesian { x: 0.0, y: 0.0 },
        }
    }

    #[inline]
    pub fn to_v2(&self) -> V2 {
        self.classify().to_cartesian()
    }

    #[inline]
    pub fn cartesian(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    #[inline]
    pub fn polar(r: f64, w: f64) -> Self {
        Self {
            r: Some(r),
            w: Some(w),
            ..Self::default()
        }
    }
}

impl Desc {
    /// Cartesian pair; returned as-is when already cartesian.
    pub fn to_cartesian(&self) -> V2 {
        match *self {
            Desc::Cartesian { x, y } => V2::new(x, y),
            Desc::Polar { r, w } => V2::from_polar(Polar { r, w }),
            Desc::Cosines { r, cw, sw } => V2::from_cosines(r, cw, sw),
        }
    }

    /// Polar pair; returned as-is when already polar.
    ///
    /// A negative polar radius is kept verbatim here; it only normalizes once
    /// the description passes through cartesian form.
    pub fn to_polar(&self) -> Polar {
        match *self {
            Desc::Polar { r, w } => Polar { r, w },
            _ => self.to_cartesian().to_polar(),
        }
    }

    #[inline]
    pub fn is_cartesian(&self) -> bool {
        matches!(self, Desc::Cartesian { .. })
    }
}

impl From<Keys> for V2 {
    #[inline]
    fn from(k: Keys) -> Self {
        k.to_v2()
    }
}

impl From<V2> for Desc {
    #[inline]
    fn from(v: V2) -> Self {
        Desc::Cartesian { x: v.x, y: v.y }
    }
}

impl From<Polar> for Desc {
    #[inline]
    fn from(p: Polar) -> Self {
        Desc::Polar { r: p.r, w: p.w }
    }
}

/// Reference vector: reads and writes forward to a backing `V2`.
#[derive(Clone, Copy)]
pub struct View<'a> {
    target: &'a Cell<V2>,
}

impl<'a> View<'a> {
    #[inline]
    pub fn new(target: &'a Cell<V2>) -> Self {
        Self { target }
    }

    /// View over an owned vector for the duration of the borrow.
    #[inline]
    pub fn of(v: &'a mut V2) -> Self {
        Self::new(Cell::from_mut(v))
    }

    /// Snapshot of the backing vector's current value.
    #[inline]
    pub fn get(&self) -> V2 {
        self.target.get()
    }

    #[inline]
    pub fn set(&self, v: V2) {
        self.target.set(v);
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.get().x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.get().y
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.get().r()
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.get().w()
    }

    #[inline]
    pub fn set_x(&self, x: f64) {
        let v = self.get();
        self.set(V2::new(x, v.y));
    }

    #[inline]
    pub fn set_y(&self, y: f64) {
        let v = self.get();
        self.set(V2::new(v.x, y));
    }

    /// Same rules as `V2::set_magnitude` (negative flips direction).
    #[inline]
    pub fn set_r(&self, r: f64) {
        let mut v = self.get();
        v.set_magnitude(r);
        self.set(v);
    }

    #[inline]
    pub fn set_w(&self, w: f64) {
        let mut v = self.get();
        v.set_direction(w);
        self.set(v);
    }

    /// Apply an in-place operation to the backing vector.
    #[inline]
    pub fn update(&self, f: impl FnOnce(&mut V2)) {
        let mut v = self.get();
        f(&mut v);
        self.set(v);
    }

    /// True if both views forward to the same backing vector.
    #[inline]
    pub fn aliases(&self, other: &View<'_>) -> bool {
        std::ptr::eq(self.target, other.target)
    }
}

impl std::fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("View").field(&self.get()).finish()
    }
}
