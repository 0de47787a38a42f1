//! Planar vector equation solver (`a ± b = c`, five closed-form cases).
//!
//! Purpose
//! - Recover one or two scalar unknowns (magnitudes and/or directions) from
//!   partial knowledge of three vectors linked by a vector sum.
//! - Every handler is a single closed-form computation; no iteration, no state.
//!
//! Branches and degeneracy
//! - Two-solution cases (2, 4, 5) take an explicit `Sign`; `Sign::default()`
//!   (`Pos`) is the canonical branch.
//! - Zero-length known vectors and parallel directions are errors.
//! - Negative radicands follow `SolveCfg::radicand`: clamped (default, marked
//!   `Status::Clamped`) or rejected (`SolveError::NoRealSolution`).
//!
//! Code cross-refs: `vec2::{similarity_transform, perp, unit}`, `vec2::Keys`

mod cases;
mod types;

use serde::{Deserialize, Serialize};

use crate::vec2::{Keys, V2};

pub use cases::{case1, case2, case3, case4, case5, solve1, solve2, solve3, solve4, solve5};
pub use types::{RadicandPolicy, Sign, Slot, Solution, SolveCfg, SolveError, Status};

/// The five known/unknown patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// 1: direct sum.
    Sum,
    /// 2: line meets circle.
    LineCircle,
    /// 3: two directions, linear cross-ratio.
    TwoDirections,
    /// 4: two magnitudes, triangle from three sides.
    TwoMagnitudes,
    /// 5: right triangle over the known vector.
    RightAngle,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Sum,
        Case::LineCircle,
        Case::TwoDirections,
        Case::TwoMagnitudes,
        Case::RightAngle,
    ];

    /// 1-based case number.
    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Case::Sum => 1,
            Case::LineCircle => 2,
            Case::TwoDirections => 3,
            Case::TwoMagnitudes => 4,
            Case::RightAngle => 5,
        }
    }

    #[inline]
    pub fn from_index(i: u8) -> Option<Case> {
        Case::ALL.get(usize::from(i).checked_sub(1)?).copied()
    }

    /// Vector relation solved by this case.
    pub fn relation(self) -> &'static str {
        match self {
            Case::Sum | Case::LineCircle | Case::TwoMagnitudes => "a = b + c",
            Case::TwoDirections => "a + b = c",
            Case::RightAngle => "a + b = c, a ⊥ b",
        }
    }

    /// Which parts of the `a` and `b` slots are read.
    pub fn reads(self) -> &'static str {
        match self {
            Case::Sum => "b",
            Case::LineCircle => "direction of a, magnitude of b",
            Case::TwoDirections => "directions of a and b",
            Case::TwoMagnitudes => "magnitudes of a and b",
            Case::RightAngle => "magnitude of b",
        }
    }

    /// Whether `Sign` selects between two branches.
    #[inline]
    pub fn has_branches(self) -> bool {
        matches!(self, Case::LineCircle | Case::TwoMagnitudes | Case::RightAngle)
    }

    /// Pure dispatch over slot vectors (same reading rules as the in-place handlers).
    pub fn solve(
        self,
        a: V2,
        b: V2,
        c: V2,
        sign: Sign,
        cfg: &SolveCfg,
    ) -> Result<Solution, SolveError> {
        let sol = match self {
            Case::Sum => Ok(solve1(b, c)),
            Case::LineCircle => solve2(a, b.r(), c, sign, cfg),
            Case::TwoDirections => solve3(a, b, c, cfg),
            Case::TwoMagnitudes => solve4(a.r(), b.r(), c, sign, cfg),
            Case::RightAngle => solve5(b.r(), c, sign, cfg),
        };
        if let Ok(s) = &sol {
            tracing::trace!(case = self.index(), a = %s.a, b = %s.b, status = ?s.status, "solved");
        }
        sol
    }

    /// Dispatch over loose key descriptions, e.g. `{"w": 0.3}` for a bare
    /// direction or `{"r": 2}` for a bare magnitude.
    pub fn solve_keys(
        self,
        a: &Keys,
        b: &Keys,
        c: &Keys,
        sign: Sign,
        cfg: &SolveCfg,
    ) -> Result<Solution, SolveError> {
        self.solve(a.to_v2(), b.to_v2(), c.to_v2(), sign, cfg)
    }
}

#[cfg(test)]
mod tests;
