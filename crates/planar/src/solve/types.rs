//! Solver records: configuration, branch sign, outcome status, errors.
//!
//! - `SolveCfg`: tolerances and the negative-radicand policy.
//! - `Sign`: explicit branch selector for two-solution cases.
//! - `Solution`: solved `a`, `b` plus a `Status` marker.
//! - `SolveError`: degenerate, singular and out-of-domain inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vec2::{EPS, V2};

/// What to do when a radicand (discriminant) comes out negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadicandPolicy {
    /// Clamp to zero and report `Status::Clamped` (boundary/tangent answer).
    #[default]
    Clamp,
    /// Fail with `SolveError::NoRealSolution`.
    Reject,
}

/// Solver configuration (tolerances and degeneracy policy).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveCfg {
    /// Known vectors shorter than this are degenerate. An absolute length,
    /// the same cutoff `vec2::unit` applies.
    pub eps_zero: f64,
    /// `|perp(e_a, e_b)|` below this means parallel directions (case 3).
    pub eps_parallel: f64,
    /// Radicands with `|Δ|` below this are a double root. `Δ` is compared
    /// after dividing by the squared length scale of its inputs, so the
    /// classification does not depend on units.
    pub eps_radicand: f64,
    pub radicand: RadicandPolicy,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            eps_zero: EPS,
            eps_parallel: EPS,
            eps_radicand: EPS,
            radicand: RadicandPolicy::Clamp,
        }
    }
}

impl SolveCfg {
    #[inline]
    pub fn rejecting() -> Self {
        Self {
            radicand: RadicandPolicy::Reject,
            ..Self::default()
        }
    }
}

/// Branch selector for cases with two geometric solutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    #[default]
    Pos,
    Neg,
}

impl Sign {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }

    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl From<Sign> for f64 {
    #[inline]
    fn from(s: Sign) -> f64 {
        s.value()
    }
}

/// How a successful solution was reached.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// Two distinct branches exist (or the case has a single exact answer).
    Regular,
    /// Radicand was (numerically) zero: both branches coincide.
    Tangent,
    /// Radicand was negative and clamped to zero; the answer is the boundary configuration.
    Clamped { radicand: f64 },
}

impl Status {
    #[inline]
    pub fn is_exact(&self) -> bool {
        !matches!(self, Status::Clamped { .. })
    }
}

/// Solved pair for the slots `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub a: V2,
    pub b: V2,
    pub status: Status,
}

/// Vector slot named in an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    A,
    B,
    C,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Slot::A => "a",
            Slot::B => "b",
            Slot::C => "c",
        };
        f.write_str(s)
    }
}

/// Reasons a case has no (well-defined) solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveError {
    /// A known vector used for a direction or a normalization has zero length.
    ZeroLength(Slot),
    /// The two known directions are parallel (case 3): the system is singular.
    Parallel { perp: f64 },
    /// Negative radicand under `RadicandPolicy::Reject`.
    NoRealSolution { radicand: f64 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::ZeroLength(slot) => write!(f, "vector '{slot}' has zero length"),
            SolveError::Parallel { perp } => {
                write!(f, "directions are parallel (perp {perp:.3e}); system is singular")
            }
            SolveError::NoRealSolution { radicand } => {
                write!(f, "no real solution (radicand {radicand:.3e} < 0)")
            }
        }
    }
}

impl std::error::Error for SolveError {}
