//! Closed-form handlers for the five planar vector equation cases.
//!
//! Relations per case (c is always fully known):
//! - case 1: `a = b + c`, `b` known → `a`
//! - case 2: `a = b + c`, direction of `a` and `|b|` known → `|a|`, `b`
//! - case 3: `a + b = c`, directions of `a`, `b` known → signed `|a|`, `|b|`
//! - case 4: `a = b + c`, `|a|`, `|b|` known → directions of `a`, `b`
//! - case 5: `a + b = c` with `a ⊥ b`, `|b|` known → `a`, direction of `b`
//!
//! Each `caseN` reads what it needs from the slots, writes the solution into
//! `a` and `b`, and leaves both untouched on error. `solveN` are the pure
//! counterparts taking the known scalars directly.

use crate::vec2::{dot, perp, unit, V2};

use super::types::{RadicandPolicy, Sign, Slot, Solution, SolveCfg, SolveError, Status};

/// Case 1: `a = b + c`.
pub fn solve1(b: V2, c: V2) -> Solution {
    Solution {
        a: b + c,
        b,
        status: Status::Regular,
    }
}

/// Case 2: line through the origin along `dir_a` meets the circle of radius
/// `r_b` around `c`.
///
/// `r_a = dot(e_a, c) ± √(r_b² − perp(e_a, c)²)`, then `b = a − c`.
/// `r_a` is signed: a negative root places `a` against `dir_a`.
pub fn solve2(
    dir_a: V2,
    r_b: f64,
    c: V2,
    sign: Sign,
    cfg: &SolveCfg,
) -> Result<Solution, SolveError> {
    let e_a = direction(dir_a, Slot::A, cfg)?;
    let p = dot(e_a, c);
    let q = perp(e_a, c);
    let rb2 = r_b * r_b;
    let scale = rb2.max(c.norm_squared());
    let (root, status) = radicand(rb2 - q * q, scale, 2, cfg)?;
    let r_a = p + sign.value() * root;
    let a = e_a * r_a;
    Ok(Solution {
        a,
        b: a - c,
        status,
    })
}

/// Case 3: `a + b = c` with both directions fixed.
///
/// `r_a = perp(c, e_b) / perp(e_a, e_b)`, `r_b = perp(e_a, c) / perp(e_a, e_b)`.
pub fn solve3(dir_a: V2, dir_b: V2, c: V2, cfg: &SolveCfg) -> Result<Solution, SolveError> {
    let e_a = direction(dir_a, Slot::A, cfg)?;
    let e_b = direction(dir_b, Slot::B, cfg)?;
    let d = perp(e_a, e_b);
    if d.abs() < cfg.eps_parallel {
        tracing::debug!(case = 3, perp = d, "parallel directions");
        return Err(SolveError::Parallel { perp: d });
    }
    let r_a = perp(c, e_b) / d;
    let r_b = perp(e_a, c) / d;
    Ok(Solution {
        a: e_a * r_a,
        b: e_b * r_b,
        status: Status::Regular,
    })
}

/// Case 4: `a = b + c` with both magnitudes fixed (triangle from three sides).
///
/// With `λ = (r_a²/|c|² − r_b²/|c|² + 1)/2` and `μ = ±√(r_a²/|c|² − λ²)`:
/// `a = simtrf(c, λ, μ)`, `b = simtrf(c, λ − 1, μ)`.
pub fn solve4(
    r_a: f64,
    r_b: f64,
    c: V2,
    sign: Sign,
    cfg: &SolveCfg,
) -> Result<Solution, SolveError> {
    let cc = known_sum_norm_squared(c, cfg)?;
    let ra2 = r_a * r_a / cc;
    let rb2 = r_b * r_b / cc;
    let lambda = (ra2 - rb2 + 1.0) / 2.0;
    let (root, status) = radicand(ra2 - lambda * lambda, 1.0, 4, cfg)?;
    let mu = sign.value() * root;
    Ok(Solution {
        a: c.similarity_transform(lambda, mu),
        b: c.similarity_transform(lambda - 1.0, mu),
        status,
    })
}

/// Case 5: `a + b = c` with `a ⊥ b` and `|b|` fixed (right triangle over `c`).
///
/// `r_a = ±√(|c|² − r_b²)`, `a = simtrf(c, r_a, r_b) · r_a/|c|²`, `b = c − a`.
pub fn solve5(r_b: f64, c: V2, sign: Sign, cfg: &SolveCfg) -> Result<Solution, SolveError> {
    let cc = known_sum_norm_squared(c, cfg)?;
    let (root, status) = radicand(cc - r_b * r_b, cc, 5, cfg)?;
    let r_a = sign.value() * root;
    let a = c.similarity_transform(r_a, r_b) * (r_a / cc);
    Ok(Solution {
        a,
        b: c - a,
        status,
    })
}

/// In-place case 1: writes `b + c` into `a`.
pub fn case1(a: &mut V2, b: V2, c: V2) {
    a.assign(b).iadd(c);
}

/// In-place case 2: reads the direction of `a` and the magnitude of `b`.
pub fn case2(
    a: &mut V2,
    b: &mut V2,
    c: V2,
    sign: Sign,
    cfg: &SolveCfg,
) -> Result<Status, SolveError> {
    let sol = solve2(*a, b.r(), c, sign, cfg)?;
    Ok(write_back(a, b, sol))
}

/// In-place case 3: reads the directions of `a` and `b`.
pub fn case3(a: &mut V2, b: &mut V2, c: V2, cfg: &SolveCfg) -> Result<Status, SolveError> {
    let sol = solve3(*a, *b, c, cfg)?;
    Ok(write_back(a, b, sol))
}

/// In-place case 4: reads the magnitudes of `a` and `b`.
pub fn case4(
    a: &mut V2,
    b: &mut V2,
    c: V2,
    sign: Sign,
    cfg: &SolveCfg,
) -> Result<Status, SolveError> {
    let sol = solve4(a.r(), b.r(), c, sign, cfg)?;
    Ok(write_back(a, b, sol))
}

/// In-place case 5: reads the magnitude of `b`; `a` is overwritten.
pub fn case5(
    a: &mut V2,
    b: &mut V2,
    c: V2,
    sign: Sign,
    cfg: &SolveCfg,
) -> Result<Status, SolveError> {
    let sol = solve5(b.r(), c, sign, cfg)?;
    Ok(write_back(a, b, sol))
}

#[inline]
fn write_back(a: &mut V2, b: &mut V2, sol: Solution) -> Status {
    a.assign(sol.a);
    b.assign(sol.b);
    sol.status
}

#[inline]
fn direction(v: V2, slot: Slot, cfg: &SolveCfg) -> Result<V2, SolveError> {
    if v.r() <= cfg.eps_zero {
        tracing::debug!(%slot, "zero-length direction");
        return Err(SolveError::ZeroLength(slot));
    }
    Ok(unit(v))
}

#[inline]
fn known_sum_norm_squared(c: V2, cfg: &SolveCfg) -> Result<f64, SolveError> {
    if c.r() <= cfg.eps_zero {
        tracing::debug!(slot = %Slot::C, "zero-length known vector");
        return Err(SolveError::ZeroLength(Slot::C));
    }
    Ok(c.norm_squared())
}

/// Square root of `d` with the configured classification of small and negative values.
///
/// `scale` is the squared length `d` is measured in; the tangent and sign tests
/// run on `d / scale`. A double root yields exactly 0 so both branches coincide.
fn radicand(
    d: f64,
    scale: f64,
    case: u8,
    cfg: &SolveCfg,
) -> Result<(f64, Status), SolveError> {
    let rel = if scale > 0.0 { d / scale } else { d };
    if rel.abs() <= cfg.eps_radicand {
        tracing::trace!(case, radicand = d, "double root");
        return Ok((0.0, Status::Tangent));
    }
    if d > 0.0 {
        return Ok((d.sqrt(), Status::Regular));
    }
    match cfg.radicand {
        RadicandPolicy::Clamp => {
            tracing::debug!(case, radicand = d, "negative radicand clamped to zero");
            Ok((0.0, Status::Clamped { radicand: d }))
        }
        RadicandPolicy::Reject => {
            tracing::debug!(case, radicand = d, "negative radicand rejected");
            Err(SolveError::NoRealSolution { radicand: d })
        }
    }
}
