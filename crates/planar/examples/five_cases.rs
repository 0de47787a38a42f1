//! Walk through the five planar vector equation cases on one 3-4-5 triangle.
//!
//! Run: `cargo run -p planar --example five_cases`
//!
//! Each block states what is known, calls the in-place handler, and prints the
//! recovered vectors plus the relation residual.

use planar::prelude::*;

fn report(case: Case, a: V2, b: V2, status: Status) {
    println!(
        "case {} [{}] a = {a:.4}  b = {b:.4}  |a| = {:.4}  |b| = {:.4}  status = {status:?}",
        case.index(),
        case.relation(),
        a.r(),
        b.r(),
    );
}

fn main() -> Result<(), SolveError> {
    let cfg = SolveCfg::default();
    let c = V2::new(5.0, 0.0);

    // 1: b and c known.
    let mut a = V2::ZERO;
    case1(&mut a, V2::new(-1.8, 2.4), c);
    report(Case::Sum, a, V2::new(-1.8, 2.4), Status::Regular);

    // 2: direction of a, |b| = 3.
    let mut a = V2::new(0.8, 0.6);
    let mut b = V2::new(3.0, 0.0);
    let status = case2(&mut a, &mut b, c, Sign::Pos, &cfg)?;
    report(Case::LineCircle, a, b, status);

    // 3: both directions, a + b = c.
    let mut a = V2::new(0.8, 0.6);
    let mut b = V2::new(0.6, -0.8);
    let status = case3(&mut a, &mut b, c, &cfg)?;
    report(Case::TwoDirections, a, b, status);

    // 4: |a| = 4, |b| = 3, both reflections.
    for sign in [Sign::Pos, Sign::Neg] {
        let mut a = V2::new(4.0, 0.0);
        let mut b = V2::new(3.0, 0.0);
        let status = case4(&mut a, &mut b, c, sign, &cfg)?;
        report(Case::TwoMagnitudes, a, b, status);
    }

    // 5: |b| = 3 and a ⊥ b.
    let mut a = V2::ZERO;
    let mut b = V2::new(3.0, 0.0);
    let status = case5(&mut a, &mut b, c, Sign::Pos, &cfg)?;
    report(Case::RightAngle, a, b, status);

    // Parallel directions are refused rather than divided through.
    let mut a = V2::X_UNIT;
    let mut b = V2::new(-2.0, 0.0);
    if let Err(err) = case3(&mut a, &mut b, c, &cfg) {
        println!("case 3 with parallel directions: {err}");
    }
    Ok(())
}
