use super::*;
use crate::vec2::{dot, perp, tilde, Polar};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::PI;

fn close(a: V2, b: V2, eps: f64) -> bool {
    a.near_equal(&b, eps)
}

/// Exact-zero tangent detection so near-tangent random draws keep their true root.
fn strict_cfg() -> SolveCfg {
    SolveCfg {
        eps_radicand: 0.0,
        ..SolveCfg::default()
    }
}

fn random_vec(rng: &mut StdRng, r_min: f64, r_max: f64) -> V2 {
    V2::from_polar(Polar::new(rng.gen_range(r_min..r_max), rng.gen_range(-PI..PI)))
}

#[test]
fn case1_direct_sum_is_exact() {
    let mut a = V2::ZERO;
    case1(&mut a, V2::new(3.0, 4.0), V2::new(1.0, 2.0));
    assert_eq!(a, V2::new(4.0, 6.0));
    let sol = solve1(V2::new(3.0, 4.0), V2::new(1.0, 2.0));
    assert_eq!(sol.a, V2::new(4.0, 6.0));
    assert_eq!(sol.status, Status::Regular);
}

#[test]
fn case2_circle_meets_line_both_branches() {
    let cfg = SolveCfg::default();
    let c = V2::new(3.0, 4.0);
    let mut a = V2::X_UNIT;
    let mut b = V2::new(0.0, 5.0);
    let status = case2(&mut a, &mut b, c, Sign::Pos, &cfg).unwrap();
    assert_eq!(status, Status::Regular);
    assert_eq!(a, V2::new(6.0, 0.0));
    assert_eq!(b, V2::new(3.0, -4.0));

    let neg = solve2(V2::new(2.0, 0.0), 5.0, c, Sign::Neg, &cfg).unwrap();
    assert_eq!(neg.a, V2::ZERO);
    assert_eq!(neg.b, V2::new(-3.0, -4.0));
}

#[test]
fn case2_zero_radius_behaves_like_tangent() {
    let cfg = SolveCfg::default();
    // c on the line: exact double root.
    let on_line = solve2(V2::X_UNIT, 0.0, V2::new(2.0, 0.0), Sign::Pos, &cfg).unwrap();
    assert_eq!(on_line.status, Status::Tangent);
    assert_eq!(on_line.a, V2::new(2.0, 0.0));
    assert_eq!(on_line.b, V2::ZERO);

    // c off the line: radicand -1 clamps to the same foot-point construction.
    let mut a = V2::X_UNIT;
    let mut b = V2::ZERO;
    let status = case2(&mut a, &mut b, V2::new(2.0, 1.0), Sign::Pos, &cfg).unwrap();
    assert_eq!(status, Status::Clamped { radicand: -1.0 });
    assert!(!status.is_exact());
    assert_eq!(a, V2::new(2.0, 0.0));
    assert_eq!(b, V2::new(0.0, -1.0));
    assert!(!a.x.is_nan() && !b.y.is_nan());
    // Both branches coincide once clamped.
    let neg = solve2(V2::X_UNIT, 0.0, V2::new(2.0, 1.0), Sign::Neg, &cfg).unwrap();
    assert_eq!(neg.a, a);
}

#[test]
fn case2_reject_policy_and_degenerate_direction() {
    let cfg = SolveCfg::rejecting();
    let mut a = V2::X_UNIT;
    let mut b = V2::ZERO;
    let err = case2(&mut a, &mut b, V2::new(2.0, 1.0), Sign::Pos, &cfg).unwrap_err();
    assert_eq!(err, SolveError::NoRealSolution { radicand: -1.0 });
    // Slots untouched on error.
    assert_eq!(a, V2::X_UNIT);
    assert_eq!(b, V2::ZERO);

    let err = solve2(V2::ZERO, 1.0, V2::new(1.0, 1.0), Sign::Pos, &SolveCfg::default());
    assert_eq!(err, Err(SolveError::ZeroLength(Slot::A)));
}

#[test]
fn case3_orthogonal_basis_is_exact() {
    let cfg = SolveCfg::default();
    let mut a = V2::X_UNIT;
    let mut b = V2::Y_UNIT;
    let status = case3(&mut a, &mut b, V2::new(3.0, 4.0), &cfg).unwrap();
    assert_eq!(status, Status::Regular);
    assert_eq!(a, V2::new(3.0, 0.0));
    assert_eq!(b, V2::new(0.0, 4.0));
    assert_eq!(a.r(), 3.0);
    assert_eq!(b.r(), 4.0);
}

#[test]
fn case3_signed_magnitudes() {
    let sol = solve3(V2::X_UNIT, V2::Y_UNIT, V2::new(-3.0, 4.0), &SolveCfg::default()).unwrap();
    assert_eq!(sol.a, V2::new(-3.0, 0.0));
    assert_eq!(sol.a.dot(V2::X_UNIT), -3.0);
    assert_eq!(sol.b, V2::new(0.0, 4.0));
}

#[test]
fn case3_parallel_is_unsolvable() {
    let cfg = SolveCfg::default();
    let mut a = V2::X_UNIT;
    let mut b = V2::X_UNIT;
    let err = case3(&mut a, &mut b, V2::new(3.0, 4.0), &cfg).unwrap_err();
    assert_eq!(err, SolveError::Parallel { perp: 0.0 });
    assert_eq!(a, V2::X_UNIT);
    assert_eq!(b, V2::X_UNIT);
    // Antiparallel too, and the radicand policy has no say here.
    let err = solve3(V2::new(2.0, 2.0), V2::new(-1.0, -1.0), V2::X_UNIT, &SolveCfg::default());
    assert!(matches!(err, Err(SolveError::Parallel { .. })));
    let err = solve3(V2::X_UNIT, V2::ZERO, V2::X_UNIT, &SolveCfg::default());
    assert_eq!(err, Err(SolveError::ZeroLength(Slot::B)));
}

#[test]
fn case4_triangle_from_three_sides() {
    let cfg = SolveCfg::default();
    // 3-4-5 triangle: |a| = 4, |b| = 3, c = (5, 0).
    let c = V2::new(5.0, 0.0);
    let mut a = V2::new(4.0, 0.0);
    let mut b = V2::new(0.0, 3.0);
    let status = case4(&mut a, &mut b, c, Sign::Pos, &cfg).unwrap();
    assert_eq!(status, Status::Regular);
    assert!(close(a, V2::new(3.2, 2.4), 1e-12));
    assert!(close(b, V2::new(-1.8, 2.4), 1e-12));
    assert!(close(a - b, c, 1e-12));

    let neg = solve4(4.0, 3.0, c, Sign::Neg, &cfg).unwrap();
    assert!(close(neg.a, V2::new(3.2, -2.4), 1e-12));
    assert!(close(neg.b, V2::new(-1.8, -2.4), 1e-12));
}

#[test]
fn case4_impossible_triangle() {
    let c = V2::new(5.0, 0.0);
    let clamped = solve4(1.0, 1.0, c, Sign::Pos, &SolveCfg::default()).unwrap();
    assert!(matches!(clamped.status, Status::Clamped { radicand } if radicand < 0.0));
    assert!(close(clamped.a, V2::new(2.5, 0.0), 1e-12));
    assert!(close(clamped.b, V2::new(-2.5, 0.0), 1e-12));

    let err = solve4(1.0, 1.0, c, Sign::Pos, &SolveCfg::rejecting()).unwrap_err();
    assert!(matches!(err, SolveError::NoRealSolution { radicand } if radicand < 0.0));
    let err = solve4(1.0, 1.0, V2::ZERO, Sign::Pos, &SolveCfg::default());
    assert_eq!(err, Err(SolveError::ZeroLength(Slot::C)));
}

#[test]
fn case4_degenerate_triangle_is_tangent() {
    // |a| = |b| + |c|: collinear, single solution.
    let sol = solve4(3.0, 1.0, V2::new(2.0, 0.0), Sign::Neg, &SolveCfg::default()).unwrap();
    assert_eq!(sol.status, Status::Tangent);
    assert!(close(sol.a, V2::new(3.0, 0.0), 1e-12));
    assert!(close(sol.b, V2::new(1.0, 0.0), 1e-12));
}

#[test]
fn case5_right_triangle() {
    let cfg = SolveCfg::default();
    let c = V2::new(5.0, 0.0);
    let mut a = V2::ZERO;
    let mut b = V2::new(3.0, 0.0);
    let status = case5(&mut a, &mut b, c, Sign::Pos, &cfg).unwrap();
    assert_eq!(status, Status::Regular);
    assert!(close(a, V2::new(3.2, 2.4), 1e-12));
    assert!(close(b, V2::new(1.8, -2.4), 1e-12));
    assert!(a.dot(b).abs() < 1e-12);
    assert!((b.r() - 3.0).abs() < 1e-12);

    let neg = solve5(3.0, c, Sign::Neg, &cfg).unwrap();
    assert!(close(neg.a, V2::new(3.2, -2.4), 1e-12));
    assert!(close(neg.a + neg.b, c, 1e-12));
}

#[test]
fn case5_short_hypotenuse() {
    let c = V2::new(1.0, 1.0);
    let clamped = solve5(5.0, c, Sign::Pos, &SolveCfg::default()).unwrap();
    assert_eq!(clamped.status, Status::Clamped { radicand: -23.0 });
    assert_eq!(clamped.a, V2::ZERO);
    assert_eq!(clamped.b, c);
    assert_eq!(
        solve5(5.0, c, Sign::Pos, &SolveCfg::rejecting()),
        Err(SolveError::NoRealSolution { radicand: -23.0 })
    );
    assert_eq!(
        solve5(1.0, V2::ZERO, Sign::Pos, &SolveCfg::default()),
        Err(SolveError::ZeroLength(Slot::C))
    );
}

#[test]
fn small_inputs_keep_distinct_branches() {
    let cfg = SolveCfg::default();
    let c = V2::new(1e-4, 0.0);
    let pos = solve5(5e-5, c, Sign::Pos, &cfg).unwrap();
    let neg = solve5(5e-5, c, Sign::Neg, &cfg).unwrap();
    assert_eq!(pos.status, Status::Regular);
    assert!(close(pos.a, V2::new(7.5e-5, 4.330_127_018_922_193e-5), 1e-15));
    assert!(close(neg.a, V2::new(7.5e-5, -4.330_127_018_922_193e-5), 1e-15));
    assert!((pos.b.r() - 5e-5).abs() < 1e-15);
    assert_eq!(solve5(1e-4, c, Sign::Pos, &cfg).unwrap().status, Status::Tangent);

    let pos = solve2(V2::X_UNIT, 5e-5, V2::new(0.0, 1e-5), Sign::Pos, &cfg).unwrap();
    let neg = solve2(V2::X_UNIT, 5e-5, V2::new(0.0, 1e-5), Sign::Neg, &cfg).unwrap();
    assert_eq!(pos.status, Status::Regular);
    assert!(pos.a.x > 4.8e-5 && neg.a.x < -4.8e-5);
    assert!((neg.b.r() - 5e-5).abs() < 1e-15);
}

#[test]
fn large_tangent_inputs_are_not_rejected() {
    let cfg = SolveCfg::rejecting();
    for k in 0..200u32 {
        let w = -PI + 2.0 * PI * f64::from(k) / 200.0;
        let c = V2::from_polar(Polar::new(1e5, w));

        // |b| = |c|: a collapses to zero, b to c.
        for sign in [Sign::Pos, Sign::Neg] {
            let sol = solve5(c.r(), c, sign, &cfg).unwrap();
            assert_eq!(sol.status, Status::Tangent, "w = {w}");
            assert_eq!(sol.a.r(), 0.0);
            assert_eq!(sol.b, c);
        }

        // Circle around c touching the line along e_a.
        let e_a = V2::from_polar(Polar::new(1.0, 0.7 * w + 0.3));
        let r_b = 1e5 * (w - (0.7 * w + 0.3)).sin().abs();
        let pos = solve2(e_a, r_b, c, Sign::Pos, &cfg).unwrap();
        let neg = solve2(e_a, r_b, c, Sign::Neg, &cfg).unwrap();
        assert_eq!(pos.status, Status::Tangent, "w = {w}");
        assert_eq!(pos.a, neg.a);
        assert!(close(pos.a, e_a * dot(e_a, c), 1e-9));
    }
    // A clearly short circle is still out of reach.
    let err = solve2(V2::X_UNIT, 1e4, V2::new(0.0, 1e5), Sign::Pos, &cfg).unwrap_err();
    assert!(matches!(err, SolveError::NoRealSolution { radicand } if radicand < 0.0));
}

#[test]
fn default_sign_is_canonical_branch() {
    let cfg = SolveCfg::default();
    let c = V2::new(5.0, 0.0);
    assert_eq!(Sign::default(), Sign::Pos);
    assert_eq!(Sign::Pos.flip(), Sign::Neg);
    assert_eq!(f64::from(Sign::Neg), -1.0);
    for case in Case::ALL {
        let a = V2::new(4.0, 1.0);
        let b = V2::new(1.0, 3.0);
        let dflt = case.solve(a, b, c, Sign::default(), &cfg);
        let pos = case.solve(a, b, c, Sign::Pos, &cfg);
        assert_eq!(dflt, pos, "case {}", case.index());
    }
}

#[test]
fn case_index_and_metadata() {
    for (i, case) in Case::ALL.iter().enumerate() {
        assert_eq!(usize::from(case.index()), i + 1);
        assert_eq!(Case::from_index(case.index()), Some(*case));
        assert!(!case.reads().is_empty());
    }
    assert_eq!(Case::from_index(0), None);
    assert_eq!(Case::from_index(6), None);
    assert_eq!(Case::TwoDirections.relation(), "a + b = c");
    assert!(!Case::Sum.has_branches() && !Case::TwoDirections.has_branches());
    assert!(Case::RightAngle.has_branches());
}

#[test]
fn solve_from_keys() {
    let cfg = SolveCfg::default();
    let a = Keys {
        w: Some(0.0),
        ..Keys::default()
    };
    let b = Keys {
        r: Some(5.0),
        ..Keys::default()
    };
    let c = Keys::cartesian(3.0, 4.0);
    let sol = Case::LineCircle.solve_keys(&a, &b, &c, Sign::Pos, &cfg).unwrap();
    assert!(close(sol.a, V2::new(6.0, 0.0), 1e-12));
    assert!(close(sol.b, V2::new(3.0, -4.0), 1e-12));
}

#[test]
fn records_serialize_with_tags() {
    let v = serde_json::to_value(Status::Clamped { radicand: -1.0 }).unwrap();
    assert_eq!(v, serde_json::json!({"kind": "clamped", "radicand": -1.0}));
    let v = serde_json::to_value(solve1(V2::X_UNIT, V2::Y_UNIT)).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "a": {"x": 1.0, "y": 1.0},
            "b": {"x": 1.0, "y": 0.0},
            "status": {"kind": "regular"}
        })
    );
    let cfg: SolveCfg = serde_json::from_value(serde_json::json!({
        "eps_zero": 1e-9, "eps_parallel": 1e-9, "eps_radicand": 0.0, "radicand": "reject"
    }))
    .unwrap();
    assert_eq!(cfg.radicand, RadicandPolicy::Reject);
}

#[test]
fn error_messages() {
    assert_eq!(SolveError::ZeroLength(Slot::C).to_string(), "vector 'c' has zero length");
    assert!(SolveError::Parallel { perp: 0.0 }.to_string().contains("parallel"));
    assert!(SolveError::NoRealSolution { radicand: -2.0 }
        .to_string()
        .contains("-2.000e0"));
}

#[test]
fn random_line_circle_recovers_truth() {
    let cfg = strict_cfg();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let a = random_vec(&mut rng, 0.5, 5.0);
        let b = random_vec(&mut rng, 0.5, 5.0);
        let c = a - b;
        let mut hit = false;
        for sign in [Sign::Pos, Sign::Neg] {
            let sol = solve2(a * rng.gen_range(0.1..3.0), b.r(), c, sign, &cfg).unwrap();
            assert!(close(sol.a - sol.b, c, 1e-9));
            assert!((sol.b.r() - b.r()).abs() < 1e-9);
            assert!(perp(sol.a, a).abs() < 1e-9 * (1.0 + sol.a.r()));
            hit |= close(sol.a, a, 1e-6);
        }
        assert!(hit, "no branch reproduced a = {a}");
    }
}

#[test]
fn random_triangles_recover_truth() {
    let cfg = strict_cfg();
    let mut rng = StdRng::seed_from_u64(11);
    let mut checked = 0;
    while checked < 200 {
        let a = random_vec(&mut rng, 0.5, 5.0);
        let b = random_vec(&mut rng, 0.5, 5.0);
        let c = a - b;
        if c.r() < 0.5 {
            continue;
        }
        let mut hit = false;
        for sign in [Sign::Pos, Sign::Neg] {
            let sol = solve4(a.r(), b.r(), c, sign, &cfg).unwrap();
            assert!(close(sol.a - sol.b, c, 1e-9));
            assert!((sol.a.r() - a.r()).abs() < 1e-9);
            assert!((sol.b.r() - b.r()).abs() < 1e-9);
            hit |= close(sol.a, a, 1e-6) && close(sol.b, b, 1e-6);
        }
        assert!(hit, "no branch reproduced a = {a}, b = {b}");
        checked += 1;
    }
}

#[test]
fn random_right_triangles_recover_truth() {
    let cfg = strict_cfg();
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let a = random_vec(&mut rng, 0.5, 5.0);
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let b = tilde(a).unit() * (side * rng.gen_range(0.5..5.0));
        let c = a + b;
        let mut hit = false;
        for sign in [Sign::Pos, Sign::Neg] {
            let sol = solve5(b.r(), c, sign, &cfg).unwrap();
            assert!(close(sol.a + sol.b, c, 1e-9));
            assert!(sol.a.dot(sol.b).abs() < 1e-8);
            assert!((sol.b.r() - b.r()).abs() < 1e-9);
            hit |= close(sol.a, a, 1e-6);
        }
        assert!(hit, "no branch reproduced a = {a}");
    }
}

proptest! {
    #[test]
    fn prop_case3_closes_the_triangle(
        wa in -PI..PI, wb in -PI..PI,
        cx in -10.0f64..10.0, cy in -10.0f64..10.0,
    ) {
        let e_a = V2::from_polar(Polar::new(1.0, wa));
        let e_b = V2::from_polar(Polar::new(1.0, wb));
        prop_assume!(perp(e_a, e_b).abs() > 0.1);
        let c = V2::new(cx, cy);
        let sol = solve3(e_a, e_b, c, &SolveCfg::default()).unwrap();
        prop_assert!(close(sol.a + sol.b, c, 1e-9));
        prop_assert!(perp(sol.a, e_a).abs() < 1e-9);
        prop_assert!(perp(sol.b, e_b).abs() < 1e-9);
    }
}
