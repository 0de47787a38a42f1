//! Tolerance defaults for 2D vectors.
//!
//! Policy
//! - One epsilon for every tolerance-based predicate (`is_zero`, `is_unit`,
//!   `is_equal`) and for the degenerate `unit`/`invert` cutoff.
//! - Callers that need a different threshold use the explicit `near_*`
//!   predicates or `solve::SolveCfg`.

/// Square root of the machine epsilon (≈1.49e-8).
///
/// Lengths at or below this are treated as zero; coordinate differences
/// below it compare equal.
pub const EPS: f64 = 1.490_116_119_384_765_6e-8;
