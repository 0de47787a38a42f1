//! Planar vector algebra and a closed-form solver for `a ± b = c`.
//!
//! Layout
//! - `vec2`: the `V2` value type, algebra, representation conversion, views.
//! - `solve`: the five case handlers with explicit branch and degeneracy policy.
//!
//! The crate is synchronous and allocation-free; every vector is a plain `Copy`
//! value and only the explicit `i*` methods and `caseN` handlers mutate.

pub mod api;
pub mod solve;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use solve::{Case, Sign, Solution, SolveCfg, SolveError, Status};
pub use vec2::{Affine2, Desc, Keys, Polar, View, V2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::solve::{
        case1, case2, case3, case4, case5, Case, RadicandPolicy, Sign, Solution, SolveCfg,
        SolveError, Status,
    };
    pub use crate::vec2::{dot, perp, tilde, Affine2, Desc, Keys, Polar, View, EPS, V2};
}
