//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime and configuration errors
//! │   ├ non-finite function evaluation
//! │   └ invalid solver parameters (`tol`, `max_iter`)
//! │
//! ├ `BisectionError`  : lives in `root_finding::bisection`
//! └ `FixedPointError` : lives in `root_finding::fixed_point`

use thiserror::Error;

/// Errors shared by all root-finding algorithms.
///
/// Per-algorithm error enums wrap this via `#[error(transparent)]`.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
