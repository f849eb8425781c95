//! The coursework scenarios, runnable end to end.
//!
//! Each function is one exercise with its parameters fixed: define the
//! target function, run the solver, return the report with its full
//! convergence history. This replaces the original script-level execution
//! with explicit calls a harness can make; rendering the history as a
//! table or chart is left to the caller.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::lagrange::{Lagrange, LagrangeCfg};
use crate::root_finding::bisection::{bisection, BisectionError};
use crate::root_finding::config::SolverCfg;
use crate::root_finding::fixed_point::{fixed_point, FixedPointError};
use crate::root_finding::report::SolverReport;
use thiserror::Error;

/// Failures of the interpolation exercise, which can fault in either
/// the interpolation stage or the embedded root search.
#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Bisection(#[from] BisectionError),
}

/// Bisection on the cubic `f(x) = x³ - 4x - 9` over `[2, 3]`.
///
/// Converges to the root near 2.7065.
pub fn bisect_cubic() -> Result<SolverReport, BisectionError> {
    let f = |x: f64| x.powi(3) - 4.0 * x - 9.0;
    bisection(f, 2.0, 3.0, SolverCfg::new())
}

/// Bisection on `f(x) = cos(x) - x` over `[0, 1]`.
///
/// Converges to the Dottie number, near 0.7391.
pub fn bisect_cosine() -> Result<SolverReport, BisectionError> {
    let f = |x: f64| x.cos() - x;
    bisection(f, 0.0, 1.0, SolverCfg::new())
}

/// Fixed-point iteration of `g(x) = cos(x)` from `x0 = 0.5`.
///
/// `g` rearranges `cos(x) - x = 0`; the iteration converges to the
/// Dottie number, near 0.7391.
pub fn fixed_point_cosine() -> Result<SolverReport, FixedPointError> {
    fixed_point(f64::cos, 0.5, SolverCfg::new())
}

/// Lagrange interpolation of `f(x) = x³ - 6x² + 11x - 6` through the
/// nodes `x = {2, 2.5, 3}`, then bisection of the interpolant on `[2, 3]`.
///
/// Both endpoints sit on roots of `f`, so the bracket product is zero
/// and iteration drifts to the interpolant root near 3.
pub fn interpolated_root() -> Result<SolverReport, ExerciseError> {
    let f = |x: f64| x.powi(3) - 6.0 * x.powi(2) + 11.0 * x - 6.0;

    let x = [2.0, 2.5, 3.0];
    let y = [f(x[0]), f(x[1]), f(x[2])];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let interpolant = Lagrange::new(cfg)?;

    let report = interpolant.root_in(2.0, 3.0, SolverCfg::new().with_tol(1e-6))?;
    Ok(report)
}
