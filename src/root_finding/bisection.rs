//! Bisection root-finding.
//!
//! Implements the classical
//! [bisection method](https://en.wikipedia.org/wiki/Bisection_method):
//! repeated halving of a sign-changing bracket, recording the full
//! per-iteration convergence history.

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{IterateRecord, SolverReport, Termination};
use super::signs::{no_sign_change, sign_change};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::Bisection.algorithm_name();

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{a}, {b}]: f(a) * f(b) > 0")]
    InvalidBracket { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}

/// Calculates the midpoint of [a, b].
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}

/// Finds a root of `func` on the bracket `[a, b]` by bisection.
///
/// Assumes `func` is continuous on `[a, b]` and that `func(a)` and
/// `func(b)` do not share a strict sign, so the bracket contains a root.
/// A zero endpoint value is accepted: the product test treats it as a
/// usable bracket and iteration drifts toward the interior root.
///
/// # Arguments
/// ├ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search bracket. Finite, less than `b`.
/// ├ `b`    - Upper bound of the search bracket. Finite, greater than `a`.
/// └ `cfg`  - [`SolverCfg`] with `tol` (default 1e-5) and `max_iter`
///            (default 100).
///
/// # Behavior
/// Each pass computes the midpoint `c`, records an [`IterateRecord`]
/// (value, `|c - c_prev|`, relative and squared errors), and stops when
/// `|f(c)| < tol` or `|c - c_prev| < tol`. Otherwise the half preserving
/// the sign change survives: `f(a)·f(c) < 0` keeps `[a, c]`, else `[c, b]`.
/// The first pass measures its error against `a`.
///
/// The relative error is `None` when `c == 0` rather than a substituted
/// zero, so degenerate quotients stay visible to the caller.
///
/// # Returns
/// [`SolverReport`] with `solution`, `residual = f(solution)`, counters,
/// [`Termination`], the explicit `converged` flag, and the full history.
/// Exhausting `max_iter` is a soft stop: the best estimate is returned
/// with `converged = false`, never an error.
///
/// # Errors
/// ┌ [`BisectionError::InvalidBounds`]  - `a` or `b` is NaN/inf, or `a >= b`.
/// ├ [`BisectionError::InvalidBracket`] - `func(a) * func(b) > 0`; raised
/// │                                      before any iteration executes.
/// │
/// The following are propagated via [`BisectionError::Common`]:
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
/// ├ [`RootFindingError::InvalidTol`]          - `cfg.tol` <= 0 or non-finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<SolverReport, BisectionError>
where
    F: FnMut(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let (tol, max_iter) = cfg.validate()?;

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let fx = { evals += 1; func(x) };
        if !fx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx }.into())
        } else {
            Ok(fx)
        }
    };

    let mut fa = eval(a)?;
    let fb = eval(b)?;
    if no_sign_change(fa, fb) {
        return Err(BisectionError::InvalidBracket { a, b });
    }

    let mut history = Vec::new();
    let mut termination = Termination::IterationLimit;

    let mut c_prev = a;
    let mut c  = a;   // gets overwritten
    let mut fc = fa;  // gets overwritten
    for index in 1..=max_iter {
        c  = midpoint(a, b);
        fc = eval(c)?;

        let abs_err = (c - c_prev).abs();
        let rel_err = if c != 0.0 { Some(abs_err / c.abs()) } else { None };
        history.push(IterateRecord {
            index,
            value: c,
            abs_err,
            rel_err,
            sq_err: Some(abs_err * abs_err),
        });
        log::trace!("{{iter: {index}, c: {c}, f_c: {fc}, abs_err: {abs_err}}}");

        if fc.abs() < tol || abs_err < tol {
            termination = Termination::ToleranceReached;
            break;
        }

        // shrink whichever half preserves the sign change
        if sign_change(fa, fc) {
            b = c;
        } else {
            a = c;
            fa = fc;
        }

        c_prev = c;
    }

    let converged = termination == Termination::ToleranceReached;
    log::debug!(
        "{{algorithm: \"{ALGORITHM}\", root: {c}, iterations: {}, evaluations: {evals}, converged: {converged}}}",
        history.len()
    );

    Ok(SolverReport {
        solution:       c,
        residual:       fc,
        iterations:     history.len(),
        evaluations:    evals,
        termination,
        converged,
        algorithm_name: ALGORITHM,
        history,
    })
}
