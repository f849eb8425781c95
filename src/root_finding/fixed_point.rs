//! Fixed-point iteration (successive approximations).
//!
//! Solves `x = g(x)` by repeated application of `g`:
//! `x_{n+1} = g(x_n)` until `|x_{n+1} - x_n| < tol`.
//!
//! `g` is assumed to be a valid fixed-point map by the caller; there is
//! no contraction precondition. Divergence is bounded only by `max_iter`,
//! after which the last iterate is returned with `converged = false`.

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{IterateRecord, SolverReport, Termination};
use thiserror::Error;

const ALGORITHM: &str = Algorithm::FixedPoint.algorithm_name();

#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("invalid initial guess: x0 must be finite. got {x0}")]
    InvalidGuess { x0: f64 },
}

/// Iterates `x_{n+1} = g(x_n)` from `x0` until the step falls below `tol`.
///
/// # Arguments
/// ├ `g`   - The candidate fixed-point map.
/// ├ `x0`  - Initial guess. Must be finite.
/// └ `cfg` - [`SolverCfg`] with `tol` (default 1e-5) and `max_iter`
///           (default 100).
///
/// # Behavior
/// Records a 1-indexed [`IterateRecord`] `(index, x_new, |x_new - x_old|)`
/// per pass; relative and squared errors are not tracked by this method
/// and stay `None`. Stops when the absolute step drops below `tol`.
///
/// # Returns
/// [`SolverReport`] with `solution`, `residual = g(x*) - x*` (costing one
/// extra counted evaluation), counters, [`Termination`], the `converged`
/// flag, and the full history. Exhausting `max_iter` without meeting the
/// tolerance is a soft stop, not an error; callers distinguish the two
/// outcomes through `converged`.
///
/// # Errors
/// ┌ [`FixedPointError::InvalidGuess`] - `x0` is NaN or infinite.
/// │
/// The following are propagated via [`FixedPointError::Common`]:
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `g(x)` produced NaN/inf.
/// ├ [`RootFindingError::InvalidTol`]          - `cfg.tol` <= 0 or non-finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
pub fn fixed_point<G>(
    mut g: G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<SolverReport, FixedPointError>
where
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
    }

    let (tol, max_iter) = cfg.validate()?;

    // number of function evaluations
    let mut evals = 0;

    // closure function, checks finiteness
    let mut eval = |x: f64| -> Result<f64, FixedPointError> {
        let gx = { evals += 1; g(x) };
        if !gx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx: gx }.into())
        } else {
            Ok(gx)
        }
    };

    let mut history = Vec::new();
    let mut termination = Termination::IterationLimit;

    let mut x_old = x0;
    let mut x_new = x0;  // gets overwritten
    for index in 1..=max_iter {
        x_new = eval(x_old)?;

        let abs_err = (x_new - x_old).abs();
        history.push(IterateRecord {
            index,
            value: x_new,
            abs_err,
            rel_err: None,
            sq_err: None,
        });
        log::trace!("{{iter: {index}, x: {x_new}, abs_err: {abs_err}}}");

        if abs_err < tol {
            termination = Termination::ToleranceReached;
            break;
        }

        x_old = x_new;
    }

    let residual = eval(x_new)? - x_new;
    let converged = termination == Termination::ToleranceReached;
    log::debug!(
        "{{algorithm: \"{ALGORITHM}\", fixed_point: {x_new}, iterations: {}, evaluations: {evals}, converged: {converged}}}",
        history.len()
    );

    Ok(SolverReport {
        solution:       x_new,
        residual,
        iterations:     history.len(),
        evaluations:    evals,
        termination,
        converged,
        algorithm_name: ALGORITHM,
        history,
    })
}
