//! Defines the [`SolverReport`] struct returned by all
//! root-finding algorithms, and the per-iteration [`IterateRecord`].

/// Reasons a solver may terminate.
///
/// Reaching [`Termination::IterationLimit`] is a soft stop: the best
/// available estimate is still returned. Callers that need a hard
/// convergence guarantee check [`SolverReport::converged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ToleranceReached,
    IterationLimit,
}

/// One row of the convergence history, produced once per loop pass.
///
/// [`IterateRecord`]
/// ├ `index`   : 1-based iteration index
/// ├ `value`   : the iterate (midpoint `c` for bisection, `x_n` for
/// │             fixed point)
/// ├ `abs_err` : `|value - value_prev|`
/// ├ `rel_err` : `abs_err / |value|`; `None` when `value == 0` (the
/// │             quotient is undefined) or when the method does not
/// │             track it
/// └ `sq_err`  : `abs_err²`; `None` when the method does not track it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterateRecord {
    pub index:   usize,
    pub value:   f64,
    pub abs_err: f64,
    pub rel_err: Option<f64>,
    pub sq_err:  Option<f64>,
}

/// Final report returned by all root-finding algorithms.
///
/// [`SolverReport`]
/// ├ `solution`       : best root / fixed-point estimate
/// ├ `residual`       : `f(solution)` for bisection,
/// │                    `g(solution) - solution` for fixed point
/// ├ `iterations`     : total iterations (== `history.len()`)
/// ├ `evaluations`    : total function evaluations
/// ├ `termination`    : why the solver stopped ([`Termination`])
/// ├ `converged`      : `true` iff the tolerance was reached within
/// │                    `max_iter`; hitting the cap is not an error
/// ├ `algorithm_name` : e.g. `"bisection"`
/// └ `history`        : ordered per-iteration records, the artifact a
///                      console table or convergence plot consumes
#[derive(Debug, Clone)]
pub struct SolverReport {
    pub solution:       f64,
    pub residual:       f64,
    pub iterations:     usize,
    pub evaluations:    usize,
    pub termination:    Termination,
    pub converged:      bool,
    pub algorithm_name: &'static str,
    pub history:        Vec<IterateRecord>,
}

impl SolverReport {
    /// Iterate values in iteration order.
    pub fn iterates(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.value).collect()
    }

    /// Absolute errors in iteration order.
    pub fn abs_errors(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.abs_err).collect()
    }
}
