//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation via the classical
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(x) = Σᵢ yᵢ · Πⱼ≠ᵢ (x - xⱼ)/(xᵢ - xⱼ)
//! ```
//!
//! The interpolant is the unique degree-(n-1) polynomial through the n
//! nodes, and reproduces each node exactly: `P(xᵢ) = yᵢ`.
//!
//! A constructed [`Lagrange`] can also be handed to the bisection solver
//! through [`Lagrange::root_in`] to locate a root of the interpolant.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use crate::root_finding::bisection::{bisection, BisectionError};
use crate::root_finding::config::SolverCfg;
use crate::root_finding::report::SolverReport;

/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then the setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two nodes;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
///   Nodes closer than this are rejected as duplicates, since a repeated
///   node makes the basis denominators vanish.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl<'a> Default for LagrangeCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(LagrangeCfg<'a>);

/// A validated Lagrange interpolant borrowing its node data.
///
/// Read-only after construction; evaluation is infallible because the
/// node set is known to be distinct and finite.
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Lagrange<'a> {
    /// Builds the interpolant from a configured node set.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`]         - `x` or `y` never set.
    /// - [`InterpolationError::UnequalLength`]      - `x`/`y` length mismatch.
    /// - [`InterpolationError::InsufficientPoints`] - fewer than 2 nodes.
    ///
    /// Duplicate or non-finite nodes are rejected earlier, by the
    /// [`LagrangeCfg`] setters.
    pub fn new(cfg: LagrangeCfg<'a>) -> Result<Self, InterpolationError> {
        cfg.common.validate()?;
        Ok(Self {
            x: cfg.common.x(),
            y: cfg.common.y(),
        })
    }

    /// Number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.x.len()
    }

    /// Finds a root of the interpolant on `[a, b]` by bisection.
    ///
    /// This is the composition step of the coursework exercise: the
    /// interpolant becomes the target function of the bracketing solver.
    ///
    /// # Errors
    /// - [`BisectionError::InvalidBracket`] if the interpolant does not
    ///   change sign across `[a, b]`, plus the usual bisection failures.
    pub fn root_in(
        &self,
        a: f64,
        b: f64,
        cfg: SolverCfg,
    ) -> Result<SolverReport, BisectionError> {
        bisection(|x| self.eval(x), a, b, cfg)
    }
}

impl Interpolator for Lagrange<'_> {
    fn eval(&self, xq: f64) -> f64 {
        let n = self.x.len();
        let mut result = 0.0;
        for i in 0..n {
            let mut term = self.y[i];
            for j in 0..n {
                if i != j {
                    term *= (xq - self.x[j]) / (self.x[i] - self.x[j]);
                }
            }
            result += term;
        }
        result
    }
}

/// Performs Lagrange interpolation over the data in [`LagrangeCfg`].
///
/// # Behavior
/// Builds the interpolant and evaluates it at each point of
/// `cfg.common.x_eval()` with the classical basis formula. Evaluation
/// points may lie outside the node range; a global polynomial is defined
/// everywhere.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) nodes
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - The validation failures of [`Lagrange::new`].
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    let evals = cfg.common.x_eval();
    let interpolant = Lagrange::new(cfg)?;

    let n_provided  = interpolant.n_nodes();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        n_provided,
        n_evaluated,
    );
    report.evaluated.reserve(n_evaluated);

    for &xq in evals {
        report.evaluated.push(interpolant.eval(xq));
    }

    Ok(report)
}
