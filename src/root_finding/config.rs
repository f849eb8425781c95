//! Shared configuration for root-finding algorithms.
//!
//! Provides [`SolverCfg`] with the convergence tolerance and iteration cap
//! used by every solver in this crate.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tol`      : convergence tolerance, applied to both the residual
//! │              `|f(c)|` and the step/error `|x_n - x_{n-1}|`
//! └ `max_iter` : hard iteration cap; reaching it is a soft stop, not an error
//!
//! # Validation
//! └ Occurs at solver entry via [`SolverCfg::validate`]:
//!    ├ `tol` > 0 and finite
//!    └ `max_iter` >= 1

use super::errors::RootFindingError;

pub const DEFAULT_TOL: f64 = 1e-5;
pub const DEFAULT_MAX_ITER: usize = 100;

#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    tol:      Option<f64>,
    max_iter: Option<usize>,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tol(mut self, v: f64) -> Self { self.tol = Some(v); self }
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = Some(v); self }

    #[inline] #[must_use] pub fn tol(&self) -> f64 { self.tol.unwrap_or(DEFAULT_TOL) }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter.unwrap_or(DEFAULT_MAX_ITER) }

    /// Checks tolerances and fills defaults.
    ///
    /// # Errors
    /// ├ [`RootFindingError::InvalidTol`]     - `tol` <= 0 or non-finite
    /// └ [`RootFindingError::InvalidMaxIter`] - `max_iter` == 0
    pub fn validate(&self) -> Result<(f64, usize), RootFindingError> {
        let tol = self.tol();
        if !(tol.is_finite() && tol > 0.0) {
            return Err(RootFindingError::InvalidTol { got: tol });
        }

        let max_iter = self.max_iter();
        if max_iter == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: 0 });
        }

        Ok((tol, max_iter))
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            tol:      Some(DEFAULT_TOL),
            max_iter: Some(DEFAULT_MAX_ITER),
        }
    }
}
