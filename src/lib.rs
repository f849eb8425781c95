//! Classical numerical-analysis methods.
//!
//! Implements the iterative solvers from a numerical-methods course:
//! - [`root_finding::bisection()`]   : bracketing root search by interval halving
//! - [`root_finding::fixed_point()`] : successive approximations for `x = g(x)`
//! - [`interpolation::lagrange`]     : global Lagrange polynomial interpolation,
//!   composable with bisection to locate roots of the interpolant
//!
//! Every solver run is a one-shot, side-effect-free computation: it consumes
//! a function, a starting bracket or guess, and a [`root_finding::config::SolverCfg`],
//! and returns a [`root_finding::report::SolverReport`] carrying the full
//! per-iteration convergence history for downstream reporting or plotting.
//!
//! The [`exercises`] module runs the fixed coursework scenarios end to end.

pub mod root_finding;
pub mod interpolation;
pub mod exercises;
