//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Root-finding algorithm variants.
/// - [`Algorithm::Bisection`]  bracketing search by interval halving
/// - [`Algorithm::FixedPoint`] successive approximations `x_{n+1} = g(x_n)`
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Bisection,
    FixedPoint,
}

impl Algorithm {
    /// Algorithm names for the `algorithm_name` report field.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bisection  => "bisection",
            Algorithm::FixedPoint => "fixed_point",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
