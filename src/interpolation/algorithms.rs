//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]  global Lagrange polynomial interpolation
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Lagrange,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange => "lagrange",
        }
    }
}
