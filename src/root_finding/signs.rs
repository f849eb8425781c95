//! Sign utilities for bracketing.
//! - `sign_change`    : `true` if `u * v < 0`, a strict sign change
//! - `no_sign_change` : `true` if `u * v > 0`, the bracket is unusable
//!
//! Both tests are product-based, so a zero endpoint value (the endpoint
//! already sits on a root) counts as neither: such brackets are accepted
//! and the interval update drifts toward the interior root.

/// Returns `true` if `u` and `v` strictly straddle zero.
#[inline]
pub(crate) fn sign_change(u: f64, v: f64) -> bool {
    u * v < 0.0
}

/// Returns `true` if `u` and `v` are both strictly on the same side of zero.
#[inline]
pub(crate) fn no_sign_change(u: f64, v: f64) -> bool {
    u * v > 0.0
}
