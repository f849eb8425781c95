pub trait Interpolator {
    /// Evaluates the interpolant at a single point.
    ///
    /// Infallible: a constructed interpolant is defined everywhere, and
    /// its divisions are by node differences proven nonzero at build time.
    fn eval(&self, x: f64) -> f64;

    /// Evaluates many points.
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
