//! tests for Lagrange interpolation and the interpolant root search
use approx::assert_abs_diff_eq;
use numlab::interpolation::errors::InterpolationError;
use numlab::interpolation::lagrange::{interpolate, Lagrange, LagrangeCfg};
use numlab::interpolation::Interpolator;
use numlab::root_finding::bisection::BisectionError;
use numlab::root_finding::config::SolverCfg;

type TestResult = Result<(), InterpolationError>;

fn sample_cubic(x: f64) -> f64 {
    x.powi(3) - 6.0 * x.powi(2) + 11.0 * x - 6.0
}

#[test]
fn reproduces_every_node() -> TestResult {
    let x = [2.0, 2.5, 3.0];
    let y = [sample_cubic(x[0]), sample_cubic(x[1]), sample_cubic(x[2])];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let p   = Lagrange::new(cfg)?;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        assert_abs_diff_eq!(p.eval(xi), yi, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn quadratic_global_match() -> TestResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "lagrange");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_abs_diff_eq!(rep.evaluated[0], 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(rep.evaluated[1], 2.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn nodes_need_no_ordering() -> TestResult {
    // same parabola, nodes shuffled
    let x = [1.0, 3.0, 2.0];
    let y = [1.0, 9.0, 4.0];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let p   = Lagrange::new(cfg)?;

    assert_abs_diff_eq!(p.eval(1.5), 2.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn extrapolation_is_defined() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let p   = Lagrange::new(cfg)?;

    // a global polynomial has no domain edge
    assert_abs_diff_eq!(p.eval(3.0), 9.0, epsilon = 1e-12);
    assert_abs_diff_eq!(p.eval(-1.0), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn eval_many_matches_eval() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 4.0];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let p   = Lagrange::new(cfg)?;

    let xs = [0.25, 0.75, 1.25];
    let many = p.eval_many(&xs);
    for (&xq, &yq) in xs.iter().zip(many.iter()) {
        assert_eq!(p.eval(xq), yq);
    }
    Ok(())
}

#[test]
fn near_duplicate_x_error() {
    let x   = [0.0, 1e-13, 1.0];
    let err = LagrangeCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn non_adjacent_duplicate_detected() {
    // pairwise check catches duplicates regardless of position
    let x   = [0.0, 1.0, 0.0];
    let err = LagrangeCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { x1, x2 } if x1 == 0.0 && x2 == 0.0));
}

#[test]
fn custom_x_tol_widens_duplicate_detection() -> TestResult {
    let x   = [0.0, 5e-3, 1.0];
    let err = LagrangeCfg::new()
        .set_x_tol(1e-2)?
        .set_x(&x)
        .unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
    Ok(())
}

#[test]
fn invalid_x_tol_error() {
    let err = LagrangeCfg::new().set_x_tol(0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == 0.0));
}

#[test]
fn unequal_length_error() {
    let x   = [0.0, 1.0, 2.0];
    let y   = [0.0, 1.0];
    let cfg = LagrangeCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn empty_x_error() {
    let err = LagrangeCfg::new().set_x(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn insufficient_points_error() {
    let x   = [1.0];
    let err = LagrangeCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
}

#[test]
fn non_finite_input_error() {
    let x   = [0.0, 1.0, 2.0];
    let y   = [0.0, f64::NAN, 4.0];
    let cfg = LagrangeCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));
}

#[test]
fn missing_y_rejected_at_build() {
    let x   = [0.0, 1.0];
    let cfg = LagrangeCfg::new().set_x(&x).unwrap();
    let err = Lagrange::new(cfg).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn interpolant_root_near_three() -> TestResult {
    // concrete coursework scenario: the interpolant through the nodes of
    // x^3 - 6x^2 + 11x - 6 at {2, 2.5, 3} vanishes at 2 and 3, and the
    // bisection run over [2, 3] drifts to the root at 3
    let x = [2.0, 2.5, 3.0];
    let y = [sample_cubic(x[0]), sample_cubic(x[1]), sample_cubic(x[2])];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let p   = Lagrange::new(cfg)?;

    let res = p.root_in(2.0, 3.0, SolverCfg::new().with_tol(1e-6)).unwrap();

    assert!(res.converged);
    assert!((res.solution - 3.0).abs() < 1e-5);
    assert_eq!(res.algorithm_name, "bisection");
    // the richer error tracking is present in the embedded run
    assert!(res.history.iter().all(|r| r.sq_err.is_some()));
    Ok(())
}

#[test]
fn interpolant_without_sign_change_rejected() -> TestResult {
    // parabola x^2 + 1 is positive everywhere
    let x = [-1.0, 0.0, 1.0];
    let y = [2.0, 1.0, 2.0];

    let cfg = LagrangeCfg::new().set_x(&x)?.set_y(&y)?;
    let p   = Lagrange::new(cfg)?;

    let err = p.root_in(-1.0, 1.0, SolverCfg::new()).unwrap_err();
    assert!(matches!(err, BisectionError::InvalidBracket { a, b } if a == -1.0 && b == 1.0));
    Ok(())
}
