use faer::prelude::{SpSolver, SpSolverLstsq};

use crate::correspondence::{validate_correspondences, Correspondence};
use crate::error::AdjustError;
use crate::model::{TransformMethod, TransformModel};
use crate::report::AdjustmentReport;

/// Estimate a transformation from a set of correspondences.
///
/// Builds the design matrix for the chosen method (two equations per
/// correspondence) and solves it by QR least squares. When the number of
/// equations equals the number of parameters the solve is exact; with
/// redundant observations the solution minimizes the squared residual norm
/// and the report additionally carries the a-posteriori variance factor and
/// the parameter covariance `sigma0^2 * (A^T A)^-1`.
///
/// # Arguments
///
/// * `correspondences` - The matched point pairs.
/// * `method` - The transformation family to estimate.
///
/// # Errors
///
/// * [`AdjustError::InsufficientObservations`] and
///   [`AdjustError::DegenerateGeometry`] as reported by
///   [`validate_correspondences`].
/// * [`AdjustError::SingularSystem`] when the normal equations cannot be
///   solved.
///
/// # Example
///
/// ```
/// use georef_adjust::{fit, Correspondence, TransformMethod, TransformModel};
///
/// let corrs = vec![
///     Correspondence::new([0.0, 0.0], [10.0, 20.0]),
///     Correspondence::new([1.0, 0.0], [11.0, 20.0]),
/// ];
///
/// let (model, report) = fit(&corrs, TransformMethod::Translation).unwrap();
///
/// assert!(matches!(model, TransformModel::Translation { .. }));
/// assert!(report.rms < 1e-9);
/// ```
pub fn fit(
    correspondences: &[Correspondence],
    method: TransformMethod,
) -> Result<(TransformModel, AdjustmentReport), AdjustError> {
    validate_correspondences(correspondences, method)?;

    let n_eq = 2 * correspondences.len();
    let m = method.num_params();

    let (mat_a, mat_b) = build_system(correspondences, method, n_eq, m);

    let params = mat_a.qr().solve_lstsq(mat_b);
    let p_col = params.col(0);
    let p = (0..m).map(|i| p_col[i]).collect::<Vec<f64>>();
    if p.iter().any(|v| !v.is_finite()) {
        return Err(AdjustError::SingularSystem);
    }

    let model = model_from_params(method, &p);

    // residuals r = A*p - b, evaluated through the forward map
    let mut sum_sq = 0.0;
    let residuals = correspondences
        .iter()
        .map(|c| {
            let mapped = model.apply(c.origin);
            let r = [mapped[0] - c.destination[0], mapped[1] - c.destination[1]];
            sum_sq += r[0] * r[0] + r[1] * r[1];
            r
        })
        .collect::<Vec<_>>();

    let rms = (sum_sq / n_eq as f64).sqrt();
    let degrees_of_freedom = n_eq - m;

    let (sigma0_sq, covariance) = if degrees_of_freedom > 0 {
        let sigma0_sq = sum_sq / degrees_of_freedom as f64;

        // normal matrix N = A^T A, inverted by LU solve against the identity
        let mut ata = faer::Mat::<f64>::zeros(m, m);
        faer::linalg::matmul::matmul(
            ata.as_mut(),
            mat_a.as_ref().transpose(),
            mat_a.as_ref(),
            None,
            1.0,
            faer::Parallelism::None,
        );
        let inv = ata.partial_piv_lu().solve(faer::Mat::<f64>::identity(m, m));

        let mut covariance = Vec::with_capacity(m * m);
        for i in 0..m {
            for j in 0..m {
                let q = inv.read(i, j);
                if !q.is_finite() {
                    return Err(AdjustError::SingularSystem);
                }
                covariance.push(sigma0_sq * q);
            }
        }

        (Some(sigma0_sq), Some(covariance))
    } else {
        (None, None)
    };

    let report = AdjustmentReport {
        residuals,
        rms,
        degrees_of_freedom,
        num_params: m,
        sigma0_sq,
        covariance,
    };

    Ok((model, report))
}

/// Assemble the design matrix and observation vector for a method.
///
/// Each correspondence contributes one row for x and one for y:
///
/// * translation: `[1, 0] . [tx, ty] = x' - x`
/// * helmert:     `[x, -y, 1, 0] . [a, b, tx, ty] = x'`
/// * affine:      `[x, y, 1, 0, 0, 0] . [a, b, tx, d, e, ty] = x'`
fn build_system(
    correspondences: &[Correspondence],
    method: TransformMethod,
    n_eq: usize,
    m: usize,
) -> (faer::Mat<f64>, faer::Mat<f64>) {
    let mut mat_a = faer::Mat::<f64>::zeros(n_eq, m);
    let mut mat_b = faer::Mat::<f64>::zeros(n_eq, 1);

    for (i, c) in correspondences.iter().enumerate() {
        let [x, y] = c.origin;
        let [xd, yd] = c.destination;
        let (rx, ry) = (2 * i, 2 * i + 1);

        match method {
            TransformMethod::Translation => {
                mat_a.write(rx, 0, 1.0);
                mat_a.write(ry, 1, 1.0);
                mat_b.write(rx, 0, xd - x);
                mat_b.write(ry, 0, yd - y);
            }
            TransformMethod::Helmert => {
                mat_a.write(rx, 0, x);
                mat_a.write(rx, 1, -y);
                mat_a.write(rx, 2, 1.0);
                mat_a.write(ry, 0, y);
                mat_a.write(ry, 1, x);
                mat_a.write(ry, 3, 1.0);
                mat_b.write(rx, 0, xd);
                mat_b.write(ry, 0, yd);
            }
            TransformMethod::Affine => {
                mat_a.write(rx, 0, x);
                mat_a.write(rx, 1, y);
                mat_a.write(rx, 2, 1.0);
                mat_a.write(ry, 3, x);
                mat_a.write(ry, 4, y);
                mat_a.write(ry, 5, 1.0);
                mat_b.write(rx, 0, xd);
                mat_b.write(ry, 0, yd);
            }
        }
    }

    (mat_a, mat_b)
}

fn model_from_params(method: TransformMethod, p: &[f64]) -> TransformModel {
    match method {
        TransformMethod::Translation => TransformModel::Translation { tx: p[0], ty: p[1] },
        TransformMethod::Helmert => TransformModel::Helmert {
            a: p[0],
            b: p[1],
            tx: p[2],
            ty: p[3],
        },
        TransformMethod::Affine => TransformModel::Affine {
            coeffs: [[p[0], p[1], p[2]], [p[3], p[4], p[5]]],
        },
    }
}
