use serde::{Deserialize, Serialize};

/// The family of 2D transformations that can be estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformMethod {
    /// Translation only (2 parameters).
    Translation,
    /// Helmert / similarity transform: rotation, uniform scale and
    /// translation (4 parameters).
    Helmert,
    /// Full affine transform: 2x2 linear map and translation
    /// (6 parameters).
    Affine,
}

impl TransformMethod {
    /// The minimum number of correspondences needed to determine the model.
    pub fn min_correspondences(&self) -> usize {
        match self {
            TransformMethod::Translation => 1,
            TransformMethod::Helmert => 2,
            TransformMethod::Affine => 3,
        }
    }

    /// The number of parameters the model estimates.
    pub fn num_params(&self) -> usize {
        match self {
            TransformMethod::Translation => 2,
            TransformMethod::Helmert => 4,
            TransformMethod::Affine => 6,
        }
    }
}

impl std::fmt::Display for TransformMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TransformMethod::Translation => write!(f, "translation"),
            TransformMethod::Helmert => write!(f, "helmert"),
            TransformMethod::Affine => write!(f, "affine"),
        }
    }
}

/// A fitted 2D transformation.
///
/// Each variant holds the parameters estimated by [`crate::fit::fit`] in its
/// linear form. The Helmert variant stores the linear coefficients
/// `a = s*cos(theta)` and `b = s*sin(theta)`; scale and rotation are derived
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransformModel {
    /// `x' = x + tx`, `y' = y + ty`.
    Translation {
        /// Shift in x.
        tx: f64,
        /// Shift in y.
        ty: f64,
    },
    /// `x' = a*x - b*y + tx`, `y' = b*x + a*y + ty`.
    Helmert {
        /// Linear coefficient `s*cos(theta)`.
        a: f64,
        /// Linear coefficient `s*sin(theta)`.
        b: f64,
        /// Shift in x.
        tx: f64,
        /// Shift in y.
        ty: f64,
    },
    /// `x' = m[0][0]*x + m[0][1]*y + m[0][2]`,
    /// `y' = m[1][0]*x + m[1][1]*y + m[1][2]`.
    Affine {
        /// The 2x3 coefficient matrix, row-major.
        coeffs: [[f64; 3]; 2],
    },
}

impl TransformModel {
    /// The method this model belongs to.
    pub fn method(&self) -> TransformMethod {
        match self {
            TransformModel::Translation { .. } => TransformMethod::Translation,
            TransformModel::Helmert { .. } => TransformMethod::Helmert,
            TransformModel::Affine { .. } => TransformMethod::Affine,
        }
    }

    /// The estimated parameters, flattened in design-matrix order.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            TransformModel::Translation { tx, ty } => vec![tx, ty],
            TransformModel::Helmert { a, b, tx, ty } => vec![a, b, tx, ty],
            TransformModel::Affine { coeffs } => vec![
                coeffs[0][0],
                coeffs[0][1],
                coeffs[0][2],
                coeffs[1][0],
                coeffs[1][1],
                coeffs[1][2],
            ],
        }
    }

    /// The uniform scale factor of a Helmert model, `hypot(a, b)`.
    ///
    /// Returns `None` for other variants.
    pub fn scale(&self) -> Option<f64> {
        match self {
            TransformModel::Helmert { a, b, .. } => Some(a.hypot(*b)),
            _ => None,
        }
    }

    /// The rotation angle of a Helmert model in radians, `atan2(b, a)`.
    ///
    /// Returns `None` for other variants.
    pub fn rotation(&self) -> Option<f64> {
        match self {
            TransformModel::Helmert { a, b, .. } => Some(b.atan2(*a)),
            _ => None,
        }
    }

    /// Map a point through the forward transform.
    ///
    /// Total over finite coordinates; non-finite inputs propagate through
    /// the arithmetic.
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        let [x, y] = point;
        match *self {
            TransformModel::Translation { tx, ty } => [x + tx, y + ty],
            TransformModel::Helmert { a, b, tx, ty } => [a * x - b * y + tx, b * x + a * y + ty],
            TransformModel::Affine { coeffs } => [
                coeffs[0][0] * x + coeffs[0][1] * y + coeffs[0][2],
                coeffs[1][0] * x + coeffs[1][1] * y + coeffs[1][2],
            ],
        }
    }
}

/// Transform a set of points through a fitted model.
///
/// # Arguments
///
/// * `model` - The fitted transformation.
/// * `src_points` - The points to transform.
/// * `dst_points` - A pre-allocated slice to store the transformed points.
///
/// PRECONDITION: `dst_points` has the same length as `src_points`.
///
/// Example:
///
/// ```
/// use georef_adjust::{transform_points, TransformModel};
///
/// let model = TransformModel::Translation { tx: 1.0, ty: -1.0 };
/// let src_points = vec![[0.0, 0.0], [2.0, 3.0]];
/// let mut dst_points = vec![[0.0; 2]; src_points.len()];
/// transform_points(&model, &src_points, &mut dst_points);
///
/// assert_eq!(dst_points, vec![[1.0, -1.0], [3.0, 2.0]]);
/// ```
pub fn transform_points(
    model: &TransformModel,
    src_points: &[[f64; 2]],
    dst_points: &mut [[f64; 2]],
) {
    assert_eq!(src_points.len(), dst_points.len());

    for (src, dst) in src_points.iter().zip(dst_points.iter_mut()) {
        *dst = model.apply(*src);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn method_sizes() {
        assert_eq!(TransformMethod::Translation.min_correspondences(), 1);
        assert_eq!(TransformMethod::Helmert.min_correspondences(), 2);
        assert_eq!(TransformMethod::Affine.min_correspondences(), 3);
        assert_eq!(TransformMethod::Translation.num_params(), 2);
        assert_eq!(TransformMethod::Helmert.num_params(), 4);
        assert_eq!(TransformMethod::Affine.num_params(), 6);
    }

    #[test]
    fn helmert_scale_rotation() {
        // pure rotation by 90 degrees with scale 2
        let model = TransformModel::Helmert {
            a: 0.0,
            b: 2.0,
            tx: 0.0,
            ty: 0.0,
        };

        assert_relative_eq!(model.scale().unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            model.rotation().unwrap(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );

        let p = model.apply([1.0, 0.0]);
        assert_relative_eq!(p[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(p[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn affine_apply() {
        let model = TransformModel::Affine {
            coeffs: [[2.0, 0.0, 1.0], [0.0, 3.0, -1.0]],
        };
        assert_eq!(model.apply([1.0, 1.0]), [3.0, 2.0]);
    }

    #[test]
    fn transform_points_identity() {
        let model = TransformModel::Affine {
            coeffs: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        };
        let src = vec![[2.0, 2.0], [3.0, 4.0]];
        let mut dst = vec![[0.0; 2]; src.len()];
        transform_points(&model, &src, &mut dst);
        assert_eq!(dst, src);
    }
}
