use serde::{Deserialize, Serialize};

use crate::error::AdjustError;
use crate::model::TransformMethod;

/// Squared distance below which two origin points count as coincident.
const COINCIDENCE_EPS_SQ: f64 = 1e-18;

/// Triangle area below which origin points count as collinear.
const COLLINEARITY_EPS: f64 = 1e-9;

/// A matched pair of points: one in the source system, one in the target
/// system.
///
/// A set of correspondences is the observation input for
/// [`crate::fit::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correspondence {
    /// The point in the source coordinate system.
    pub origin: [f64; 2],
    /// The matching point in the target coordinate system.
    pub destination: [f64; 2],
}

impl Correspondence {
    /// Create a new correspondence from an origin and a destination point.
    pub fn new(origin: [f64; 2], destination: [f64; 2]) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

impl From<([f64; 2], [f64; 2])> for Correspondence {
    fn from((origin, destination): ([f64; 2], [f64; 2])) -> Self {
        Self::new(origin, destination)
    }
}

/// Check that a correspondence set can constrain the chosen method.
///
/// Verifies the minimum observation count (1 for translation, 2 for
/// Helmert, 3 for affine), that no two origin points are coincident, and
/// for the affine method that the origin points are not all collinear.
///
/// # Errors
///
/// * [`AdjustError::InsufficientObservations`] when too few correspondences
///   are supplied.
/// * [`AdjustError::DegenerateGeometry`] when the origin points cannot
///   constrain the model.
pub fn validate_correspondences(
    correspondences: &[Correspondence],
    method: TransformMethod,
) -> Result<(), AdjustError> {
    let required = method.min_correspondences();
    if correspondences.len() < required {
        return Err(AdjustError::InsufficientObservations {
            method,
            required,
            actual: correspondences.len(),
        });
    }

    for (i, ci) in correspondences.iter().enumerate() {
        for cj in correspondences.iter().skip(i + 1) {
            let dx = ci.origin[0] - cj.origin[0];
            let dy = ci.origin[1] - cj.origin[1];
            if dx * dx + dy * dy < COINCIDENCE_EPS_SQ {
                return Err(AdjustError::DegenerateGeometry(
                    "coincident origin points",
                ));
            }
        }
    }

    if method == TransformMethod::Affine && all_collinear(correspondences) {
        return Err(AdjustError::DegenerateGeometry("collinear origin points"));
    }

    Ok(())
}

/// Whether every origin point lies on the line through the first two.
fn all_collinear(correspondences: &[Correspondence]) -> bool {
    let p0 = correspondences[0].origin;
    let p1 = correspondences[1].origin;

    correspondences.iter().skip(2).all(|c| {
        let p2 = c.origin;
        let area = (p1[0] - p0[0]) * (p2[1] - p0[1]) - (p1[1] - p0[1]) * (p2[0] - p0[0]);
        area.abs() < COLLINEARITY_EPS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_counts() {
        let one = vec![Correspondence::new([0.0, 0.0], [1.0, 1.0])];
        assert!(validate_correspondences(&one, TransformMethod::Translation).is_ok());

        let two = vec![
            Correspondence::new([0.0, 0.0], [1.0, 1.0]),
            Correspondence::new([1.0, 0.0], [2.0, 1.0]),
        ];
        assert!(validate_correspondences(&two, TransformMethod::Helmert).is_ok());

        let three = vec![
            Correspondence::new([0.0, 0.0], [1.0, 1.0]),
            Correspondence::new([1.0, 0.0], [2.0, 1.0]),
            Correspondence::new([0.0, 1.0], [1.0, 2.0]),
        ];
        assert!(validate_correspondences(&three, TransformMethod::Affine).is_ok());
    }

    #[test]
    fn rejects_too_few() {
        let two = vec![
            Correspondence::new([0.0, 0.0], [1.0, 1.0]),
            Correspondence::new([1.0, 0.0], [2.0, 1.0]),
        ];
        let err = validate_correspondences(&two, TransformMethod::Affine).unwrap_err();
        assert_eq!(
            err,
            AdjustError::InsufficientObservations {
                method: TransformMethod::Affine,
                required: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn rejects_coincident_origins() {
        let corrs = vec![
            Correspondence::new([1.0, 1.0], [0.0, 0.0]),
            Correspondence::new([1.0, 1.0], [5.0, 5.0]),
        ];
        let err = validate_correspondences(&corrs, TransformMethod::Helmert).unwrap_err();
        assert!(matches!(err, AdjustError::DegenerateGeometry(_)));
    }

    #[test]
    fn rejects_collinear_for_affine() {
        let corrs = vec![
            Correspondence::new([0.0, 0.0], [0.0, 0.0]),
            Correspondence::new([1.0, 1.0], [1.0, 1.0]),
            Correspondence::new([2.0, 2.0], [2.0, 2.0]),
            Correspondence::new([3.0, 3.0], [3.0, 3.0]),
        ];
        let err = validate_correspondences(&corrs, TransformMethod::Affine).unwrap_err();
        assert_eq!(err, AdjustError::DegenerateGeometry("collinear origin points"));
    }

    #[test]
    fn collinear_ok_for_helmert() {
        // two distinct points on a line fully determine a similarity
        let corrs = vec![
            Correspondence::new([0.0, 0.0], [0.0, 0.0]),
            Correspondence::new([1.0, 1.0], [2.0, 2.0]),
            Correspondence::new([2.0, 2.0], [4.0, 4.0]),
        ];
        assert!(validate_correspondences(&corrs, TransformMethod::Helmert).is_ok());
    }
}
