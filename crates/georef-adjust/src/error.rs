use crate::model::TransformMethod;

/// An error type for the adjustment module.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AdjustError {
    /// Error when fewer correspondences are supplied than the method needs.
    #[error("{method} requires at least {required} correspondences, got {actual}")]
    InsufficientObservations {
        /// The requested transformation method.
        method: TransformMethod,
        /// The minimum number of correspondences for the method.
        required: usize,
        /// The number of correspondences supplied.
        actual: usize,
    },

    /// Error when the correspondence geometry cannot constrain the model.
    #[error("degenerate correspondence geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// Error when the normal equations cannot be inverted.
    #[error("singular system of normal equations")]
    SingularSystem,
}
