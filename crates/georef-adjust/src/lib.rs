#![deny(missing_docs)]
//! Least-squares 2D coordinate transformation estimation.
//!
//! Estimates a translation, Helmert (similarity) or affine transformation
//! from matched point pairs, by direct solve when the system is minimally
//! determined and by least squares when redundant observations exist, and
//! reports residuals and parameter precision.

/// matched point pairs and validation.
pub mod correspondence;

/// Error types for the adjustment module.
pub mod error;

/// design-matrix assembly and least-squares solve.
pub mod fit;

/// transformation models and their forward maps.
pub mod model;

/// adjustment summaries and report rendering.
pub mod report;

pub use crate::correspondence::{validate_correspondences, Correspondence};
pub use crate::error::AdjustError;
pub use crate::fit::fit;
pub use crate::model::{transform_points, TransformMethod, TransformModel};
pub use crate::report::{report_text, AdjustmentReport, ReportLanguage};
