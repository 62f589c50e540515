#![deny(missing_docs)]
//! Raster grid containers and georeferencing metadata.

/// grid container for raster samples.
pub mod grid;

/// georeferencing between grid indices and map coordinates.
pub mod georeference;

/// Error types for the grid module.
pub mod error;

pub use crate::error::GridError;
pub use crate::georeference::GeoReference;
pub use crate::grid::{Grid, GridElement, GridSize, RasterBand};
