//! Raster sampling methods for georeferenced bands.
//!
//! Samples a band at continuous map coordinates through its georeference.
//! Every sampler is total: a query whose neighborhood falls outside the
//! band, or touches a NODATA cell, yields the NODATA sentinel instead of an
//! error.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: fastest, uses the nearest cell value (no interpolation)
//! - **Bilinear**: linear interpolation over the 2x2 neighborhood
//! - **Bicubic**: cubic convolution over the 4x4 neighborhood

mod bicubic;
mod bilinear;
mod nearest;

pub(crate) mod interpolate;

mod resample;

pub use interpolate::InterpolationMode;
pub use interpolate::{sample_geo, sample_grid};
pub use resample::resample_to;
