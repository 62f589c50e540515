use super::bicubic::bicubic_sample;
use super::bilinear::bilinear_sample;
use super::nearest::nearest_sample;
use georef_grid::{GeoReference, RasterBand};

/// Interpolation mode for raster sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    /// Nearest cell value.
    Nearest,
    /// Bilinear interpolation over the 2x2 neighborhood.
    Bilinear,
    /// Cubic convolution over the 4x4 neighborhood.
    Bicubic,
}

/// Sample a band at fractional grid indices.
///
/// Integer indices fall on cell centers. Out-of-bounds neighborhoods and
/// neighborhoods containing `nodata` yield `nodata`; the function never
/// fails. A NaN index yields `nodata` (the bounds comparisons fail closed).
///
/// # Arguments
///
/// * `band` - The band to sample.
/// * `row` - The fractional row index.
/// * `col` - The fractional column index.
/// * `nodata` - The sentinel marking invalid cells.
/// * `interpolation` - The interpolation mode to use.
pub fn sample_grid(
    band: &RasterBand<f64>,
    row: f64,
    col: f64,
    nodata: f64,
    interpolation: InterpolationMode,
) -> f64 {
    let value = match interpolation {
        InterpolationMode::Nearest => nearest_sample(band, row, col),
        InterpolationMode::Bilinear => bilinear_sample(band, row, col, nodata),
        InterpolationMode::Bicubic => bicubic_sample(band, row, col, nodata),
    };

    value.unwrap_or(nodata)
}

/// Sample a band at map coordinates.
///
/// Converts `(x, y)` to fractional grid indices through the georeference
/// and delegates to [`sample_grid`]; the same NODATA policy applies.
///
/// # Example
///
/// ```
/// use georef_grid::{GeoReference, GridSize, RasterBand};
/// use georef_resample::interpolation::{sample_geo, InterpolationMode};
///
/// let band = RasterBand::<f64>::new(
///     GridSize {
///         width: 2,
///         height: 2,
///     },
///     vec![1.0, 2.0, 3.0, 4.0],
/// )
/// .unwrap();
/// let georef = GeoReference::new(0.0, 10.0, 1.0, 1.0);
///
/// let v = sample_geo(&band, 0.5, 9.5, &georef, -9999.0, InterpolationMode::Nearest);
/// assert_eq!(v, 1.0);
/// ```
pub fn sample_geo(
    band: &RasterBand<f64>,
    x: f64,
    y: f64,
    georef: &GeoReference,
    nodata: f64,
    interpolation: InterpolationMode,
) -> f64 {
    let (row, col) = georef.geo_to_grid(x, y);
    sample_grid(band, row, col, nodata, interpolation)
}
