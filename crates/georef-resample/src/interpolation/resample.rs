use rayon::prelude::*;

use super::interpolate::{sample_geo, InterpolationMode};
use georef_grid::{GeoReference, RasterBand};

/// Fill a destination band by sampling a source band at every destination
/// cell center.
///
/// Destination cells whose sampling neighborhood falls outside the source
/// band, or touches a NODATA cell, receive the `nodata` sentinel. Rows are
/// processed in parallel; each cell is independent.
///
/// # Arguments
///
/// * `src` - The source band.
/// * `src_georef` - Georeference of the source band.
/// * `dst` - The destination band to fill.
/// * `dst_georef` - Georeference of the destination band.
/// * `nodata` - The sentinel marking invalid cells.
/// * `interpolation` - The interpolation mode to use.
pub fn resample_to(
    src: &RasterBand<f64>,
    src_georef: &GeoReference,
    dst: &mut RasterBand<f64>,
    dst_georef: &GeoReference,
    nodata: f64,
    interpolation: InterpolationMode,
) {
    let cols = dst.cols();
    let dst_georef = *dst_georef;

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            for (c, out) in dst_row.iter_mut().enumerate() {
                let (x, y) = dst_georef.grid_to_geo(r as f64, c as f64);
                *out = sample_geo(src, x, y, src_georef, nodata, interpolation);
            }
        });
}
