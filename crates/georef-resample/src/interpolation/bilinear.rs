use georef_grid::RasterBand;

/// Kernel for bilinear sampling.
///
/// Interpolates over the 2x2 neighborhood at the floor of the fractional
/// indices, weighted by the fractional offsets. Returns `None` when the
/// neighborhood is not fully inside the band or contains a `nodata` cell.
pub(crate) fn bilinear_sample(
    band: &RasterBand<f64>,
    row: f64,
    col: f64,
    nodata: f64,
) -> Option<f64> {
    let (rows, cols) = (band.rows(), band.cols());

    let r0f = row.floor();
    let c0f = col.floor();

    if !(r0f >= 0.0 && r0f + 1.0 < rows as f64 && c0f >= 0.0 && c0f + 1.0 < cols as f64) {
        return None;
    }

    let dr = row - r0f;
    let dc = col - c0f;

    let r0 = r0f as usize;
    let c0 = c0f as usize;

    let data = band.as_slice();
    let p00 = data[r0 * cols + c0];
    let p01 = data[r0 * cols + c0 + 1];
    let p10 = data[(r0 + 1) * cols + c0];
    let p11 = data[(r0 + 1) * cols + c0 + 1];

    if p00 == nodata || p01 == nodata || p10 == nodata || p11 == nodata {
        return None;
    }

    Some(
        p00 * (1.0 - dr) * (1.0 - dc)
            + p01 * (1.0 - dr) * dc
            + p10 * dr * (1.0 - dc)
            + p11 * dr * dc,
    )
}
