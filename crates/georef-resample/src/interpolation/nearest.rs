use georef_grid::RasterBand;

/// Kernel for nearest neighbor sampling.
///
/// Rounds the fractional indices to the nearest cell and returns its value,
/// or `None` when the rounded cell is outside the band. A NODATA cell is
/// returned verbatim, which the caller maps to the sentinel.
pub(crate) fn nearest_sample(band: &RasterBand<f64>, row: f64, col: f64) -> Option<f64> {
    let (rows, cols) = (band.rows(), band.cols());

    let r = row.round();
    let c = col.round();

    if !(r >= 0.0 && r < rows as f64 && c >= 0.0 && c < cols as f64) {
        return None;
    }

    Some(band.as_slice()[r as usize * cols + c as usize])
}
