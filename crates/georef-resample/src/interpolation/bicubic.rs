use georef_grid::RasterBand;

/// Catmull-Rom cubic convolution basis.
///
/// The weight of neighbor `j` at fractional offset `t` is
/// `sum_k CUBIC_BASIS[k][j] * t^k`. The basis interpolates through its
/// samples: at `t = 0` the weights collapse to `[0, 1, 0, 0]`.
const CUBIC_BASIS: [[f64; 4]; 4] = [
    [0.0, 1.0, 0.0, 0.0],
    [-0.5, 0.0, 0.5, 0.0],
    [1.0, -2.5, 2.0, -0.5],
    [-0.5, 1.5, -1.5, 0.5],
];

fn cubic_weights(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;

    let mut weights = [0.0; 4];
    for (j, w) in weights.iter_mut().enumerate() {
        *w = CUBIC_BASIS[0][j]
            + CUBIC_BASIS[1][j] * t
            + CUBIC_BASIS[2][j] * t2
            + CUBIC_BASIS[3][j] * t3;
    }
    weights
}

/// Kernel for bicubic sampling.
///
/// Separable cubic convolution over the symmetric 4x4 neighborhood
/// `r0-1..=r0+2`, `c0-1..=c0+2` around the floor of the fractional indices.
/// Returns `None` when the neighborhood is not fully inside the band or
/// contains a `nodata` cell.
pub(crate) fn bicubic_sample(
    band: &RasterBand<f64>,
    row: f64,
    col: f64,
    nodata: f64,
) -> Option<f64> {
    let (rows, cols) = (band.rows(), band.cols());

    let r0f = row.floor();
    let c0f = col.floor();

    if !(r0f >= 1.0 && r0f + 2.0 < rows as f64 && c0f >= 1.0 && c0f + 2.0 < cols as f64) {
        return None;
    }

    let wr = cubic_weights(row - r0f);
    let wc = cubic_weights(col - c0f);

    let r0 = r0f as usize;
    let c0 = c0f as usize;
    let data = band.as_slice();

    let mut acc = 0.0;
    for (ki, wri) in wr.iter().enumerate() {
        let r = r0 + ki - 1;
        let mut row_acc = 0.0;
        for (kj, wcj) in wc.iter().enumerate() {
            let v = data[r * cols + c0 + kj - 1];
            if v == nodata {
                return None;
            }
            row_acc += wcj * v;
        }
        acc += wri * row_acc;
    }

    Some(acc)
}
