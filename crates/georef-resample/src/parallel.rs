use rayon::prelude::*;

use georef_grid::{Grid, GridElement};

/// Apply a function to each cell of a grid in parallel, one row chunk at a
/// time.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Grid<T1, C1>,
    dst: &mut Grid<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: GridElement,
    T2: GridElement,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}
