use crate::parallel;
use georef_grid::{Grid, GridError};

/// Convert an RGB stack to HSV.
///
/// The input is assumed to have 3 channels in the order R, G, B with values
/// in the range [0, 255].
///
/// # Arguments
///
/// * `src` - The input RGB stack.
/// * `dst` - The output HSV stack.
///
/// # Returns
///
/// The HSV stack with the following channels:
///
/// * H: hue in degrees, in the range [0, 360). 0 for achromatic pixels.
/// * S: saturation in the range [0, 1].
/// * V: value in the range [0, 1].
///
/// # Errors
///
/// Returns an error when the input and output sizes differ.
///
/// # Example
///
/// ```
/// use georef_grid::{Grid, GridSize};
/// use georef_resample::color::hsv_from_rgb;
///
/// let rgb = Grid::<f32, 3>::new(
///     GridSize {
///         width: 1,
///         height: 1,
///     },
///     vec![255.0, 0.0, 0.0],
/// )
/// .unwrap();
///
/// let mut hsv = Grid::<f32, 3>::from_size_val(rgb.size(), 0.0).unwrap();
/// hsv_from_rgb(&rgb, &mut hsv).unwrap();
///
/// assert_eq!(hsv.as_slice(), &[0.0, 1.0, 1.0]);
/// ```
pub fn hsv_from_rgb(src: &Grid<f32, 3>, dst: &mut Grid<f32, 3>) -> Result<(), GridError> {
    if src.size() != dst.size() {
        return Err(GridError::InvalidGridSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        // normalize the input to the range [0, 1]
        let r = src_pixel[0] / 255.0;
        let g = src_pixel[1] / 255.0;
        let b = src_pixel[2] / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        // wrap negative angles into [0, 360)
        let h = if h < 0.0 { h + 360.0 } else { h };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        dst_pixel[0] = h;
        dst_pixel[1] = s;
        dst_pixel[2] = max;
    });

    Ok(())
}

/// Convert an HSV stack back to RGB.
///
/// The inverse of [`hsv_from_rgb`]: H in degrees [0, 360), S and V in
/// [0, 1], output channels in [0, 255]. The round trip is exact up to
/// floating rounding away from the achromatic singularities (S = 0 or
/// V = 0, where hue carries no information).
///
/// # Errors
///
/// Returns an error when the input and output sizes differ.
pub fn rgb_from_hsv(src: &Grid<f32, 3>, dst: &mut Grid<f32, 3>) -> Result<(), GridError> {
    if src.size() != dst.size() {
        return Err(GridError::InvalidGridSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let h = src_pixel[0];
        let s = src_pixel[1];
        let v = src_pixel[2];

        let sector = h / 60.0;
        let hi = (sector.floor() as i32).rem_euclid(6) as usize;
        let f = sector - sector.floor();

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match hi {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        dst_pixel[0] = r * 255.0;
        dst_pixel[1] = g * 255.0;
        dst_pixel[2] = b * 255.0;
    });

    Ok(())
}
