use georef_grid::{GeoReference, GridSize, RasterBand};
use georef_resample::interpolation::{sample_geo, InterpolationMode};

const NODATA: f64 = -9999.0;

/// 6x6 band over origin (0, 6) with unit cells; values are `10*row + col`.
fn band_6x6() -> (RasterBand<f64>, GeoReference) {
    let data = (0..36).map(|i| (10 * (i / 6) + i % 6) as f64).collect();
    let band = RasterBand::new(
        GridSize {
            width: 6,
            height: 6,
        },
        data,
    )
    .unwrap();
    (band, GeoReference::new(0.0, 6.0, 1.0, 1.0))
}

#[test]
fn all_methods_reproduce_cell_centers() {
    let (band, georef) = band_6x6();

    // center of cell (2, 3) in map coordinates
    let (x, y) = georef.grid_to_geo(2.0, 3.0);

    for mode in [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
    ] {
        let v = sample_geo(&band, x, y, &georef, NODATA, mode);
        assert!((v - 23.0).abs() < 1e-9, "{mode:?} returned {v}");
    }
}

#[test]
fn nodata_cell_poisons_neighborhoods() {
    let (mut band, georef) = band_6x6();
    // flag cell (2, 2)
    band.as_slice_mut()[2 * 6 + 2] = NODATA;

    let (x, y) = georef.grid_to_geo(2.4, 2.4);

    let v = sample_geo(&band, x, y, &georef, NODATA, InterpolationMode::Bilinear);
    assert_eq!(v, NODATA);

    let v = sample_geo(&band, x, y, &georef, NODATA, InterpolationMode::Bicubic);
    assert_eq!(v, NODATA);

    // nearest hits the flagged cell itself and reports the sentinel
    let v = sample_geo(&band, x, y, &georef, NODATA, InterpolationMode::Nearest);
    assert_eq!(v, NODATA);
}

#[test]
fn queries_off_the_grid_return_nodata() {
    let (band, georef) = band_6x6();

    for mode in [
        InterpolationMode::Nearest,
        InterpolationMode::Bilinear,
        InterpolationMode::Bicubic,
    ] {
        assert_eq!(sample_geo(&band, -2.0, 3.0, &georef, NODATA, mode), NODATA);
        assert_eq!(sample_geo(&band, 3.0, 8.0, &georef, NODATA, mode), NODATA);
        assert_eq!(sample_geo(&band, 99.0, -99.0, &georef, NODATA, mode), NODATA);
    }
}
