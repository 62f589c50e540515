use serde::{Deserialize, Serialize};

use crate::grid::GridSize;

/// Georeferencing metadata for an axis-aligned raster grid.
///
/// Converts between map coordinates (x, y) and fractional grid indices
/// (row, col). The origin is the top-left corner of the grid, resolutions
/// are the positive cell sizes in each axis, and y decreases with
/// increasing row (north-up convention):
///
/// ```text
/// col = (x - origin_x) / res_x - 0.5
/// row = (origin_y - y) / res_y - 0.5
/// ```
///
/// The half-cell offset places integer indices at cell centers, so index
/// (0, 0) is the midpoint of the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoReference {
    /// X coordinate of the top-left corner
    pub origin_x: f64,
    /// Y coordinate of the top-left corner
    pub origin_y: f64,
    /// Cell size in the X direction (positive)
    pub res_x: f64,
    /// Cell size in the Y direction (positive)
    pub res_y: f64,
}

impl GeoReference {
    /// Create a new georeference with the given origin and resolutions.
    pub fn new(origin_x: f64, origin_y: f64, res_x: f64, res_y: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            res_x,
            res_y,
        }
    }

    /// Convert map coordinates to fractional grid indices.
    ///
    /// Returns `(row, col)` where integer values fall on cell centers.
    pub fn geo_to_grid(&self, x: f64, y: f64) -> (f64, f64) {
        let col = (x - self.origin_x) / self.res_x - 0.5;
        let row = (self.origin_y - y) / self.res_y - 0.5;
        (row, col)
    }

    /// Convert grid indices to the map coordinates of the cell center.
    pub fn grid_to_geo(&self, row: f64, col: f64) -> (f64, f64) {
        let x = self.origin_x + (col + 0.5) * self.res_x;
        let y = self.origin_y - (row + 0.5) * self.res_y;
        (x, y)
    }

    /// Bounding box `(min_x, min_y, max_x, max_y)` of a grid with this
    /// georeference.
    pub fn bounds(&self, size: GridSize) -> (f64, f64, f64, f64) {
        let min_x = self.origin_x;
        let max_x = self.origin_x + size.width as f64 * self.res_x;
        let max_y = self.origin_y;
        let min_y = self.origin_y - size.height as f64 * self.res_y;
        (min_x, min_y, max_x, max_y)
    }
}

impl Default for GeoReference {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}
