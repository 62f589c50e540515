use crate::error::GridError;

/// Grid size in cells
///
/// A struct to represent the size of a grid in cells.
///
/// # Examples
///
/// ```
/// use georef_grid::GridSize;
///
/// let grid_size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(grid_size.width, 10);
/// assert_eq!(grid_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Width of the grid in cells (columns)
    pub width: usize,
    /// Height of the grid in cells (rows)
    pub height: usize,
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for types that can be stored as grid samples.
///
/// Send and Sync are required for row-parallel iteration.
pub trait GridElement:
    Copy + Default + PartialEq + PartialOrd + Send + Sync + num_traits::NumCast + 'static
{
}

impl GridElement for u8 {}
impl GridElement for u16 {}
impl GridElement for i16 {}
impl GridElement for u32 {}
impl GridElement for i32 {}
impl GridElement for i64 {}
impl GridElement for f32 {}
impl GridElement for f64 {}

/// Represents a raster grid with interleaved channel data.
///
/// The grid is stored row-major with shape (H, W, C), where H is the number
/// of rows, W the number of columns and C the number of channels. A single
/// raster band is `Grid<T, 1>`, an RGB stack is `Grid<T, 3>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, const C: usize>
where
    T: GridElement,
{
    data: Vec<T>,
    size: GridSize,
}

/// A single-band raster grid.
pub type RasterBand<T> = Grid<T, 1>;

impl<T, const C: usize> Grid<T, C>
where
    T: GridElement,
{
    /// Create a new grid from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in cells.
    /// * `data` - The sample data, row-major with interleaved channels.
    ///
    /// # Errors
    ///
    /// If the length of the data does not match the grid size, an error is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use georef_grid::{Grid, GridSize};
    ///
    /// let grid = Grid::<f64, 1>::new(
    ///     GridSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0f64; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.size().width, 10);
    /// assert_eq!(grid.size().height, 20);
    /// assert_eq!(grid.num_channels(), 1);
    /// ```
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != size.width * size.height * C {
            return Err(GridError::InvalidDataLength(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { data, size })
    }

    /// Create a new grid with the given size, filled with a value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in cells.
    /// * `val` - The value every sample is initialized to.
    pub fn from_size_val(size: GridSize, val: T) -> Result<Self, GridError> {
        let data = vec![val; size.width * size.height * C];
        Self::new(size, data)
    }

    /// Cast the samples of the grid to a different type.
    ///
    /// # Errors
    ///
    /// If a sample cannot be represented in the target type, an error is
    /// returned.
    pub fn cast<U>(&self) -> Result<Grid<U, C>, GridError>
    where
        U: GridElement,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(GridError::CastError))
            .collect::<Result<Vec<U>, GridError>>()?;

        Grid::new(self.size, casted_data)
    }

    /// Get the size of the grid in cells.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels of the grid.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the sample data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the sample data as a mutable flat slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get the channel samples of a cell as a slice.
    ///
    /// Returns `None` if the cell is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&[T]> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        let base = (row * self.size.width + col) * C;
        Some(&self.data[base..base + C])
    }

    /// Get one channel sample of a cell.
    ///
    /// Returns `None` if the cell or channel is out of bounds.
    pub fn value(&self, row: usize, col: usize, ch: usize) -> Option<T> {
        if ch >= C {
            return None;
        }
        self.get(row, col).map(|px| px[ch])
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridError, GridSize};

    #[test]
    fn grid_size() {
        let size = GridSize {
            width: 3,
            height: 2,
        };
        assert_eq!(size.width, 3);
        assert_eq!(size.height, 2);
    }

    #[test]
    fn grid_from_vec() -> Result<(), GridError> {
        let grid = Grid::<f64, 1>::new(
            GridSize {
                width: 2,
                height: 2,
            },
            vec![1.0, 2.0, 3.0, 4.0],
        )?;

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.value(1, 0, 0), Some(3.0));
        assert_eq!(grid.value(2, 0, 0), None);

        Ok(())
    }

    #[test]
    fn grid_invalid_length() {
        let grid = Grid::<f64, 3>::new(
            GridSize {
                width: 2,
                height: 2,
            },
            vec![0.0; 5],
        );
        assert!(matches!(grid, Err(GridError::InvalidDataLength(5, 12))));
    }

    #[test]
    fn grid_cast() -> Result<(), GridError> {
        let grid = Grid::<u8, 1>::new(
            GridSize {
                width: 2,
                height: 1,
            },
            vec![0, 255],
        )?;

        let casted = grid.cast::<f32>()?;
        assert_eq!(casted.as_slice(), &[0.0f32, 255.0f32]);

        Ok(())
    }
}
