/// An error type for the grid module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error when the data length does not match the grid dimensions.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two grids that must agree in size do not.
    #[error("Invalid grid size ({0}, {1}) != ({2}, {3})")]
    InvalidGridSize(usize, usize, usize, usize),

    /// Error when casting a sample to another type fails.
    #[error("Failed to cast the grid samples")]
    CastError,
}
