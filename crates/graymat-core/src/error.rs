use thiserror::Error;

/// All errors returned by `graymat-core`.
///
/// Indexed element access is the only fallible operation in the crate;
/// every other entry point is total (degenerate inputs collapse to the
/// empty matrix instead of erroring).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A row or column index is out of bounds for the matrix dimensions.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Convenience alias used throughout `graymat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = CoreError::OutOfRange {
            row: 4,
            col: 1,
            rows: 3,
            cols: 2,
        };
        assert_eq!(err.to_string(), "index (4, 1) out of range for 3x2 matrix");
    }
}
