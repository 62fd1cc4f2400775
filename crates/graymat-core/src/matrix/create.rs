//! Matrix constructors: fill, copy-from-slice, and buffer adoption.
//!
//! Every constructor collapses degenerate dimensions (`width == 0` or
//! `height == 0`) to the canonical empty matrix instead of erroring.

use super::Matrix;

impl Matrix {
    /// Create the canonical empty matrix: zero dimensions, no allocation.
    ///
    /// ```
    /// # use graymat_core::Matrix;
    /// let m = Matrix::new();
    /// assert!(m.is_empty());
    /// assert_eq!(m.elems(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Create a matrix filled with a constant value.
    ///
    /// ```
    /// # use graymat_core::Matrix;
    /// let m = Matrix::filled(2, 3, 1.5);
    /// assert_eq!(m.elems(), 6);
    /// assert!(m.iter().all(|&x| x == 1.5));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        if width == 0 || height == 0 {
            return Self::new();
        }
        Self {
            width,
            height,
            data: vec![value; checked_elems(width, height)],
        }
    }

    /// Create a matrix by copying `width * height` values from a slice.
    /// The slice is read in column-major order; the caller keeps ownership
    /// of it.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height` for non-degenerate
    /// dimensions, or if the product overflows `usize`.
    pub fn from_slice(width: usize, height: usize, data: &[f64]) -> Self {
        if width == 0 || height == 0 {
            return Self::new();
        }
        assert_eq!(
            data.len(),
            checked_elems(width, height),
            "data length must equal width * height"
        );
        Self {
            width,
            height,
            data: data.to_vec(),
        }
    }

    /// Create a matrix by adopting an owned buffer. No copy occurs: the
    /// vector moves in and the matrix becomes its sole owner, releasing it
    /// exactly once on drop. The buffer is interpreted in column-major
    /// order.
    ///
    /// Degenerate dimensions drop the buffer and yield the empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height` for non-degenerate
    /// dimensions, or if the product overflows `usize`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Self {
        if width == 0 || height == 0 {
            return Self::new();
        }
        assert_eq!(
            data.len(),
            checked_elems(width, height),
            "data length must equal width * height"
        );
        Self {
            width,
            height,
            data,
        }
    }
}

/// Element count for non-degenerate dimensions. The product must not wrap:
/// a wrapped count would pass the length check against the wrong value.
fn checked_elems(width: usize, height: usize) -> usize {
    width
        .checked_mul(height)
        .expect("width * height overflows usize")
}
