//! Dense two-dimensional intensity matrix with column-major storage.
//!
//! [`Matrix`] is the fundamental data structure in Graymat. It owns a
//! contiguous buffer of `width * height` double-precision values, stored
//! column by column, and behaves as a plain value type: cloning performs a
//! deep copy, dropping releases the buffer exactly once.

mod create;
mod display;
mod stats;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A dense matrix of `f64` intensities with `width` columns and `height`
/// rows.
///
/// Data is stored contiguously in column-major order: element `(row, col)`
/// lives at flat offset `row + col * height`. This layout is a contract for
/// any code reading the raw buffer via [`Matrix::as_slice`] and must not be
/// assumed row-major.
///
/// The canonical empty state has zero width, zero height, and no
/// allocation; every degenerate construction path collapses to it.
///
/// # Examples
///
/// ```
/// use graymat_core::Matrix;
///
/// let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(m.get(0, 0), Ok(1.0)); // column 0 is [1, 2, 3]
/// assert_eq!(m.get(2, 0), Ok(3.0));
/// assert_eq!(m.get(0, 1), Ok(4.0)); // column 1 is [4, 5, 6]
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// Unvalidated wire form of [`Matrix`]. Deserialization goes through
/// [`TryFrom`] so that no matrix violating the buffer-length invariant can
/// be constructed from external data.
#[derive(Deserialize)]
struct RawMatrix {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = String;

    fn try_from(raw: RawMatrix) -> std::result::Result<Self, String> {
        if raw.width == 0 || raw.height == 0 {
            return Ok(Matrix::new());
        }
        let elems = raw
            .width
            .checked_mul(raw.height)
            .ok_or_else(|| "width * height overflows usize".to_string())?;
        if raw.data.len() != elems {
            return Err(format!(
                "data length {} does not match {}x{} matrix",
                raw.data.len(),
                raw.height,
                raw.width
            ));
        }
        Ok(Matrix {
            width: raw.width,
            height: raw.height,
            data: raw.data,
        })
    }
}

impl Matrix {
    // ------------------------------------------------------------------
    // Shape queries
    // ------------------------------------------------------------------

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of rows (alias of [`Matrix::height`]).
    #[inline]
    pub fn rows(&self) -> usize {
        self.height
    }

    /// The number of columns (alias of [`Matrix::width`]).
    #[inline]
    pub fn cols(&self) -> usize {
        self.width
    }

    /// The total number of elements.
    #[inline]
    pub fn elems(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix is in the canonical empty state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in column-major storage order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// A mutable flat slice of all elements in column-major storage order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix and return the underlying buffer, transferring
    /// ownership back to the caller.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Compute the column-major flat offset for `(row, col)`.
    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(CoreError::OutOfRange {
                row,
                col,
                rows: self.height,
                cols: self.width,
            });
        }
        Ok(row + col * self.height)
    }

    /// Get the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let flat = self.flat_index(row, col)?;
        Ok(self.data[flat])
    }

    /// Set the value at `(row, col)`. Fails without mutating anything when
    /// either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Get a reference to the element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<&f64> {
        let flat = self.flat_index(row, col)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        let flat = self.flat_index(row, col)?;
        Ok(&mut self.data[flat])
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in column-major storage order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in column-major storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Whole-matrix mutation
    // ------------------------------------------------------------------

    /// Overwrite every element with `value`, keeping the dimensions.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Exchange the entire state of two matrices, buffers included. No
    /// element copy occurs.
    pub fn swap(&mut self, other: &mut Matrix) {
        std::mem::swap(self, other);
    }

    /// Transfer this matrix's state out, leaving the canonical empty
    /// matrix behind. No element copy occurs.
    pub fn take(&mut self) -> Matrix {
        std::mem::take(self)
    }
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    /// Deep copy that reuses the destination buffer in place when the
    /// element counts match, instead of reallocating.
    fn clone_from(&mut self, source: &Self) {
        if self.data.len() == source.data.len() {
            self.data.copy_from_slice(&source.data);
        } else {
            self.data = source.data.clone();
        }
        self.width = source.width;
        self.height = source.height;
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}
