//! # Graymat
//!
//! A dense, value-semantic intensity matrix for grayscale image data.
//!
//! One `use graymat::prelude::*;` gives you the [`Matrix`] type: a
//! column-major 2D buffer of `f64` values with bounds-checked element
//! access and whole-matrix descriptive statistics.
//!
//! ```
//! use graymat::prelude::*;
//!
//! let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(m.sum(), 21.0);
//! assert_eq!(m.mean(), 3.5);
//! ```
//!
//! [`Matrix`]: graymat_core::Matrix

pub use graymat_core as core;

/// Glob-import convenience: `use graymat::prelude::*;`
pub mod prelude {
    pub use graymat_core::prelude::*;
}
