//! `graymat-core` — Foundation crate for the Graymat library.
//!
//! Provides the [`Matrix`] type: a dense, value-semantic, two-dimensional
//! container of `f64` intensities with column-major storage, bounds-checked
//! element access, and whole-matrix descriptive statistics.
//!
//! # Design
//!
//! - A matrix owns its buffer exclusively; cloning performs a deep copy and
//!   [`Clone::clone_from`] reuses the destination allocation when the
//!   element counts match.
//! - Degenerate dimensions collapse to the canonical empty matrix rather
//!   than erroring; indexed access is the only fallible operation.
//! - Storage is column-major: element `(row, col)` lives at flat offset
//!   `row + col * height`, a layout contract for anyone reading the raw
//!   buffer.

pub mod error;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use graymat_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{CoreError, Result};
    pub use crate::matrix::Matrix;
}
