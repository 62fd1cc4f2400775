//! Whole-matrix descriptive statistics.
//!
//! All reductions are total: the empty matrix yields `0.0` everywhere,
//! including `min` and `max`. Returning `0.0` instead of a sentinel for the
//! empty extrema is long-standing observable behavior and is kept as is.

use super::Matrix;

impl Matrix {
    /// Sum of all elements. `0.0` for the empty matrix.
    ///
    /// The result depends only on the element values, not the matrix
    /// shape, up to floating-point rounding.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Arithmetic mean of all elements. `0.0` for the empty matrix.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.sum() / self.data.len() as f64
    }

    /// Mean and population variance in one call.
    ///
    /// The variance uses the biased estimator with divisor `n`, not
    /// `n - 1`. Returns `(0.0, 0.0)` for the empty matrix.
    ///
    /// ```
    /// # use graymat_core::Matrix;
    /// let m = Matrix::from_slice(1, 2, &[1.0, 3.0]);
    /// let (mean, variance) = m.mean_variance();
    /// assert_eq!(mean, 2.0);
    /// assert_eq!(variance, 1.0);
    /// ```
    pub fn mean_variance(&self) -> (f64, f64) {
        let n = self.data.len();
        if n == 0 {
            return (0.0, 0.0);
        }

        let mean = self.mean();
        let sq_dev: f64 = self
            .data
            .iter()
            .map(|&x| {
                let d = x - mean;
                d * d
            })
            .sum();
        (mean, sq_dev / n as f64)
    }

    /// Population variance of all elements. `0.0` for the empty matrix.
    pub fn variance(&self) -> f64 {
        self.mean_variance().1
    }

    /// Population standard deviation of all elements. `0.0` for the empty
    /// matrix.
    pub fn stddev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Largest element. `0.0` for the empty matrix.
    pub fn max(&self) -> f64 {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(0.0)
    }

    /// Smallest element. `0.0` for the empty matrix.
    pub fn min(&self) -> f64 {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_stats_reference_scenario() {
        // Column 0 = [1, 2, 3], column 1 = [4, 5, 6].
        let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.sum(), 21.0);
        assert_eq!(m.mean(), 3.5);
        assert_relative_eq!(m.variance(), 35.0 / 12.0, max_relative = 1e-12);
        assert_relative_eq!(m.stddev(), (35.0_f64 / 12.0).sqrt(), max_relative = 1e-12);
        assert_eq!(m.max(), 6.0);
        assert_eq!(m.min(), 1.0);
    }

    #[test]
    fn test_mean_variance_joint() {
        let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let (mean, variance) = m.mean_variance();
        assert_eq!(mean, m.mean());
        assert_eq!(variance, m.variance());
    }

    #[test]
    fn test_sum_is_shape_independent() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let wide = Matrix::from_slice(6, 1, &values);
        let tall = Matrix::from_slice(1, 6, &values);
        assert_relative_eq!(wide.sum(), tall.sum(), max_relative = 1e-12);
    }

    #[test]
    fn test_variance_of_constant_matrix_is_zero() {
        let m = Matrix::filled(4, 4, 2.5);
        assert_eq!(m.variance(), 0.0);
        assert_eq!(m.stddev(), 0.0);
    }

    #[test]
    fn test_min_max_with_negatives() {
        let m = Matrix::from_slice(2, 2, &[-3.0, 0.5, 7.0, -1.0]);
        assert_eq!(m.min(), -3.0);
        assert_eq!(m.max(), 7.0);
    }

    #[test]
    fn test_empty_matrix_stats_are_zero() {
        let m = Matrix::new();
        assert_eq!(m.sum(), 0.0);
        assert_eq!(m.mean(), 0.0);
        assert_eq!(m.variance(), 0.0);
        assert_eq!(m.stddev(), 0.0);
        assert_eq!(m.max(), 0.0);
        assert_eq!(m.min(), 0.0);
        assert_eq!(m.mean_variance(), (0.0, 0.0));
    }

    #[test]
    fn test_single_element_stats() {
        let m = Matrix::filled(1, 1, 5.0);
        assert_eq!(m.mean(), 5.0);
        assert_eq!(m.variance(), 0.0);
        assert_eq!(m.min(), 5.0);
        assert_eq!(m.max(), 5.0);
    }
}
