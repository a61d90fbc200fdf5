//! Standard Scaler - Per-Column Normalization
//!
//! Zero mean, unit variance per feature column, fitted on the current
//! working set only. Feature scale is therefore relative to the batch
//! being clustered; parameters are never persisted across passes.
//! Zero-variance columns divide by 1.0 so constant features scale to
//! zero instead of NaN.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

// ============================================================================
// STANDARD SCALER
// ============================================================================

/// Fitted normalization parameters for one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column mean
    pub mean: Vec<f64>,
    /// Per-column standard deviation (1.0 where the column is constant)
    pub std_dev: Vec<f64>,
}

impl StandardScaler {
    /// Fit scaling parameters over the rows of `matrix`
    pub fn fit(matrix: &Array2<f64>) -> Self {
        let n = matrix.nrows() as f64;
        let cols = matrix.ncols();

        if matrix.nrows() == 0 {
            return Self {
                mean: vec![0.0; cols],
                std_dev: vec![1.0; cols],
            };
        }

        let mean: Array1<f64> = matrix.sum_axis(Axis(0)) / n;

        let mut std_dev = Vec::with_capacity(cols);
        for (c, m) in mean.iter().enumerate() {
            let var = matrix
                .column(c)
                .iter()
                .map(|v| (v - m).powi(2))
                .sum::<f64>()
                / n;
            let sd = var.sqrt();
            // Constant column: divide by 1.0, matching sklearn
            std_dev.push(if sd > 0.0 { sd } else { 1.0 });
        }

        Self {
            mean: mean.to_vec(),
            std_dev,
        }
    }

    /// Apply the fitted parameters, returning a new matrix
    pub fn transform(&self, matrix: &Array2<f64>) -> Array2<f64> {
        let mut scaled = matrix.clone();
        for mut row in scaled.rows_mut() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[c]) / self.std_dev[c];
            }
        }
        scaled
    }

    /// Fit and apply in one step
    pub fn fit_transform(matrix: &Array2<f64>) -> (Array2<f64>, Self) {
        let scaler = Self::fit(matrix);
        (scaler.transform(matrix), scaler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_transform_zero_mean_unit_variance() {
        let matrix = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let (scaled, scaler) = StandardScaler::fit_transform(&matrix);

        assert!((scaler.mean[0] - 2.0).abs() < 1e-9);
        assert!((scaler.mean[1] - 20.0).abs() < 1e-9);

        for c in 0..2 {
            let col_mean = scaled.column(c).sum() / 3.0;
            let col_var = scaled.column(c).iter().map(|v| (v - col_mean).powi(2)).sum::<f64>() / 3.0;
            assert!(col_mean.abs() < 1e-9);
            assert!((col_var - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let matrix = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let (scaled, _) = StandardScaler::fit_transform(&matrix);
        for v in scaled.column(0) {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn test_empty_matrix_is_identity() {
        let matrix = Array2::<f64>::zeros((0, 8));
        let (scaled, scaler) = StandardScaler::fit_transform(&matrix);
        assert_eq!(scaled.nrows(), 0);
        assert_eq!(scaler.std_dev, vec![1.0; 8]);
    }
}
