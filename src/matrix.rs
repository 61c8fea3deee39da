//! Dense row-major grid used for the local-distance and cumulative-cost
//! matrices.

use std::ops::Index;

/// A dense `rows × cols` grid of `f64` stored as a flat row-major vector.
///
/// The engine allocates these with sentinel padding beyond the real
/// `x_len × y_len` region; accessors expose the full padded extent so
/// callers can inspect the sentinel band as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-filled matrix.
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Return the number of rows (including padding).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (including padding).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows,
            "row index {row} out of bounds for {} rows",
            self.rows
        );
        assert!(
            col < self.cols,
            "column index {col} out of bounds for {} columns",
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Return one full row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(
            row < self.rows,
            "row index {row} out of bounds for {} rows",
            self.rows
        );
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    pub(crate) fn add(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] += value;
    }

    pub(crate) fn max_in_place(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        let cell = &mut self.data[row * self.cols + col];
        if value > *cell {
            *cell = value;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[row * self.cols + col]
    }
}
