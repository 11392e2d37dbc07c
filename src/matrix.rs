//! Dense integer matrices with checked multiplication.

use std::fmt;
use thiserror::Error;

/// Errors from building or multiplying matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// Rows of differing length.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Left operand's column count differs from right operand's row count.
    #[error("dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A product cell does not fit in `i64`.
    #[error("integer overflow computing cell ({row}, {col})")]
    Overflow { row: usize, col: usize },
}

/// Row-major matrix of `i64`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Build from nested rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[i64]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i64]> {
        self.data.chunks(self.cols.max(1))
    }

    /// `self × other`
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left_rows: self.rows,
                left_cols: self.cols,
                right_rows: other.rows,
                right_cols: other.cols,
            });
        }

        let mut result = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum: i64 = 0;
                for k in 0..self.cols {
                    sum = self.data[i * self.cols + k]
                        .checked_mul(other.data[k * other.cols + j])
                        .and_then(|term| sum.checked_add(term))
                        .ok_or(MatrixError::Overflow { row: i, col: j })?;
                }
                result.data[i * other.cols + j] = sum;
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Matrix {
    /// One bracketed row per line: `[1, 2, 3]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(i64::to_string).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Matrix {
        Matrix::from_rows(vec![vec![12, 7, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    fn y() -> Matrix {
        Matrix::from_rows(vec![vec![5, 8, 1, 2], vec![6, 7, 3, 0], vec![4, 5, 9, 1]]).unwrap()
    }

    #[test]
    fn test_three_by_three_times_three_by_four() {
        let product = x().multiply(&y()).unwrap();

        assert_eq!(product.rows(), 3);
        assert_eq!(product.cols(), 4);
        assert_eq!(product.row(0), Some(&[114, 160, 60, 27][..]));
        assert_eq!(product.row(1), Some(&[74, 97, 73, 14][..]));
        assert_eq!(product.row(2), Some(&[119, 157, 112, 23][..]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = y().multiply(&x()).unwrap_err();

        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                left_rows: 3,
                left_cols: 4,
                right_rows: 3,
                right_cols: 3,
            }
        );
        assert!(err.to_string().contains("3x4 by 3x3"));
    }

    #[test]
    fn test_overflow_is_error() {
        let big = Matrix::from_rows(vec![vec![i64::MAX, i64::MAX]]).unwrap();
        let twos = Matrix::from_rows(vec![vec![2], vec![2]]).unwrap();

        assert_eq!(
            big.multiply(&twos),
            Err(MatrixError::Overflow { row: 0, col: 0 })
        );

        // Each term fits, the running sum does not
        let ones = Matrix::from_rows(vec![vec![1], vec![1]]).unwrap();
        assert_eq!(
            big.multiply(&ones),
            Err(MatrixError::Overflow { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_negative_values_near_limits() {
        let a = Matrix::from_rows(vec![vec![i64::MIN, 1]]).unwrap();
        let b = Matrix::from_rows(vec![vec![1], vec![-1]]).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::Overflow { row: 0, col: 0 })
        );

        let c = Matrix::from_rows(vec![vec![1], vec![1]]).unwrap();
        assert_eq!(a.multiply(&c).unwrap().get(0, 0), Some(i64::MIN + 1));
    }

    #[test]
    fn test_ragged_and_empty_rows() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1, 2], vec![3]]),
            Err(MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(Matrix::from_rows(vec![]), Err(MatrixError::Empty));
        assert_eq!(Matrix::from_rows(vec![vec![]]), Err(MatrixError::Empty));
    }

    #[test]
    fn test_identity() {
        let identity = Matrix::from_rows(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();
        assert_eq!(identity.multiply(&x()).unwrap(), x());
    }

    #[test]
    fn test_get_out_of_bounds() {
        assert_eq!(x().get(0, 0), Some(12));
        assert_eq!(x().get(3, 0), None);
        assert_eq!(x().get(0, 3), None);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
    }
}
