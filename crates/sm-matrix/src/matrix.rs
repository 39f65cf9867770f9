use crate::error::{MatrixError, Result};

/// A square integer matrix.
///
/// Holds contiguous, row-major `i64` entries with a uniform side length.
/// Construction validates the data length against the side, so every
/// `Matrix` value is square by the time it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    data: Vec<i64>,
    side: usize,
}

impl Matrix {
    /// Create a matrix from row-major data and a side length.
    ///
    /// # Errors
    /// Returns `InvalidDimension` for side 0 and `DataLength` when
    /// `data.len() != side * side`.
    pub fn new(data: Vec<i64>, side: usize) -> Result<Matrix> {
        if side == 0 {
            return Err(MatrixError::InvalidDimension(side));
        }
        if data.len() != side * side {
            return Err(MatrixError::DataLength {
                len: data.len(),
                side,
            });
        }
        Ok(Matrix { data, side })
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must be as long as the number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Matrix> {
        let side = rows.len();
        if side == 0 {
            return Err(MatrixError::InvalidDimension(0));
        }
        let mut data = Vec::with_capacity(side * side);
        for row in &rows {
            if row.len() != side {
                return Err(MatrixError::DataLength {
                    len: row.len(),
                    side,
                });
            }
            data.extend_from_slice(row);
        }
        Matrix::new(data, side)
    }

    /// Create a zero-filled matrix with the given side.
    pub fn zeros(side: usize) -> Result<Matrix> {
        Matrix::new(vec![0; side * side], side)
    }

    /// Create the identity matrix with the given side.
    pub fn identity(side: usize) -> Result<Matrix> {
        let mut m = Matrix::zeros(side)?;
        for i in 0..side {
            m.data[i * side + i] = 1;
        }
        Ok(m)
    }

    /// Crate-internal constructor for callers that already uphold the
    /// length invariant.
    pub(crate) fn from_vec_unchecked(data: Vec<i64>, side: usize) -> Matrix {
        debug_assert_eq!(data.len(), side * side);
        Matrix { data, side }
    }

    /// Side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Row-major entries.
    pub fn data(&self) -> &[i64] {
        &self.data
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    pub fn at(&self, i: usize, j: usize) -> i64 {
        self.data[i * self.side + j]
    }

    /// The main diagonal, top-left to bottom-right.
    pub fn diagonal(&self) -> Vec<i64> {
        (0..self.side).map(|i| self.at(i, i)).collect()
    }

    /// Elementwise sum: `result[i][j] = self[i][j] + other[i][j]`.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |x, y| x + y)
    }

    /// Elementwise difference: `result[i][j] = self[i][j] - other[i][j]`.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |x, y| x - y)
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(i64, i64) -> i64) -> Result<Matrix> {
        if self.side != other.side {
            return Err(MatrixError::SizeMismatch {
                left: self.side,
                right: other.side,
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| f(x, y))
            .collect();
        Ok(Matrix::from_vec_unchecked(data, self.side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(m.side(), 2);
        assert_eq!(m.data(), &[1, 2, 3, 4]);
        assert_eq!(m.at(0, 1), 2);
        assert_eq!(m.at(1, 0), 3);
    }

    #[test]
    fn test_new_data_length_mismatch() {
        assert!(matches!(
            Matrix::new(vec![1, 2, 3], 2),
            Err(MatrixError::DataLength { len: 3, side: 2 })
        ));
    }

    #[test]
    fn test_new_zero_side() {
        assert!(matches!(
            Matrix::new(vec![], 0),
            Err(MatrixError::InvalidDimension(0))
        ));
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.data(), &[1, 2, 3, 4]);
        assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
        assert!(Matrix::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_zeros_identity() {
        let z = Matrix::zeros(3).unwrap();
        assert_eq!(z.data(), &[0; 9]);

        let i = Matrix::identity(3).unwrap();
        assert_eq!(i.data(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_add_sub() {
        let a = Matrix::new(vec![1, 2, 3, 4], 2).unwrap();
        let b = Matrix::new(vec![5, 6, 7, 8], 2).unwrap();
        assert_eq!(a.add(&b).unwrap().data(), &[6, 8, 10, 12]);
        assert_eq!(b.sub(&a).unwrap().data(), &[4, 4, 4, 4]);
    }

    #[test]
    fn test_add_size_mismatch() {
        let a = Matrix::new(vec![1], 1).unwrap();
        let b = Matrix::new(vec![1, 2, 3, 4], 2).unwrap();
        assert!(matches!(
            a.add(&b),
            Err(MatrixError::SizeMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn test_diagonal() {
        let m = Matrix::new(vec![19, 22, 43, 50], 2).unwrap();
        assert_eq!(m.diagonal(), vec![19, 50]);
    }
}
