//! Power-of-two zero-padding and cropping.
//!
//! The Strassen recursion halves the matrix side at every level, so a
//! matrix whose side is not a power of two is zero-extended up front and
//! the product is cropped back to the original side afterwards.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Zero-extend `m` so its side becomes the next power of two.
///
/// Entries within the original range are copied unchanged; every added
/// row and column is zero. When the side is already a power of two this
/// is a plain copy.
pub fn pad_to_pow2(m: &Matrix) -> Matrix {
    let n = m.side();
    let padded = n.next_power_of_two();
    if padded == n {
        return m.clone();
    }
    let mut data = vec![0i64; padded * padded];
    for i in 0..n {
        let src = i * n;
        let dst = i * padded;
        data[dst..dst + n].copy_from_slice(&m.data()[src..src + n]);
    }
    Matrix::from_vec_unchecked(data, padded)
}

/// The top-left `side x side` submatrix of `m`.
///
/// # Errors
/// Returns `InvalidDimension` when `side` is 0 or exceeds `m.side()`.
pub fn crop(m: &Matrix, side: usize) -> Result<Matrix> {
    if side == 0 || side > m.side() {
        return Err(MatrixError::InvalidDimension(side));
    }
    if side == m.side() {
        return Ok(m.clone());
    }
    let mut data = Vec::with_capacity(side * side);
    for i in 0..side {
        let row = i * m.side();
        data.extend_from_slice(&m.data()[row..row + side]);
    }
    Ok(Matrix::from_vec_unchecked(data, side))
}
