//! Quadrant splitting and joining.

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// The four equal quadrants of an even-sided matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quadrants {
    /// Top-left quadrant.
    pub tl: Matrix,
    /// Top-right quadrant.
    pub tr: Matrix,
    /// Bottom-left quadrant.
    pub bl: Matrix,
    /// Bottom-right quadrant.
    pub br: Matrix,
}

/// Partition `m` at its midpoint row and column into four quadrants of
/// side `m.side() / 2`. The quadrants do not overlap and together cover
/// every entry.
///
/// # Errors
/// Returns `OddSide` when the side is not even.
pub fn split(m: &Matrix) -> Result<Quadrants> {
    let n = m.side();
    if n % 2 != 0 {
        return Err(MatrixError::OddSide(n));
    }
    let half = n / 2;
    let quarter = half * half;
    let mut tl = Vec::with_capacity(quarter);
    let mut tr = Vec::with_capacity(quarter);
    let mut bl = Vec::with_capacity(quarter);
    let mut br = Vec::with_capacity(quarter);
    for i in 0..half {
        for j in 0..half {
            tl.push(m.at(i, j));
            tr.push(m.at(i, j + half));
            bl.push(m.at(i + half, j));
            br.push(m.at(i + half, j + half));
        }
    }
    Ok(Quadrants {
        tl: Matrix::from_vec_unchecked(tl, half),
        tr: Matrix::from_vec_unchecked(tr, half),
        bl: Matrix::from_vec_unchecked(bl, half),
        br: Matrix::from_vec_unchecked(br, half),
    })
}

/// Reassemble four quadrants into a matrix of twice their side, placing
/// each in its original position.
///
/// # Errors
/// Returns `QuadrantMismatch` when the four sides differ.
pub fn join(q: &Quadrants) -> Result<Matrix> {
    let sides = [q.tl.side(), q.tr.side(), q.bl.side(), q.br.side()];
    let half = sides[0];
    if sides.iter().any(|&s| s != half) {
        return Err(MatrixError::QuadrantMismatch(sides));
    }
    let n = half * 2;
    let mut data = Vec::with_capacity(n * n);
    for i in 0..half {
        let row = i * half;
        data.extend_from_slice(&q.tl.data()[row..row + half]);
        data.extend_from_slice(&q.tr.data()[row..row + half]);
    }
    for i in 0..half {
        let row = i * half;
        data.extend_from_slice(&q.bl.data()[row..row + half]);
        data.extend_from_slice(&q.br.data()[row..row + half]);
    }
    Ok(Matrix::from_vec_unchecked(data, n))
}
