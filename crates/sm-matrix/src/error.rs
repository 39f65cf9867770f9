use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("size mismatch: left matrix has side {left}, right matrix has side {right}")]
    SizeMismatch { left: usize, right: usize },
    #[error("data length {len} does not fill a {side}x{side} matrix")]
    DataLength { len: usize, side: usize },
    #[error("invalid matrix dimension: {0}")]
    InvalidDimension(usize),
    #[error("cannot split matrix with odd side {0}")]
    OddSide(usize),
    #[error("quadrant sides differ: {0:?}")]
    QuadrantMismatch([usize; 4]),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
