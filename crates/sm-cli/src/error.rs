use thiserror::Error;

use sm_matrix::MatrixError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input token {0:?} is not numeric")]
    BadToken(String),
    #[error("input has {got} numeric tokens but {expected} are required")]
    NotEnoughTokens { expected: usize, got: usize },
    #[error("matrix dimension {0:?} is not a positive integer")]
    BadDimension(String),
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

pub type Result<T> = std::result::Result<T, CliError>;
