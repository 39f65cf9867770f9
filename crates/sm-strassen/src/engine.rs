use std::fmt::Debug;

use sm_matrix::{Matrix, Result};

/// Trait for interchangeable multiplication engines.
///
/// Both operands must be square with the same side; engines fail fast
/// with a size-mismatch error otherwise. For valid inputs every engine
/// returns the exact integer product, so implementations differ only in
/// how they get there.
pub trait MatmulEngine: Send + Sync + Debug {
    /// Returns the name of this engine (e.g., "direct", "strassen").
    fn name(&self) -> &str;

    /// Matrix product C = A @ B.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
