use sm_matrix::pad;
use sm_matrix::quad::{self, Quadrants};
use sm_matrix::{Matrix, MatrixError, Result};

use crate::direct;
use crate::engine::MatmulEngine;

/// Side at or below which the recursion switches to the direct triple
/// loop. A tuning constant, not a correctness requirement: results are
/// identical for any threshold.
pub const DEFAULT_THRESHOLD: usize = 512;

/// Smallest quadrant side worth dispatching to the thread pool; below
/// this the fan-out overhead dominates the seven sub-products.
#[cfg(feature = "parallel")]
const PARALLEL_CUTOFF: usize = 64;

/// Strassen divide-and-conquer engine.
///
/// Operands whose side is not a power of two are zero-padded once at
/// entry so the recursion always halves cleanly, and the product is
/// cropped back to the original side before returning. At or below
/// `threshold` the recursion bottoms out in the direct triple loop.
///
/// Each recursion level replaces the eight quadrant products of the
/// naive scheme with seven, recombining them by quadrant addition and
/// subtraction. Every call owns the matrices it allocates; nothing is
/// shared between sibling calls.
#[derive(Debug, Clone)]
pub struct StrassenEngine {
    threshold: usize,
}

impl StrassenEngine {
    /// Engine with the default base-case threshold.
    pub fn new() -> Self {
        StrassenEngine {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Engine with a custom base-case threshold. Clamped to at least 1:
    /// a 1x1 product is always computed directly.
    pub fn with_threshold(threshold: usize) -> Self {
        StrassenEngine {
            threshold: threshold.max(1),
        }
    }

    /// The configured base-case threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Recursive product of two matrices whose side is a power of two.
    fn multiply_pow2(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = a.side();
        if n <= self.threshold {
            return Matrix::new(direct::multiply_flat(a.data(), b.data(), n), n);
        }

        let qa = quad::split(a)?;
        let qb = quad::split(b)?;

        // Operand pairs for the seven sub-products P1..P7.
        let lhs = [
            qa.tl.clone(),
            qa.tl.add(&qa.tr)?,
            qa.bl.add(&qa.br)?,
            qa.br.clone(),
            qa.tl.add(&qa.br)?,
            qa.tr.sub(&qa.br)?,
            qa.tl.sub(&qa.bl)?,
        ];
        let rhs = [
            qb.tr.sub(&qb.br)?,
            qb.br.clone(),
            qb.tl.clone(),
            qb.bl.sub(&qb.tl)?,
            qb.tl.add(&qb.br)?,
            qb.bl.add(&qb.br)?,
            qb.tl.add(&qb.tr)?,
        ];

        let p = self.sub_products(lhs, rhs)?;

        let c11 = p[4].add(&p[3])?.sub(&p[1])?.add(&p[5])?;
        let c12 = p[0].add(&p[1])?;
        let c21 = p[2].add(&p[3])?;
        let c22 = p[0].add(&p[4])?.sub(&p[2])?.sub(&p[6])?;

        quad::join(&Quadrants {
            tl: c11,
            tr: c12,
            bl: c21,
            br: c22,
        })
    }

    /// The seven sub-products of one recursion level. They are mutually
    /// independent, so the `parallel` feature fans them out while the
    /// quadrants are large enough to amortize the dispatch.
    fn sub_products(&self, lhs: [Matrix; 7], rhs: [Matrix; 7]) -> Result<Vec<Matrix>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            if lhs[0].side() > PARALLEL_CUTOFF {
                return lhs
                    .into_par_iter()
                    .zip(rhs)
                    .map(|(l, r)| self.multiply_pow2(&l, &r))
                    .collect();
            }
        }
        lhs.iter()
            .zip(rhs.iter())
            .map(|(l, r)| self.multiply_pow2(l, r))
            .collect()
    }
}

impl Default for StrassenEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatmulEngine for StrassenEngine {
    fn name(&self) -> &str {
        "strassen"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let n = a.side();
        if n != b.side() {
            return Err(MatrixError::SizeMismatch {
                left: n,
                right: b.side(),
            });
        }
        if n.is_power_of_two() {
            return self.multiply_pow2(a, b);
        }
        // Pad both operands once at entry; the recursion only ever sees
        // power-of-two sides. `n` is carried here for the final crop.
        let product = self.multiply_pow2(&pad::pad_to_pow2(a), &pad::pad_to_pow2(b))?;
        pad::crop(&product, n)
    }
}
