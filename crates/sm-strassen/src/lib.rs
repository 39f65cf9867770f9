//! `sm-strassen` - Matrix multiplication engines for strassen-mult.
//!
//! This crate provides:
//! - A `MatmulEngine` trait for interchangeable multiplication engines
//! - `DirectEngine`, the cubic triple-loop reference implementation
//! - `StrassenEngine`, divide-and-conquer multiplication with
//!   power-of-two padding and a configurable base-case threshold

pub mod direct;
pub mod engine;
pub mod strassen;

// Re-export primary types at the crate root for convenience.
pub use direct::DirectEngine;
pub use engine::MatmulEngine;
pub use strassen::{StrassenEngine, DEFAULT_THRESHOLD};
