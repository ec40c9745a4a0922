//! Abstract interfaces for triplet matrices
//!
//! This module defines all trait abstractions used by the trimat crates.
//! Traits are pure interfaces - no concrete implementations.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
