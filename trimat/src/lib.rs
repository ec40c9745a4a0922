//! Trimat - Sorted-Triplet Sparse Matrix Engine
//!
//! This library stores sparse matrices as (row, col, value) triplets kept
//! strictly sorted in row-major order, and combines them with merge-based
//! elementwise arithmetic, scalar operations and matrix multiplication.
//!
//! ## Architecture
//!
//! Trimat follows a clean specification/implementation separation:
//!
//! - **trimat-core**: Pure traits, error types and validation (no allocation
//!   required)
//! - **trimat**: The concrete in-memory engine and its arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use trimat::CooMatrix;
//!
//! fn example() -> trimat::Result<()> {
//!     let a = CooMatrix::from_dense(&[vec![1.0, 0.0], vec![0.0, 2.0]])?;
//!     let b = CooMatrix::from_dense(&[vec![0.0, 3.0], vec![4.0, 0.0]])?;
//!
//!     // Only the four non-zero entries are stored
//!     assert_eq!(a.nnz() + b.nnz(), 4);
//!
//!     // Merge-based sum, already sorted row-major
//!     let sum = a.add(&b)?;
//!     assert_eq!(sum.get(1, 0)?, 4.0);
//!
//!     // Sparse-times-sparse product
//!     let product = a.matmul(&b)?;
//!     assert_eq!(product.to_dense(), vec![vec![0.0, 3.0], vec![8.0, 0.0]]);
//!     Ok(())
//! }
//! example().unwrap();
//! ```
//!
//! ## Invariants
//!
//! Every public operation leaves a matrix with strictly sorted, duplicate-free
//! coordinates and no stored zero values; `nnz` is always the stored triplet
//! count. Arithmetic never mutates its operands - only [`CooMatrix::set`]
//! writes in place, through exclusive access.

// Re-export core abstractions
pub use trimat_core::{
    // Core traits
    MatrixElement, MatrixOperations, SparseMatrix,
    // Error handling
    Result, TrimatError,
    // Validation utilities
    check_index, check_matmul_shape, check_same_shape, is_sorted_strict,
};

// Implementation modules
pub mod matrix;
pub mod ops;

// Public exports
pub use matrix::CooMatrix;
