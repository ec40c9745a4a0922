//! Index and shape precondition checks
//!
//! This module provides pure mathematical validation functions for
//! coordinate and shape preconditions with no I/O dependencies.

use crate::TrimatError;

/// Validate that a coordinate lies inside the declared shape
///
/// Pure check against the declared dimensions; the stored triplets are
/// never consulted.
pub const fn check_index(
    row: usize,
    col: usize,
    nrows: usize,
    ncols: usize,
) -> Result<(), TrimatError> {
    if row >= nrows || col >= ncols {
        return Err(TrimatError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate that two shapes are identical
///
/// Precondition for the elementwise operations: both operands must have
/// the same number of rows and columns.
pub const fn check_same_shape(
    a: (usize, usize),
    b: (usize, usize),
) -> Result<(), TrimatError> {
    if a.0 != b.0 || a.1 != b.1 {
        return Err(TrimatError::ShapeMismatch);
    }
    Ok(())
}

/// Validate that two shapes are compatible for matrix multiplication
///
/// The left operand's column count must equal the right operand's row
/// count.
pub const fn check_matmul_shape(
    a: (usize, usize),
    b: (usize, usize),
) -> Result<(), TrimatError> {
    if a.1 != b.0 {
        return Err(TrimatError::ShapeMismatch);
    }
    Ok(())
}
