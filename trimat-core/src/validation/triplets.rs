//! Triplet array validation
//!
//! Pure checks over `(row_indices, col_indices, values)` component
//! arrays, shared by every constructor that accepts raw triplets.

use crate::TrimatError;

/// Validate that the three component arrays have equal lengths
pub const fn check_lengths(
    rows_len: usize,
    cols_len: usize,
    values_len: usize,
) -> Result<(), TrimatError> {
    if rows_len != cols_len || cols_len != values_len {
        return Err(TrimatError::LengthMismatch);
    }
    Ok(())
}

/// Validate that every coordinate lies inside the declared shape
pub fn check_coordinates(
    rows: &[usize],
    cols: &[usize],
    nrows: usize,
    ncols: usize,
) -> Result<(), TrimatError> {
    for (&row, &col) in rows.iter().zip(cols.iter()) {
        super::bounds::check_index(row, col, nrows, ncols)?;
    }
    Ok(())
}

/// Check whether coordinate arrays are strictly sorted in row-major order
///
/// Strict means no duplicate `(row, col)` pairs: equal adjacent
/// coordinates fail the check.
pub fn is_sorted_strict(rows: &[usize], cols: &[usize]) -> bool {
    rows.iter()
        .zip(cols.iter())
        .zip(rows.iter().zip(cols.iter()).skip(1))
        .all(|((&r0, &c0), (&r1, &c1))| (r0, c0) < (r1, c1))
}
