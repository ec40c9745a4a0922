//! Sorted-triplet matrix storage
//!
//! The [`CooMatrix`] type owns three parallel arrays of row indices,
//! column indices and values, kept strictly sorted in row-major order.
//! Only non-zero entries are stored; zero writes remove entries. The
//! sorted order is what the merge-based arithmetic in [`crate::ops`]
//! relies on.

use core::cmp::Ordering;

use trimat_core::validation::{bounds, triplets};
use trimat_core::{MatrixElement, MatrixOperations, Result, SparseMatrix, TrimatError};

/// Sparse matrix stored as sorted (row, col, value) triplets
///
/// Invariants maintained by every public operation:
/// - triplets are strictly sorted by `(row, col)`, no duplicates
/// - no stored value is zero
/// - all coordinates lie inside the declared shape
///
/// The shape is fixed at construction. Arithmetic produces new matrices;
/// only [`CooMatrix::set`] mutates in place, through `&mut self`, and is
/// not safe to share across threads without external synchronization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CooMatrix<T: MatrixElement> {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) row_indices: Vec<usize>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) values: Vec<T>,
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Create an empty matrix of the given shape
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create the square identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        Self {
            nrows: n,
            ncols: n,
            row_indices: (0..n).collect(),
            col_indices: (0..n).collect(),
            values: vec![T::from_f64(1.0); n],
        }
    }

    /// Build a matrix from a dense row-major array
    ///
    /// Non-zero entries are extracted in row-major scan order, so the
    /// triplet ordering invariant holds by construction. The shape is
    /// taken from the input: `data.len()` rows and `data[0].len()`
    /// columns (`0 x 0` for an empty slice).
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::InvalidInput`] if the rows have unequal
    /// lengths.
    pub fn from_dense(data: &[Vec<T>]) -> Result<Self> {
        let nrows = data.len();
        let ncols = data.first().map_or(0, Vec::len);

        let mut matrix = Self::zeros(nrows, ncols);
        for (row, row_data) in data.iter().enumerate() {
            if row_data.len() != ncols {
                return Err(TrimatError::InvalidInput);
            }
            for (col, &value) in row_data.iter().enumerate() {
                if !value.is_zero() {
                    matrix.row_indices.push(row);
                    matrix.col_indices.push(col);
                    matrix.values.push(value);
                }
            }
        }
        Ok(matrix)
    }

    /// Build a matrix from triplet component arrays
    ///
    /// The input need not be sorted: entries are permuted into strict
    /// row-major order here. Zero values are filtered out rather than
    /// stored.
    ///
    /// # Errors
    ///
    /// - [`TrimatError::LengthMismatch`] if the arrays differ in length
    /// - [`TrimatError::IndexOutOfBounds`] if a coordinate exceeds the shape
    /// - [`TrimatError::DuplicateEntry`] if two entries share a coordinate
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        triplets::check_lengths(rows.len(), cols.len(), values.len())?;
        triplets::check_coordinates(&rows, &cols, nrows, ncols)?;

        // Sort a permutation rather than the arrays themselves, so the
        // three columns stay in step.
        let mut perm: Vec<usize> = (0..values.len()).collect();
        perm.sort_unstable_by_key(|&k| (rows[k], cols[k]));

        let mut matrix = Self::zeros(nrows, ncols);
        // Compare against the last seen coordinate, not the last stored
        // one: a zero-valued duplicate is still a duplicate.
        let mut last: Option<(usize, usize)> = None;
        for &k in &perm {
            let coordinate = (rows[k], cols[k]);
            if last == Some(coordinate) {
                return Err(TrimatError::DuplicateEntry);
            }
            last = Some(coordinate);
            if !values[k].is_zero() {
                matrix.row_indices.push(rows[k]);
                matrix.col_indices.push(cols[k]);
                matrix.values.push(values[k]);
            }
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Shape as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Whether the matrix stores no entries at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Row indices of the stored triplets, in storage order
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Column indices of the stored triplets, in storage order
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Values of the stored triplets, in storage order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Binary search for `(row, col)` over the sorted triplets
    ///
    /// Returns the storage position on a hit, or the insertion point
    /// that keeps the arrays sorted on a miss.
    fn locate(&self, row: usize, col: usize) -> core::result::Result<usize, usize> {
        let key = (row, col);
        let mut lo = 0;
        let mut hi = self.values.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match (self.row_indices[mid], self.col_indices[mid]).cmp(&key) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }

    /// Read the element at `(row, col)`
    ///
    /// Absent in-bounds coordinates read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::IndexOutOfBounds`] for coordinates outside
    /// the declared shape.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        bounds::check_index(row, col, self.nrows, self.ncols)?;
        Ok(match self.locate(row, col) {
            Ok(k) => self.values[k],
            Err(_) => T::ZERO,
        })
    }

    /// Write the element at `(row, col)` in place
    ///
    /// Writing zero over a stored entry removes it; writing zero over an
    /// absent entry is a no-op. Non-zero writes overwrite or insert at
    /// the position that keeps the triplets sorted.
    ///
    /// This is the only in-place mutation on the type. It requires
    /// exclusive access and is not safe for concurrent use on a shared
    /// instance.
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::IndexOutOfBounds`] for coordinates outside
    /// the declared shape; the matrix is untouched in that case.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        bounds::check_index(row, col, self.nrows, self.ncols)?;
        match self.locate(row, col) {
            Ok(k) => {
                if value.is_zero() {
                    self.row_indices.remove(k);
                    self.col_indices.remove(k);
                    self.values.remove(k);
                } else {
                    self.values[k] = value;
                }
            }
            Err(k) => {
                if !value.is_zero() {
                    self.row_indices.insert(k, row);
                    self.col_indices.insert(k, col);
                    self.values.insert(k, value);
                }
            }
        }
        Ok(())
    }

    /// Expand into a dense row-major array
    ///
    /// The output is sized from the declared shape, not from the largest
    /// stored index, so trailing all-zero rows and columns survive the
    /// round trip.
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut dense = vec![vec![T::ZERO; self.ncols]; self.nrows];
        for k in 0..self.values.len() {
            dense[self.row_indices[k]][self.col_indices[k]] = self.values[k];
        }
        dense
    }

    /// Iterate over stored triplets in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.values.len())
            .map(move |k| (self.row_indices[k], self.col_indices[k], self.values[k]))
    }

    /// Storage range of row `row`, via binary search over the row indices
    pub(crate) fn row_range(&self, row: usize) -> core::ops::Range<usize> {
        let start = self.row_indices.partition_point(|&r| r < row);
        let end = self.row_indices.partition_point(|&r| r <= row);
        start..end
    }
}

impl<T: MatrixElement> SparseMatrix for CooMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        self.locate(row, col).ok().map(|k| self.values[k])
    }

    fn dimensions(&self) -> (usize, usize) {
        self.dimensions()
    }

    fn nnz(&self) -> usize {
        self.nnz()
    }
}

impl<T: MatrixElement> MatrixOperations for CooMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        self.row_range(row_index)
            .map(|k| (self.col_indices[k], self.values[k]))
            .collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        self.iter()
            .filter(|&(_, col, _)| col == col_index)
            .map(|(row, _, value)| (row, value))
            .collect()
    }
}
