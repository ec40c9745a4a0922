//! Arithmetic over sorted-triplet matrices
//!
//! Elementwise operations walk both operands' triplet lists with two
//! cursors, exactly like the merge step of a merge sort: because both
//! inputs are sorted row-major, the output comes out sorted without any
//! post-processing. The matrix product joins each left triplet against
//! the right operand's matching row slice and accumulates into a
//! coordinate-keyed hash map.

use hashbrown::HashMap;

use trimat_core::validation::bounds;
use trimat_core::{MatrixElement, Result, TrimatError};

use crate::matrix::CooMatrix;

/// Which elementwise combination the merge performs
#[derive(Clone, Copy)]
enum MergeOp {
    Add,
    Sub,
    Mul,
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Elementwise sum: `self + other`
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::ShapeMismatch`] unless both operands have
    /// the same shape. Validation happens before any allocation, so a
    /// failed call has no observable effect.
    pub fn add(&self, other: &Self) -> Result<Self> {
        bounds::check_same_shape(self.dimensions(), other.dimensions())?;
        Ok(self.merge_elementwise(other, MergeOp::Add))
    }

    /// Elementwise difference: `self - other`
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::ShapeMismatch`] unless both operands have
    /// the same shape.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        bounds::check_same_shape(self.dimensions(), other.dimensions())?;
        Ok(self.merge_elementwise(other, MergeOp::Sub))
    }

    /// Elementwise (Hadamard) product: `self * other`
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::ShapeMismatch`] unless both operands have
    /// the same shape.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        bounds::check_same_shape(self.dimensions(), other.dimensions())?;
        Ok(self.merge_elementwise(other, MergeOp::Mul))
    }

    /// Two-cursor coordinate merge over both sorted triplet lists
    ///
    /// One-sided coordinates pass through for add (and negated on the
    /// right side for sub) and vanish for mul; shared coordinates are
    /// combined, and exact-zero results are dropped so the no-stored-zero
    /// invariant survives cancellation.
    fn merge_elementwise(&self, other: &Self, op: MergeOp) -> Self {
        let mut out = Self::zeros(self.nrows, self.ncols);
        let mut push = |row: usize, col: usize, value: T| {
            if !value.is_zero() {
                out.row_indices.push(row);
                out.col_indices.push(col);
                out.values.push(value);
            }
        };

        let mut i = 0;
        let mut j = 0;
        while i < self.values.len() && j < other.values.len() {
            let a = (self.row_indices[i], self.col_indices[i]);
            let b = (other.row_indices[j], other.col_indices[j]);
            match a.cmp(&b) {
                core::cmp::Ordering::Less => {
                    if !matches!(op, MergeOp::Mul) {
                        push(a.0, a.1, self.values[i]);
                    }
                    i += 1;
                }
                core::cmp::Ordering::Greater => {
                    match op {
                        MergeOp::Add => push(b.0, b.1, other.values[j]),
                        MergeOp::Sub => push(b.0, b.1, -other.values[j]),
                        MergeOp::Mul => {}
                    }
                    j += 1;
                }
                core::cmp::Ordering::Equal => {
                    let combined = match op {
                        MergeOp::Add => self.values[i] + other.values[j],
                        MergeOp::Sub => self.values[i] - other.values[j],
                        MergeOp::Mul => self.values[i] * other.values[j],
                    };
                    push(a.0, a.1, combined);
                    i += 1;
                    j += 1;
                }
            }
        }

        // Drain whichever side is left over; a product contributes
        // nothing where the other operand is absent.
        if !matches!(op, MergeOp::Mul) {
            while i < self.values.len() {
                push(self.row_indices[i], self.col_indices[i], self.values[i]);
                i += 1;
            }
            while j < other.values.len() {
                let value = match op {
                    MergeOp::Sub => -other.values[j],
                    _ => other.values[j],
                };
                push(other.row_indices[j], other.col_indices[j], value);
                j += 1;
            }
        }

        out
    }

    /// Multiply every stored value by `alpha`
    ///
    /// Scaling by zero yields the empty matrix of the same shape. Scaled
    /// values that underflow to exact zero are dropped rather than
    /// stored.
    pub fn scale(&self, alpha: T) -> Self {
        if alpha.is_zero() {
            return Self::zeros(self.nrows, self.ncols);
        }
        let mut out = Self::zeros(self.nrows, self.ncols);
        for (row, col, value) in self.iter() {
            let scaled = value * alpha;
            if !scaled.is_zero() {
                out.row_indices.push(row);
                out.col_indices.push(col);
                out.values.push(scaled);
            }
        }
        out
    }

    /// Divide every stored value by `alpha`
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::DivisionByZero`] when `alpha` is exactly
    /// zero; a zero divisor is never absorbed silently.
    pub fn divide(&self, alpha: T) -> Result<Self> {
        if alpha.is_zero() {
            return Err(TrimatError::DivisionByZero);
        }
        let mut out = Self::zeros(self.nrows, self.ncols);
        for (row, col, value) in self.iter() {
            let quotient = value / alpha;
            if !quotient.is_zero() {
                out.row_indices.push(row);
                out.col_indices.push(col);
                out.values.push(quotient);
            }
        }
        Ok(out)
    }

    /// Matrix product: `self @ other`
    ///
    /// Each left triplet `(i, k, v)` joins the right operand's row `k`,
    /// located by binary search over its sorted row indices, and every
    /// pairing accumulates `v * w` under the output coordinate. Cells
    /// whose accumulated sum is exactly zero are not stored.
    ///
    /// # Errors
    ///
    /// Returns [`TrimatError::ShapeMismatch`] unless
    /// `self.ncols() == other.nrows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        bounds::check_matmul_shape(self.dimensions(), other.dimensions())?;

        let mut acc: HashMap<(usize, usize), T> = HashMap::new();
        for (row, inner, left) in self.iter() {
            for k in other.row_range(inner) {
                let entry = acc
                    .entry((row, other.col_indices[k]))
                    .or_insert(T::ZERO);
                *entry = *entry + left * other.values[k];
            }
        }

        let mut cells: Vec<((usize, usize), T)> = acc
            .into_iter()
            .filter(|(_, value)| !value.is_zero())
            .collect();
        cells.sort_unstable_by_key(|&(coordinate, _)| coordinate);

        let mut out = Self::zeros(self.nrows, other.ncols);
        for ((row, col), value) in cells {
            out.row_indices.push(row);
            out.col_indices.push(col);
            out.values.push(value);
        }
        Ok(out)
    }

    /// Alias for [`CooMatrix::matmul`], after the conventional `dot` name
    pub fn dot(&self, other: &Self) -> Result<Self> {
        self.matmul(other)
    }

    /// Transpose: swap row and column coordinates
    ///
    /// The swapped triplets are re-sorted so the result upholds the
    /// row-major ordering invariant.
    pub fn transpose(&self) -> Self {
        let mut perm: Vec<usize> = (0..self.values.len()).collect();
        perm.sort_unstable_by_key(|&k| (self.col_indices[k], self.row_indices[k]));

        let mut out = Self::zeros(self.ncols, self.nrows);
        for &k in &perm {
            out.row_indices.push(self.col_indices[k]);
            out.col_indices.push(self.row_indices[k]);
            out.values.push(self.values[k]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use trimat_core::is_sorted_strict;

    fn a() -> CooMatrix<f64> {
        CooMatrix::from_dense(&[vec![1.0, 0.0], vec![0.0, 2.0]]).unwrap()
    }

    fn b() -> CooMatrix<f64> {
        CooMatrix::from_dense(&[vec![0.0, 3.0], vec![4.0, 0.0]]).unwrap()
    }

    #[test]
    fn add_merges_disjoint_and_shared_coordinates() {
        let sum = a().add(&b()).unwrap();
        assert_eq!(sum.to_dense(), vec![vec![1.0, 3.0], vec![4.0, 2.0]]);
        assert!(is_sorted_strict(sum.row_indices(), sum.col_indices()));
    }

    #[test]
    fn add_cancellation_drops_entry() {
        let m = CooMatrix::from_dense(&[vec![2.0, 1.0]]).unwrap();
        let n = CooMatrix::from_dense(&[vec![-2.0, 1.0]]).unwrap();
        let sum = m.add(&n).unwrap();
        assert_eq!(sum.nnz(), 1);
        assert_eq!(sum.get(0, 1).unwrap(), 2.0);
    }

    #[test]
    fn sub_negates_only_right_side() {
        let diff = a().sub(&b()).unwrap();
        assert_eq!(diff.to_dense(), vec![vec![1.0, -3.0], vec![-4.0, 2.0]]);

        // Right-side drain past the left's end must also be negated.
        let short = CooMatrix::from_dense(&[vec![1.0, 0.0, 0.0]]).unwrap();
        let long = CooMatrix::from_dense(&[vec![0.0, 5.0, 7.0]]).unwrap();
        let diff = short.sub(&long).unwrap();
        assert_eq!(diff.to_dense(), vec![vec![1.0, -5.0, -7.0]]);
    }

    #[test]
    fn sub_self_is_empty() {
        let m = CooMatrix::from_dense(&[vec![1.5, 0.0, -2.0], vec![0.0, 3.0, 0.0]]).unwrap();
        let zero = m.sub(&m).unwrap();
        assert_eq!(zero.nnz(), 0);
        assert_eq!(zero.dimensions(), m.dimensions());
    }

    #[test]
    fn mul_keeps_only_shared_coordinates() {
        // A and B have disjoint sparsity patterns.
        let product = a().mul(&b()).unwrap();
        assert_eq!(product.nnz(), 0);
        assert_eq!(product.to_dense(), vec![vec![0.0, 0.0], vec![0.0, 0.0]]);

        let m = CooMatrix::from_dense(&[vec![2.0, 3.0]]).unwrap();
        let n = CooMatrix::from_dense(&[vec![4.0, 0.0]]).unwrap();
        assert_eq!(m.mul(&n).unwrap().to_dense(), vec![vec![8.0, 0.0]]);
    }

    #[test]
    fn elementwise_shape_mismatch() {
        let wide = CooMatrix::<f64>::zeros(2, 3);
        assert_eq!(a().add(&wide).unwrap_err(), TrimatError::ShapeMismatch);
        assert_eq!(a().sub(&wide).unwrap_err(), TrimatError::ShapeMismatch);
        assert_eq!(a().mul(&wide).unwrap_err(), TrimatError::ShapeMismatch);
    }

    #[test]
    fn scale_by_zero_empties_but_keeps_shape() {
        let scaled = a().scale(0.0);
        assert_eq!(scaled.nnz(), 0);
        assert_eq!(scaled.dimensions(), (2, 2));
    }

    #[test]
    fn scale_and_divide_map_values() {
        let m = a();
        assert_eq!(m.scale(3.0).to_dense(), vec![vec![3.0, 0.0], vec![0.0, 6.0]]);
        assert_eq!(
            m.divide(2.0).unwrap().to_dense(),
            vec![vec![0.5, 0.0], vec![0.0, 1.0]]
        );
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        assert_eq!(a().divide(0.0).unwrap_err(), TrimatError::DivisionByZero);
    }

    #[test]
    fn matmul_concrete_product() {
        // [[1,0],[0,2]] @ [[0,3],[4,0]] = [[0,3],[8,0]]
        let product = a().matmul(&b()).unwrap();
        assert_eq!(product.to_dense(), vec![vec![0.0, 3.0], vec![8.0, 0.0]]);
        assert!(is_sorted_strict(
            product.row_indices(),
            product.col_indices()
        ));
    }

    #[test]
    fn matmul_shapes() {
        let m = CooMatrix::<f64>::zeros(2, 3);
        let n = CooMatrix::<f64>::zeros(3, 5);
        assert_eq!(m.matmul(&n).unwrap().dimensions(), (2, 5));
        assert_eq!(n.matmul(&m).unwrap_err(), TrimatError::ShapeMismatch);
    }

    #[test]
    fn matmul_drops_cancelled_cells() {
        // [[1, 1]] @ [[1], [-1]] accumulates to exactly zero.
        let m = CooMatrix::from_dense(&[vec![1.0, 1.0]]).unwrap();
        let n = CooMatrix::from_dense(&[vec![1.0], vec![-1.0]]).unwrap();
        let product = m.matmul(&n).unwrap();
        assert_eq!(product.nnz(), 0);
        assert_eq!(product.dimensions(), (1, 1));
    }

    #[test]
    fn matmul_identity_is_neutral() {
        let m = CooMatrix::from_dense(&[vec![1.0, 0.0, 2.0], vec![0.0, 5.0, 6.0]]).unwrap();
        let id = CooMatrix::<f64>::identity(3);
        assert_eq!(m.matmul(&id).unwrap(), m);
        assert_eq!(CooMatrix::<f64>::identity(2).matmul(&m).unwrap(), m);
    }

    #[test]
    fn dot_matches_matmul() {
        assert_eq!(a().dot(&b()).unwrap(), a().matmul(&b()).unwrap());
    }

    #[test]
    fn transpose_swaps_and_restores_order() {
        let m = CooMatrix::from_dense(&[vec![1.0, 0.0, 2.0], vec![0.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.dimensions(), (3, 2));
        assert_eq!(
            t.to_dense(),
            vec![vec![1.0, 0.0], vec![0.0, 5.0], vec![2.0, 6.0]]
        );
        assert!(is_sorted_strict(t.row_indices(), t.col_indices()));
        assert_eq!(t.transpose(), m);
    }

    /// Random sparse matrix with small integer entries, so products and
    /// sums stay exact and associativity can be asserted with equality.
    fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize) -> CooMatrix<i64> {
        let mut dense = vec![vec![0i64; ncols]; nrows];
        for row in dense.iter_mut() {
            for cell in row.iter_mut() {
                if rng.gen_bool(0.4) {
                    *cell = rng.gen_range(-3..=3);
                }
            }
        }
        CooMatrix::from_dense(&dense).unwrap()
    }

    #[test]
    fn matmul_is_associative_on_random_fixtures() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 3, 4);
            let b = random_matrix(&mut rng, 4, 2);
            let c = random_matrix(&mut rng, 2, 5);

            let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
            let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
            assert_eq!(left.to_dense(), right.to_dense());
        }
    }

    #[test]
    fn matmul_matches_dense_reference() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 4, 3);
            let b = random_matrix(&mut rng, 3, 4);
            let product = a.matmul(&b).unwrap();

            let ad = a.to_dense();
            let bd = b.to_dense();
            let mut expected = vec![vec![0i64; 4]; 4];
            for i in 0..4 {
                for j in 0..4 {
                    for k in 0..3 {
                        expected[i][j] += ad[i][k] * bd[k][j];
                    }
                }
            }
            assert_eq!(product.to_dense(), expected);
        }
    }
}
