//! Walk through the arithmetic surface on a small pair of matrices

use trimat::{CooMatrix, Result};

fn print_dense(label: &str, matrix: &CooMatrix<f64>) {
    println!("{label} (nnz = {}):", matrix.nnz());
    for row in matrix.to_dense() {
        println!("   {row:?}");
    }
}

fn main() -> Result<()> {
    let a = CooMatrix::from_dense(&[vec![1.0, 0.0], vec![0.0, 2.0]])?;
    let b = CooMatrix::from_dense(&[vec![0.0, 3.0], vec![4.0, 0.0]])?;

    print_dense("A", &a);
    print_dense("B", &b);

    print_dense("A + B", &a.add(&b)?);
    print_dense("A - B", &a.sub(&b)?);
    print_dense("A .* B", &a.mul(&b)?);
    print_dense("A @ B", &a.matmul(&b)?);

    print_dense("3 * A", &a.scale(3.0));
    print_dense("A / 2", &a.divide(2.0)?);
    print_dense("A'", &a.transpose());

    // Shape violations and zero divisors are reported, not absorbed
    let tall = CooMatrix::<f64>::zeros(3, 2);
    println!("A + (3x2): {:?}", a.add(&tall).unwrap_err());
    println!("A / 0:     {:?}", a.divide(0.0).unwrap_err());

    Ok(())
}
