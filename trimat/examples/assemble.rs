//! Assemble a sparse matrix cell by cell and inspect its storage

use trimat::{CooMatrix, Result, SparseMatrix};

fn main() -> Result<()> {
    // A 1000 x 1000 matrix with a handful of scattered entries
    let mut matrix = CooMatrix::zeros(1000, 1000);

    println!("Assembling 1000 x 1000 matrix...");
    let writes = [
        (999, 999, 1.0),
        (0, 0, 2.0),
        (500, 250, 3.5),
        (0, 999, -1.0),
        (500, 251, 0.25),
    ];
    for &(row, col, value) in &writes {
        matrix.set(row, col, value)?;
    }

    println!("Stored entries: {}", matrix.nnz());
    println!("Storage order (always sorted row-major):");
    for (row, col, value) in matrix.iter() {
        println!("   ({row}, {col}) = {value}");
    }

    // Overwriting with zero removes the entry again
    matrix.set(500, 250, 0.0)?;
    println!("After clearing (500, 250): {} entries", matrix.nnz());

    // Absent cells read as zero, out-of-bounds cells are errors
    println!("matrix[123, 456] = {}", matrix.get(123, 456)?);
    assert!(matrix.get(1000, 0).is_err());
    assert_eq!(matrix.get_element(1000, 0), None);

    Ok(())
}
