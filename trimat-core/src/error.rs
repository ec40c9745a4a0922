//! Error types for triplet matrix operations

/// Errors that can occur when constructing or combining triplet matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimatError {
    /// Input is not a recognized matrix representation
    InvalidInput,
    /// Triplet component arrays have different lengths
    LengthMismatch,
    /// Two triplets share the same (row, col) coordinate
    DuplicateEntry,
    /// Operand shapes are incompatible for the requested operation
    ShapeMismatch,
    /// Scalar division by exact zero
    DivisionByZero,
    /// Coordinate outside the declared matrix shape
    IndexOutOfBounds,
}

impl core::fmt::Display for TrimatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            TrimatError::InvalidInput => "Invalid matrix representation",
            TrimatError::LengthMismatch => "Triplet arrays have different lengths",
            TrimatError::DuplicateEntry => "Duplicate (row, col) coordinate",
            TrimatError::ShapeMismatch => "Incompatible matrix shapes",
            TrimatError::DivisionByZero => "Division by zero scalar",
            TrimatError::IndexOutOfBounds => "Index out of bounds",
        };
        write!(f, "{msg}")
    }
}

/// Result type for triplet matrix operations
pub type Result<T> = core::result::Result<T, TrimatError>;
