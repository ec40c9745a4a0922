//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements and combined by the arithmetic kernels.

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for types that can be stored as matrix elements
///
/// Beyond being storable (`Copy`, `PartialEq`, `Sized`), elements must
/// support the closed arithmetic the merge kernels rely on: addition,
/// subtraction, multiplication, division and negation. Only signed
/// numeric types qualify; subtraction of a stored entry requires
/// negation.
pub trait MatrixElement:
    Copy
    + Clone
    + PartialEq
    + Sized
    + core::fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity, the one value a sparse matrix never stores
    const ZERO: Self;

    /// Whether this value compares equal to [`Self::ZERO`]
    ///
    /// Exact comparison is intentional: the storage invariant is about
    /// representable zero, not approximate zero.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Convert from f64 for generic construction
    ///
    /// This is used for generic matrix construction where the exact
    /// element type may not be known at compile time.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    ///
    /// This is used for generic operations where a common numeric
    /// type is needed.
    fn to_f64(self) -> f64;
}

// Implement MatrixElement for the signed numeric types

impl MatrixElement for f32 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    const ZERO: Self = 0.0;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    const ZERO: Self = 0;

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    const ZERO: Self = 0;

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

// Note: u32/u64 are deliberately not covered. The arithmetic surface
// includes subtraction and negation, which unsigned types cannot close.
