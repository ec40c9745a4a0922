//! Validation utilities for triplet matrices
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are mathematical checks over coordinates, shapes and
//! triplet component arrays.

pub mod bounds;
pub mod triplets;

pub use bounds::{check_index, check_matmul_shape, check_same_shape};
pub use triplets::{check_coordinates, check_lengths, is_sorted_strict};
