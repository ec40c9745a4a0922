#![no_std]

//! Trimat Core - Sparse Triplet Matrix Abstractions
//!
//! This crate provides the element and matrix traits, error types and
//! pure validation functions shared by triplet matrix implementations

pub mod error;
pub mod traits;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use validation::*;
