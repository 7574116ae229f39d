//! Error types for the numerics core

use thiserror::Error;

/// Numerics errors
///
/// Every fallible operation in the crate fails immediately with one of these;
/// nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericsError {
    /// Matrix element access outside the declared dimensions
    #[error("Matrix index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Inversion or division by a matrix whose determinant is approximately zero
    #[error("Singular matrix: determinant {determinant} is within tolerance of zero")]
    SingularMatrix { determinant: f32 },

    /// An enum selector outside its defined values
    #[error("Invalid {kind} value: {value}")]
    InvalidEnum { kind: &'static str, value: String },

    /// A per-cell value list whose length does not match the matrix dimensions
    #[error("Expected {expected} matrix elements, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

impl NumericsError {
    pub(crate) fn invalid_enum(kind: &'static str, value: impl ToString) -> Self {
        NumericsError::InvalidEnum {
            kind,
            value: value.to_string(),
        }
    }
}

/// Result type for numerics operations
pub type Result<T> = std::result::Result<T, NumericsError>;
