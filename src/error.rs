//! Error types for the finite_algebras library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! variants for table validation, element registries, structural laws,
//! Gaussian arithmetic, module axioms and persistence.

use thiserror::Error;

/// The main error type for the finite_algebras library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Table Errors ============
    /// The table has no rows.
    #[error("operation table must have at least one row")]
    EmptyTable,

    /// The table is not square.
    #[error("table is not square: row {row} has {actual} entries, expected {expected}")]
    Shape {
        /// Index of the offending row.
        row: usize,
        /// Required row length (the number of rows).
        expected: usize,
        /// Actual row length.
        actual: usize,
    },

    /// A table entry lies outside `[0, order)`.
    #[error("table entry {value} at ({row}, {col}) is out of range for order {order}")]
    Range {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The invalid entry.
        value: usize,
        /// The table order.
        order: usize,
    },

    /// A row or column is not a permutation of the carrier set.
    #[error("{line} {index} is not a permutation of the elements")]
    NotLatinSquare {
        /// Either `"row"` or `"column"`.
        line: &'static str,
        /// Index of the offending row or column.
        index: usize,
    },

    // ============ Registry Errors ============
    /// Two elements share the same label.
    #[error("duplicate element label {0:?}")]
    DuplicateLabel(String),

    /// Element count and table order disagree.
    #[error("size mismatch: {elements} elements but table has order {order}")]
    SizeMismatch {
        /// Number of element labels.
        elements: usize,
        /// Order of the table.
        order: usize,
    },

    /// A label that is not one of the algebra's elements.
    #[error("unknown element {0:?}")]
    UnknownElement(String),

    // ============ Structural Law Errors ============
    /// The operation is not associative.
    #[error("operation is not associative: ({a}{b}){c} != {a}({b}{c})")]
    Associativity {
        /// First witness element.
        a: String,
        /// Second witness element.
        b: String,
        /// Third witness element.
        c: String,
    },

    /// Multiplication does not distribute over addition.
    #[error("{side} distributivity fails for ({a}, {b}, {c})")]
    Distributivity {
        /// Either `"left"` or `"right"`.
        side: &'static str,
        /// First witness element.
        a: String,
        /// Second witness element.
        b: String,
        /// Third witness element.
        c: String,
    },

    /// No two-sided identity exists.
    #[error("operation has no identity element")]
    NoIdentity,

    /// An element has no two-sided inverse.
    #[error("element {0:?} has no inverse")]
    NoInverse(String),

    /// An operation required to be commutative is not.
    #[error("operation is not commutative: {a}{b} != {b}{a}")]
    NonCommutative {
        /// First witness element.
        a: String,
        /// Second witness element.
        b: String,
    },

    /// Operands come from different algebras.
    #[error("mismatched algebras: {0}")]
    MismatchedAlgebra(String),

    /// A subset is not closed or otherwise fails to be a subalgebra.
    #[error("not a subalgebra: {0}")]
    NotASubalgebra(String),

    /// A reordering is not a permutation of the element indices.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    // ============ Arithmetic Errors ============
    /// gcd or xgcd was called with a zero operand.
    #[error("gcd is undefined when an operand is zero")]
    ZeroGcd,

    /// Division by zero.
    #[error("division by zero")]
    ZeroDivision,

    // ============ Module Errors ============
    /// A module axiom does not hold.
    #[error("module axiom {axiom} fails for {witness}")]
    ModuleAxiom {
        /// The axiom that fails, e.g. `"s(v1 + v2) = sv1 + sv2"`.
        axiom: &'static str,
        /// The scalars and vectors witnessing the failure.
        witness: String,
    },

    // ============ Parameter Errors ============
    /// Invalid parameters for a generator or operation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    // ============ Persistence Errors ============
    /// A stored algebra does not validate as the declared type.
    #[error("declared type {declared} but tables only form a {achieved}: {reason}")]
    KindMismatch {
        /// The declared variant name.
        declared: String,
        /// The strongest variant that validated.
        achieved: String,
        /// Why the declared variant was not reached.
        reason: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Json(String),

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

/// A specialized `Result` type for finite_algebras operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    /// Create a new `NotASubalgebra` error.
    #[must_use]
    pub fn not_subalgebra(message: impl Into<String>) -> Self {
        Self::NotASubalgebra(message.into())
    }

    /// Create a new `MismatchedAlgebra` error.
    #[must_use]
    pub fn mismatched(message: impl Into<String>) -> Self {
        Self::MismatchedAlgebra(message.into())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
