//! Error types for algtensors.

use crate::scalar::Capability;
use std::fmt;
use thiserror::Error;

/// Relation reported by a dimension mismatch.
///
/// `Less` and `Greater` distinguish "too shallow" and "too deep" structural
/// mismatches from plain inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    NotEqual,
    Less,
    Greater,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relation::NotEqual => "!=",
            Relation::Less => "<",
            Relation::Greater => ">",
        };
        f.write_str(s)
    }
}

/// Errors that can occur in tensor operations.
#[derive(Debug, Error, PartialEq)]
pub enum TensorError {
    /// Wrong kind of value where a specific shape of input was required.
    #[error("expected {expected}, got {found}")]
    InvalidType { expected: &'static str, found: String },

    /// Dimension mismatch between two sizes, ranks or element counts.
    #[error("dimension mismatch: {actual} {relation} {expected}")]
    DimensionMismatch {
        actual: usize,
        expected: usize,
        relation: Relation,
    },

    /// Index component outside the bound of its dimension.
    #[error("index {index} out of range (expected 0 <= index < {bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    /// The tensor's scalar algebra lacks a capability required by the
    /// requested operation.
    #[error("{operation} requires a scalar algebra implementing {capability}")]
    UnsupportedArithmetic {
        operation: &'static str,
        capability: Capability,
    },

    /// Recognized but intentionally deferred feature, distinct from a usage
    /// error.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    /// Shape metadata and backing storage have diverged. Unreachable while
    /// the construction invariants hold.
    #[error("internal inconsistency: {detail}")]
    Inconsistency { detail: &'static str },
}

impl TensorError {
    /// Dimension mismatch with the plain `!=` relation.
    pub(crate) fn size_mismatch(actual: usize, expected: usize) -> Self {
        TensorError::DimensionMismatch {
            actual,
            expected,
            relation: Relation::NotEqual,
        }
    }
}
