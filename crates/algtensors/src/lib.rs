//! algtensors - dense n-dimensional tensors over pluggable scalar algebras
//!
//! The element type of a tensor is abstract: any type implementing the
//! algebraic capability set can be plugged in without changing the array
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Capability tower (scalar module):
//!     Ring ⊂ DivisionRing ⊂ NormedDivisionRing
//!     Real (orthogonal refinement: ordered, lifts plain numbers)
//!
//! Storage (storage / strides modules):
//!     flat row-major buffer + shape + strides
//!
//! Boundary (nested / serialize modules):
//!     nested arrays-of-arrays, only for construction, display and the
//!     tagged wire form {kind: "DenseMatrix", data, shape, datatype}
//! ```
//!
//! Operations request the weakest capability that serves them; requesting a
//! capability the element type does not implement is either a compile error
//! (where a trait bound expresses the gate) or a typed
//! [`TensorError::UnsupportedArithmetic`] failure (where a runtime value
//! decides, as in `dot_div`).
//!
//! # Example
//!
//! ```
//! use algtensors::{DenseTensor, Norm};
//!
//! // Create a 2x3 zero-initialized tensor
//! let mut t: DenseTensor<f64> = DenseTensor::zeros(&[2, 3]);
//!
//! // Set and get elements
//! t.set(&[0, 1], 5.0).unwrap();
//! assert_eq!(t.get(&[0, 1]), Ok(&5.0));
//!
//! // Construct from data (row-major order) and take a norm
//! let v = DenseTensor::from_vec(vec![3.0, -4.0], &[2]).unwrap();
//! assert_eq!(v.norm(Norm::Frobenius), Ok(5.0));
//! ```

pub mod error;
pub mod nested;
pub mod operations;
pub mod random;
pub mod scalar;
pub mod serialize;
pub mod storage;
pub mod strides;
pub mod tensor;

pub use error::{Relation, TensorError};
pub use nested::{DataType, Nested};
pub use operations::Norm;
pub use scalar::{Capability, Complex64, DivisionRing, NormedDivisionRing, Real, Ring};
pub use storage::Dense;
pub use tensor::{DenseTensor, Elements, Index, TensorSource};
