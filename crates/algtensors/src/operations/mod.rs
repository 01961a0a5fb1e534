//! Tensor operations.
//!
//! Structural operations (`resize`, `reshape`, `squeeze`, `transpose`),
//! elementwise arithmetic and the `dot_*` broadcast family, the rank-2
//! matrix product, and norm computation. Each file adds the methods for its
//! concern to [`DenseTensor`](crate::tensor::DenseTensor).

mod elementwise;
mod matmul;
mod norm;
mod shape;

pub use norm::{norm, norm_sq, Norm};
