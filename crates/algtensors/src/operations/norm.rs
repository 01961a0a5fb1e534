//! Tensor norm computation.
//!
//! Dispatches on the requested norm kind and the tensor rank. The Frobenius
//! norm is defined for any rank; the remaining kinds are defined for vectors
//! and, partially, for matrices. General matrix p-norms would need the
//! largest singular value and are deliberately unimplemented.

use crate::error::{Relation, TensorError};
use crate::scalar::{NormedDivisionRing, Real, Ring};
use crate::tensor::DenseTensor;

/// The norm kind requested from [`norm`].
///
/// `P(f64::INFINITY)` and `P(f64::NEG_INFINITY)` are accepted as sentinels
/// for [`Norm::Inf`] and [`Norm::NegInf`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Norm {
    /// Square root of the sum of squared magnitudes, any rank. The default.
    #[default]
    Frobenius,
    /// The L^p norm for a finite exponent.
    P(f64),
    /// Maximum magnitude (vectors) or maximum row sum (matrices).
    Inf,
    /// Minimum magnitude; undefined for matrices.
    NegInf,
}

/// Compute a norm of `tensor`.
///
/// # Errors
///
/// - dimension mismatch (`>` against the rank-2 ceiling) for non-Frobenius
///   norms of tensors beyond rank 2,
/// - type error for the matrix `-inf` norm, which is undefined,
/// - not-implemented for general matrix p-norms.
///
/// # Examples
///
/// ```
/// use algtensors::{DenseTensor, Norm};
/// use algtensors::operations::norm;
///
/// let v = DenseTensor::from_vec(vec![3.0, -4.0], &[2]).unwrap();
/// assert_eq!(norm(&v, Norm::Frobenius), Ok(5.0));
/// assert_eq!(norm(&v, Norm::Inf), Ok(4.0));
/// assert_eq!(norm(&v, Norm::P(1.0)), Ok(7.0));
/// ```
pub fn norm<T: NormedDivisionRing>(
    tensor: &DenseTensor<T>,
    p: Norm,
) -> Result<T::Magnitude, TensorError> {
    match canonical(p) {
        Norm::Frobenius => Ok(frobenius(tensor)),
        p => match tensor.ndim() {
            1 => vector_norm(tensor, p),
            2 => matrix_norm(tensor, p),
            rank => Err(TensorError::DimensionMismatch {
                actual: rank,
                expected: 2,
                relation: Relation::Greater,
            }),
        },
    }
}

/// The squared norm, computed as `norm(tensor, p)^2` over the magnitude
/// ring.
pub fn norm_sq<T: NormedDivisionRing>(
    tensor: &DenseTensor<T>,
    p: Norm,
) -> Result<T::Magnitude, TensorError> {
    Ok(norm(tensor, p)?.powu(2))
}

impl<T: NormedDivisionRing> DenseTensor<T> {
    /// See [`norm`].
    pub fn norm(&self, p: Norm) -> Result<T::Magnitude, TensorError> {
        norm(self, p)
    }

    /// See [`norm_sq`].
    pub fn norm_sq(&self, p: Norm) -> Result<T::Magnitude, TensorError> {
        norm_sq(self, p)
    }
}

fn canonical(p: Norm) -> Norm {
    match p {
        Norm::P(x) if x == f64::INFINITY => Norm::Inf,
        Norm::P(x) if x == f64::NEG_INFINITY => Norm::NegInf,
        other => other,
    }
}

fn frobenius<T: NormedDivisionRing>(tensor: &DenseTensor<T>) -> T::Magnitude {
    let mut sum = T::Magnitude::zero();
    for &x in tensor.data() {
        let m = x.norm();
        sum = sum + m * m;
    }
    sum.powf(0.5)
}

fn vector_norm<T: NormedDivisionRing>(
    tensor: &DenseTensor<T>,
    p: Norm,
) -> Result<T::Magnitude, TensorError> {
    match p {
        Norm::Inf => {
            let mut max = T::Magnitude::zero();
            for &x in tensor.data() {
                let m = x.norm();
                if m > max {
                    max = m;
                }
            }
            Ok(max)
        }
        Norm::NegInf => {
            // zero doubles as the "nothing seen yet" marker, so empty and
            // all-zero vectors yield zero
            let mut min = T::Magnitude::zero();
            for &x in tensor.data() {
                let m = x.norm();
                if min == T::Magnitude::zero() || m < min {
                    min = m;
                }
            }
            Ok(min)
        }
        Norm::P(p) if p == 0.0 => Ok(T::Magnitude::from_f64(f64::INFINITY)),
        Norm::P(p) => {
            let mut sum = T::Magnitude::zero();
            for &x in tensor.data() {
                sum = sum + x.norm().powf(p);
            }
            Ok(sum.powf(1.0 / p))
        }
        Norm::Frobenius => Ok(frobenius(tensor)),
    }
}

fn matrix_norm<T: NormedDivisionRing>(
    tensor: &DenseTensor<T>,
    p: Norm,
) -> Result<T::Magnitude, TensorError> {
    let (m, n) = (tensor.shape()[0], tensor.shape()[1]);
    let a = tensor.data();
    match p {
        // largest column sum of magnitudes
        Norm::P(x) if x == 1.0 => {
            let mut max = T::Magnitude::zero();
            for j in 0..n {
                let mut sum = T::Magnitude::zero();
                for i in 0..m {
                    sum = sum + a[i * n + j].norm();
                }
                if sum > max {
                    max = sum;
                }
            }
            Ok(max)
        }
        // largest row sum of magnitudes
        Norm::Inf => {
            let mut max = T::Magnitude::zero();
            for i in 0..m {
                let mut sum = T::Magnitude::zero();
                for j in 0..n {
                    sum = sum + a[i * n + j].norm();
                }
                if sum > max {
                    max = sum;
                }
            }
            Ok(max)
        }
        Norm::NegInf => Err(TensorError::InvalidType {
            expected: "a vector for the -inf norm (undefined for matrices)",
            found: "a matrix".to_string(),
        }),
        Norm::P(_) => Err(TensorError::NotImplemented {
            operation: "general matrix p-norm (requires singular values)",
        }),
        Norm::Frobenius => Ok(frobenius(tensor)),
    }
}
