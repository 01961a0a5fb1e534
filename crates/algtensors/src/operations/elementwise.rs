//! Elementwise tensor operations and the scalar-broadcast `dot_*` family.
//!
//! Everything here is built on [`DenseTensor::map`] or a flat zip, so shape
//! is preserved exactly. The `dot_div` and `dot_pow` operations are gated at
//! runtime through the capability hooks on [`Ring`]; the gate fires before
//! any element is touched.

use crate::error::TensorError;
use crate::scalar::{Capability, Ring};
use crate::tensor::DenseTensor;

impl<T: Ring> DenseTensor<T> {
    /// Multiply every element by `factor`, returning a new tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let t = DenseTensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    /// assert_eq!(t.scale(2.0).data(), &[2.0, 4.0, 6.0]);
    /// ```
    pub fn scale(&self, factor: T) -> Self {
        self.map(|&x, _| x * factor)
    }

    /// Negate every element, returning a new tensor.
    pub fn neg(&self) -> Self {
        self.map(|&x, _| -x)
    }

    /// Elementwise sum with `other`.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch (first differing rank or dimension) when
    /// the shapes are not exactly equal.
    pub fn add(&self, other: &Self) -> Result<Self, TensorError> {
        check_same_shape(self, other)?;
        Ok(zip_map(self, other, |a, b| a + b))
    }

    /// Elementwise difference with `other`.
    ///
    /// # Errors
    ///
    /// Same shape requirements as [`DenseTensor::add`].
    pub fn sub(&self, other: &Self) -> Result<Self, TensorError> {
        check_same_shape(self, other)?;
        Ok(zip_map(self, other, |a, b| a - b))
    }

    /// Add `operand` to every element.
    pub fn dot_add(&self, operand: T) -> Self {
        self.map(|&x, _| x + operand)
    }

    /// Subtract `operand` from every element.
    pub fn dot_sub(&self, operand: T) -> Self {
        self.map(|&x, _| x - operand)
    }

    /// Multiply every element by `operand`.
    pub fn dot_mul(&self, operand: T) -> Self {
        self.map(|&x, _| x * operand)
    }

    /// Divide every element by `operand`.
    ///
    /// # Errors
    ///
    /// Fails with an unsupported-arithmetic error naming `DivisionRing` when
    /// the scalar algebra has no division; the receiver is untouched.
    pub fn dot_div(&self, operand: T) -> Result<Self, TensorError> {
        let div = T::DIV.ok_or(TensorError::UnsupportedArithmetic {
            operation: "dot_div",
            capability: Capability::DivisionRing,
        })?;
        Ok(self.map(|&x, _| div(x, operand)))
    }

    /// Raise every element to the real exponent `exponent`.
    ///
    /// # Errors
    ///
    /// Fails with an unsupported-arithmetic error naming
    /// `NormedDivisionRing` when the scalar algebra has no real-exponent
    /// power. The gate is deliberately this strict even for integer
    /// exponents.
    pub fn dot_pow(&self, exponent: f64) -> Result<Self, TensorError> {
        let powf = T::POWF.ok_or(TensorError::UnsupportedArithmetic {
            operation: "dot_pow",
            capability: Capability::NormedDivisionRing,
        })?;
        Ok(self.map(|&x, _| powf(x, exponent)))
    }

    /// Apply the exponential function to every element.
    pub fn dot_exp(&self) -> Self {
        self.map(|&x, _| x.exp())
    }

    /// Apply `exp(x) - 1` to every element.
    pub fn dot_expm1(&self) -> Self {
        self.map(|&x, _| x.exp_m1())
    }
}

fn check_same_shape<T: Ring>(a: &DenseTensor<T>, b: &DenseTensor<T>) -> Result<(), TensorError> {
    if a.ndim() != b.ndim() {
        return Err(TensorError::size_mismatch(b.ndim(), a.ndim()));
    }
    for (&x, &y) in a.shape().iter().zip(b.shape().iter()) {
        if x != y {
            return Err(TensorError::size_mismatch(y, x));
        }
    }
    Ok(())
}

fn zip_map<T: Ring, F>(a: &DenseTensor<T>, b: &DenseTensor<T>, f: F) -> DenseTensor<T>
where
    F: Fn(T, T) -> T,
{
    let data: Vec<T> = a
        .data()
        .iter()
        .zip(b.data().iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    DenseTensor::from_vec(data, a.shape()).expect("zip preserves shape")
}
