//! Matrix product and row/column extraction for rank-2 tensors.

use crate::error::TensorError;
use crate::scalar::Ring;
use crate::tensor::DenseTensor;

impl<T: Ring> DenseTensor<T> {
    /// The n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut t = Self::zeros(&[n, n]);
        for i in 0..n {
            t.data_mut()[i * n + i] = T::one();
        }
        t
    }

    /// Matrix product `self * other` over the scalar algebra's ring
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch unless both operands are rank 2 and the
    /// receiver's column count equals the operand's row count.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let a = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// let i = DenseTensor::identity(2);
    /// assert_eq!(a.mul(&i).unwrap(), a);
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self, TensorError> {
        if self.ndim() != 2 {
            return Err(TensorError::size_mismatch(self.ndim(), 2));
        }
        if other.ndim() != 2 {
            return Err(TensorError::size_mismatch(other.ndim(), 2));
        }
        let (m, k) = (self.shape()[0], self.shape()[1]);
        let (rows, n) = (other.shape()[0], other.shape()[1]);
        if rows != k {
            return Err(TensorError::size_mismatch(rows, k));
        }
        let a = self.data();
        let b = other.data();
        let mut out = vec![T::zero(); m * n];
        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc = acc + a[i * k + p] * b[p * n + j];
                }
                out[i * n + j] = acc;
            }
        }
        Self::from_vec(out, &[m, n])
    }

    /// Extract each row as a 1-by-n matrix.
    ///
    /// # Errors
    ///
    /// Returns a type error unless the tensor is rank 2.
    pub fn rows(&self) -> Result<Vec<Self>, TensorError> {
        self.require_matrix("rows")?;
        let (m, n) = (self.shape()[0], self.shape()[1]);
        (0..m)
            .map(|i| Self::from_vec(self.data()[i * n..(i + 1) * n].to_vec(), &[1, n]))
            .collect()
    }

    /// Extract each column as an m-by-1 matrix, re-read column-wise from
    /// every row.
    ///
    /// # Errors
    ///
    /// Returns a type error unless the tensor is rank 2.
    pub fn columns(&self) -> Result<Vec<Self>, TensorError> {
        self.require_matrix("columns")?;
        let (m, n) = (self.shape()[0], self.shape()[1]);
        let a = self.data();
        (0..n)
            .map(|j| {
                let column: Vec<T> = (0..m).map(|i| a[i * n + j]).collect();
                Self::from_vec(column, &[m, 1])
            })
            .collect()
    }

    fn require_matrix(&self, what: &'static str) -> Result<(), TensorError> {
        if self.ndim() != 2 {
            return Err(TensorError::InvalidType {
                expected: "a matrix with two dimensions",
                found: format!("rank-{} tensor in {what}", self.ndim()),
            });
        }
        Ok(())
    }
}
