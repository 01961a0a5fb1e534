//! Structural shape operations: resize, reshape, squeeze/unsqueeze,
//! transpose.
//!
//! All of these work directly on the flat representation; the nested-array
//! semantics of the wire format (scalar-to-singleton promotion on rank
//! growth, unwrap-to-first on rank shrink) translate into rules over
//! trailing index components.

use crate::error::{Relation, TensorError};
use crate::scalar::Ring;
use crate::strides::{cartesian_to_linear, compute_strides, element_count};
use crate::tensor::DenseTensor;

impl<T: Ring> DenseTensor<T> {
    /// Resize in place to `new_shape`, dimension by dimension from the
    /// outermost inward.
    ///
    /// Elements inside the overlap of the old and new bounds are kept.
    /// Growing the rank keeps existing elements at index zero of the added
    /// trailing dimensions; shrinking the rank keeps the element at index
    /// zero of each dropped dimension. New slots are filled with `default`
    /// (pass `T::zero()` for the algebra's additive identity).
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let mut t = DenseTensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// t.resize(&[3], 0.0);
    /// assert_eq!(t.data(), &[1.0, 2.0, 0.0]);
    /// ```
    pub fn resize(&mut self, new_shape: &[usize], default: T) -> &mut Self {
        let data = resize_data(self.data(), self.shape(), new_shape, default);
        *self = DenseTensor::from_vec(data, new_shape)
            .expect("resized data matches the target shape");
        self
    }

    /// Copy-safe variant of [`DenseTensor::resize`]: the receiver is left
    /// untouched and the resized tensor is returned.
    pub fn resized(&self, new_shape: &[usize], default: T) -> Self {
        let mut copy = self.clone();
        copy.resize(new_shape, default);
        copy
    }

    /// Reshape into `sizes`, preserving row-major element order.
    ///
    /// At most one entry may be the wildcard `-1`, which is resolved by
    /// dividing the element count by the product of the remaining sizes.
    ///
    /// # Errors
    ///
    /// - type error on a second wildcard or a negative size,
    /// - dimension mismatch when the element count does not divide evenly or
    ///   does not match the requested sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let t = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[6]).unwrap();
    /// let m = t.reshape(&[2, -1]).unwrap();
    /// assert_eq!(m.shape(), &[2, 3]);
    /// assert_eq!(m.get(&[1, 0]), Ok(&4.0));
    /// ```
    pub fn reshape(&self, sizes: &[isize]) -> Result<Self, TensorError> {
        let shape = resolve_sizes(sizes, self.len())?;
        DenseTensor::from_vec(self.data().to_vec(), &shape)
    }

    /// Strip leading and trailing unit dimensions, shape and strides updated
    /// in lockstep. Interior unit dimensions are kept.
    pub fn squeeze(&mut self) -> &mut Self {
        let mut shape = self.shape().to_vec();
        while shape.first() == Some(&1) {
            shape.remove(0);
        }
        while shape.last() == Some(&1) {
            shape.pop();
        }
        self.replace_shape(shape);
        self
    }

    /// Pad with unit dimensions up to `rank`: `outer` leading ones, the rest
    /// trailing.
    ///
    /// # Errors
    ///
    /// Returns a `>` dimension mismatch when the current rank plus `outer`
    /// already exceeds `rank`.
    pub fn unsqueeze(&mut self, rank: usize, outer: usize) -> Result<&mut Self, TensorError> {
        let current = self.ndim();
        if current + outer > rank {
            return Err(TensorError::DimensionMismatch {
                actual: current + outer,
                expected: rank,
                relation: Relation::Greater,
            });
        }
        let mut shape = Vec::with_capacity(rank);
        shape.resize(outer, 1);
        shape.extend_from_slice(self.shape());
        shape.resize(rank, 1);
        self.replace_shape(shape);
        Ok(self)
    }

    /// Transpose a rank-2 tensor.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch for any other rank.
    pub fn transpose(&self) -> Result<Self, TensorError> {
        if self.ndim() != 2 {
            return Err(TensorError::size_mismatch(self.ndim(), 2));
        }
        let (rows, cols) = (self.shape()[0], self.shape()[1]);
        let data = self.data();
        let mut out = Vec::with_capacity(self.len());
        for j in 0..cols {
            for i in 0..rows {
                out.push(data[i * cols + j]);
            }
        }
        DenseTensor::from_vec(out, &[cols, rows])
    }
}

fn resize_data<T: Ring>(
    data: &[T],
    old_shape: &[usize],
    new_shape: &[usize],
    default: T,
) -> Vec<T> {
    let new_len = element_count(new_shape);
    let mut out = vec![default; new_len];
    if data.is_empty() {
        return out;
    }
    let old_strides = compute_strides(old_shape);
    let overlap = old_shape.len().min(new_shape.len());
    let mut index = vec![0usize; new_shape.len()];
    for slot in out.iter_mut() {
        let prefix_inside = index[..overlap]
            .iter()
            .zip(old_shape.iter())
            .all(|(&i, &dim)| i < dim);
        let trailing_at_zero = index[overlap..].iter().all(|&i| i == 0);
        if prefix_inside && trailing_at_zero {
            let mut old_index = index[..overlap].to_vec();
            old_index.resize(old_shape.len(), 0);
            *slot = data[cartesian_to_linear(&old_index, &old_strides)];
        }
        for d in (0..new_shape.len()).rev() {
            index[d] += 1;
            if index[d] < new_shape[d] {
                break;
            }
            index[d] = 0;
        }
    }
    out
}

fn resolve_sizes(sizes: &[isize], total: usize) -> Result<Vec<usize>, TensorError> {
    let mut wildcard: Option<usize> = None;
    let mut known: usize = 1;
    for (d, &s) in sizes.iter().enumerate() {
        if s == -1 {
            if wildcard.is_some() {
                return Err(TensorError::InvalidType {
                    expected: "at most one wildcard (-1) dimension",
                    found: format!("{sizes:?}"),
                });
            }
            wildcard = Some(d);
        } else if s < 0 {
            return Err(TensorError::InvalidType {
                expected: "a non-negative dimension length or -1",
                found: s.to_string(),
            });
        } else {
            known *= s as usize;
        }
    }
    let mut shape: Vec<usize> = sizes
        .iter()
        .map(|&s| if s == -1 { 0 } else { s as usize })
        .collect();
    match wildcard {
        Some(d) => {
            if known == 0 || total % known != 0 {
                return Err(TensorError::size_mismatch(total, known));
            }
            shape[d] = total / known;
        }
        None => {
            let product = element_count(&shape);
            if product != total {
                return Err(TensorError::size_mismatch(total, product));
            }
        }
    }
    Ok(shape)
}
