//! Dense n-dimensional tensor over a pluggable scalar algebra.
//!
//! The backing representation is a flat row-major buffer plus a shape and
//! stride vector; the nested arrays-of-arrays form only exists at the
//! boundaries (see [`crate::nested`]). Every tensor owns its storage
//! exclusively and every copy is a deep copy.

use crate::error::{Relation, TensorError};
use crate::nested::Nested;
use crate::scalar::Ring;
use crate::storage::Dense;
use crate::strides::{cartesian_to_linear, compute_strides, element_count, validate_index};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Index vector used during element traversal; inline up to rank 4.
pub type Index = SmallVec<[usize; 4]>;

/// A dense n-dimensional tensor with elements in the scalar algebra `T`.
///
/// # Examples
///
/// ```
/// use algtensors::DenseTensor;
///
/// let mut t: DenseTensor<f64> = DenseTensor::zeros(&[2, 3]);
/// t.set(&[0, 1], 5.0).unwrap();
/// assert_eq!(t.get(&[0, 1]), Ok(&5.0));
///
/// // Construct from data in row-major order
/// let m = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// assert_eq!(m.get(&[1, 0]), Ok(&3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseTensor<T: Ring> {
    storage: Dense<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Ring> DenseTensor<T> {
    /// Create a tensor with the given shape, zero-initialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let t: DenseTensor<f64> = DenseTensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            storage: Dense::zeros(element_count(shape)),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let mut t = Self::zeros(shape);
        t.fill(T::one());
        t
    }

    /// Create a tensor from flat data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error if the data length does not match
    /// the element count of `shape`.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected = element_count(shape);
        if data.len() != expected {
            return Err(TensorError::size_mismatch(data.len(), expected));
        }
        Ok(Self {
            storage: Dense::from_vec(data),
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Create a tensor from nested data.
    ///
    /// The shape is discovered from the first element at each level, then
    /// the whole structure is validated for homogeneity before any data is
    /// moved. Embedded tensors de-nest by converting them to [`Nested`]
    /// first (see the `From` impls).
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error on ragged input, reporting the
    /// offending depth's observed and expected lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::{DenseTensor, Nested};
    ///
    /// let n = Nested::Array(vec![
    ///     Nested::Array(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]),
    ///     Nested::Array(vec![Nested::Scalar(3.0), Nested::Scalar(4.0)]),
    /// ]);
    /// let t = DenseTensor::from_nested(n).unwrap();
    /// assert_eq!(t.shape(), &[2, 2]);
    /// assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_nested(nested: Nested<T>) -> Result<Self, TensorError> {
        let shape = nested.shape();
        nested.validate(&shape)?;
        let data = nested.flatten();
        Self::from_vec(data, &shape)
    }

    /// Copy a generic tensor-shaped source into a new tensor.
    ///
    /// Every element is copied in; the result shares nothing with the
    /// source.
    pub fn from_source<S: TensorSource<T>>(source: &S) -> Self {
        let shape = source.source_shape();
        let len = element_count(&shape);
        let mut data = Vec::with_capacity(len);
        if shape.is_empty() {
            data.push(source.element(&[]));
        } else if len > 0 {
            let mut index = vec![0; shape.len()];
            for _ in 0..len {
                data.push(source.element(&index));
                for d in (0..shape.len()).rev() {
                    index[d] += 1;
                    if index[d] < shape[d] {
                        break;
                    }
                    index[d] = 0;
                }
            }
        }
        Self::from_vec(data, &shape).expect("source element count matches its shape")
    }

    /// Get the shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the tensor has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Get strides.
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Live view of the backing storage in row-major order.
    ///
    /// This aliases the tensor's own buffer; use [`DenseTensor::to_nested`]
    /// for an independent copy.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Mutable view of the backing storage.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Informational tag describing the element type.
    #[inline]
    pub fn datatype(&self) -> &'static str {
        T::DATA_TYPE
    }

    /// Get element by linear offset.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&T> {
        self.storage.as_slice().get(i)
    }

    /// Get element by cartesian index.
    ///
    /// # Errors
    ///
    /// - dimension mismatch if `index.len()` differs from the rank,
    /// - out-of-range if a component violates its dimension's bound,
    /// - internal inconsistency if the computed offset escapes the buffer
    ///   (unreachable while the shape invariants hold).
    pub fn get(&self, index: &[usize]) -> Result<&T, TensorError> {
        if index.len() != self.ndim() {
            return Err(TensorError::size_mismatch(index.len(), self.ndim()));
        }
        for (&i, &dim) in index.iter().zip(self.shape.iter()) {
            validate_index(i, dim)?;
        }
        let linear = cartesian_to_linear(index, &self.strides);
        self.storage.as_slice().get(linear).ok_or(TensorError::Inconsistency {
            detail: "computed offset escapes the backing buffer",
        })
    }

    /// Set element by cartesian index, growing the tensor when needed.
    ///
    /// The index must have at least as many components as the rank. A longer
    /// index deepens the tensor (existing elements keep their positions with
    /// zeros in the new trailing dimensions) and components beyond the
    /// current bounds enlarge it, filling new slots with `T::zero()`.
    /// Returns the tensor itself to support chaining.
    ///
    /// # Errors
    ///
    /// Returns a `<` dimension mismatch when the index is shorter than the
    /// rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let mut t: DenseTensor<f64> = DenseTensor::zeros(&[2]);
    /// t.set(&[4], 9.0).unwrap();
    /// assert_eq!(t.shape(), &[5]);
    /// assert_eq!(t.get(&[4]), Ok(&9.0));
    /// ```
    pub fn set(&mut self, index: &[usize], value: T) -> Result<&mut Self, TensorError> {
        if index.len() < self.ndim() {
            return Err(TensorError::DimensionMismatch {
                actual: index.len(),
                expected: self.ndim(),
                relation: Relation::Less,
            });
        }
        let grows = index.len() > self.ndim()
            || index.iter().zip(self.shape.iter()).any(|(&i, &dim)| i >= dim);
        if grows {
            let new_shape: Vec<usize> = index
                .iter()
                .enumerate()
                .map(|(d, &i)| self.shape.get(d).copied().unwrap_or(0).max(i + 1))
                .collect();
            self.resize(&new_shape, T::zero());
        }
        let linear = cartesian_to_linear(index, &self.strides);
        if linear >= self.storage.len() {
            return Err(TensorError::Inconsistency {
                detail: "computed offset escapes the backing buffer",
            });
        }
        self.storage[linear] = value;
        Ok(self)
    }

    /// Fill all elements with a value.
    pub fn fill(&mut self, value: T) {
        for x in self.storage.as_mut_slice() {
            *x = value;
        }
    }

    /// Iterate over `(index, value)` pairs in row-major order.
    ///
    /// Each call starts a fresh traversal; the iterator holds no state
    /// shared with other iterations.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements {
            data: self.data(),
            shape: &self.shape,
            index: smallvec![0; self.ndim()],
            pos: 0,
        }
    }

    /// Apply `f` to every `(value, index)` pair, producing a new tensor of
    /// the same shape over a possibly different scalar algebra.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::DenseTensor;
    ///
    /// let t = DenseTensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    /// let doubled = t.map(|&v, _| v * 2.0);
    /// assert_eq!(doubled.data(), &[2.0, 4.0, 6.0]);
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> DenseTensor<U>
    where
        U: Ring,
        F: FnMut(&T, &[usize]) -> U,
    {
        let mut data = Vec::with_capacity(self.len());
        for (index, value) in self.iter() {
            data.push(f(value, &index));
        }
        DenseTensor::from_vec(data, &self.shape).expect("map preserves shape")
    }

    /// Call `f` on every `(value, index)` pair in row-major order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, &[usize]),
    {
        for (index, value) in self.iter() {
            f(value, &index);
        }
    }

    /// Deep copy of the data in its nested form, safe to mutate
    /// independently.
    pub fn to_nested(&self) -> Nested<T> {
        Nested::from_flat(self.data(), &self.shape)
    }

    /// Replace the shape descriptor, strides recomputed in lockstep.
    /// Callers guarantee the element count is unchanged.
    pub(crate) fn replace_shape(&mut self, shape: Vec<usize>) {
        debug_assert_eq!(element_count(&shape), self.len());
        self.strides = compute_strides(&shape);
        self.shape = shape;
    }
}

/// A tensor-shaped data source that can be copied into a [`DenseTensor`].
pub trait TensorSource<T> {
    /// Shape of the source.
    fn source_shape(&self) -> Vec<usize>;

    /// Element at `index`. Called only with indices inside the shape.
    fn element(&self, index: &[usize]) -> T;
}

impl<T: Ring> TensorSource<T> for DenseTensor<T> {
    fn source_shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn element(&self, index: &[usize]) -> T {
        self.storage[cartesian_to_linear(index, &self.strides)]
    }
}

impl<T: Ring> From<DenseTensor<T>> for Nested<T> {
    fn from(tensor: DenseTensor<T>) -> Nested<T> {
        tensor.to_nested()
    }
}

impl<T: Ring> From<&DenseTensor<T>> for Nested<T> {
    fn from(tensor: &DenseTensor<T>) -> Nested<T> {
        tensor.to_nested()
    }
}

/// Row-major `(index, value)` iterator over a tensor's elements.
pub struct Elements<'a, T> {
    data: &'a [T],
    shape: &'a [usize],
    index: Index,
    pos: usize,
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = (Index, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let item = (self.index.clone(), &self.data[self.pos]);
        self.pos += 1;
        for d in (0..self.shape.len()).rev() {
            self.index[d] += 1;
            if self.index[d] < self.shape[d] {
                break;
            }
            self.index[d] = 0;
        }
        Some(item)
    }
}

impl<T: Ring + fmt::Display> fmt::Display for DenseTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_nested(), f)
    }
}
