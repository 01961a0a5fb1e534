//! Nested ordered sequences, the boundary representation of tensor data.
//!
//! In memory a tensor is a flat buffer plus shape and strides; the nested
//! arrays-of-arrays form only appears at the boundaries (construction from
//! literals, the serialized wire format, display). This module owns that
//! boundary type and the shape logic over it: first-walk shape discovery,
//! full homogeneity validation, flattening and rebuilding, and the
//! classification scan for untyped documents.

use crate::error::{Relation, TensorError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An arbitrarily nested ordered sequence with scalars at the leaves.
///
/// `Array` is declared before `Scalar` so that untagged deserialization
/// tries the sequence form first; otherwise element types that themselves
/// accept sequences would swallow nested input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Array(Vec<Nested<T>>),
    Scalar(T),
}

/// Result of the classification scan over a nested document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// All leaves share this tag and sibling lengths are consistent.
    Tag(&'static str),
    /// Leaves carry differing tags.
    Mixed,
    /// Sibling sub-arrays have inconsistent lengths (irregular shape), or
    /// the document is empty.
    Undefined,
}

impl<T> Nested<T> {
    /// Discover the shape by walking the first element at each level.
    ///
    /// Does **not** validate uniformity; use [`Nested::validate`] for the
    /// full recursive check.
    ///
    /// # Examples
    ///
    /// ```
    /// use algtensors::nested::Nested;
    ///
    /// let n = Nested::Array(vec![
    ///     Nested::Array(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]),
    ///     Nested::Array(vec![Nested::Scalar(3.0), Nested::Scalar(4.0)]),
    /// ]);
    /// assert_eq!(n.shape(), vec![2, 2]);
    /// ```
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut current = self;
        while let Nested::Array(items) = current {
            shape.push(items.len());
            match items.first() {
                Some(first) => current = first,
                None => break,
            }
        }
        shape
    }

    /// Validate that every sibling at every depth matches `shape`.
    ///
    /// # Errors
    ///
    /// Returns a dimension-mismatch error reporting the offending depth's
    /// observed and expected lengths, with relation `<` for structures that
    /// bottom out too early, `>` for structures nested deeper than the
    /// shape, and `!=` for a plain length mismatch.
    pub fn validate(&self, shape: &[usize]) -> Result<(), TensorError> {
        self.validate_at(shape, 0)
    }

    fn validate_at(&self, shape: &[usize], depth: usize) -> Result<(), TensorError> {
        match self {
            Nested::Array(items) => {
                if depth == shape.len() {
                    return Err(TensorError::DimensionMismatch {
                        actual: depth + 1,
                        expected: shape.len(),
                        relation: Relation::Greater,
                    });
                }
                if items.len() != shape[depth] {
                    return Err(TensorError::DimensionMismatch {
                        actual: items.len(),
                        expected: shape[depth],
                        relation: Relation::NotEqual,
                    });
                }
                for item in items {
                    item.validate_at(shape, depth + 1)?;
                }
                Ok(())
            }
            Nested::Scalar(_) => {
                if depth != shape.len() {
                    return Err(TensorError::DimensionMismatch {
                        actual: depth,
                        expected: shape.len(),
                        relation: Relation::Less,
                    });
                }
                Ok(())
            }
        }
    }

    /// Flatten into the row-major (outermost-first) leaf sequence.
    pub fn flatten(self) -> Vec<T> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<T>) {
        match self {
            Nested::Scalar(value) => out.push(value),
            Nested::Array(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl<T: Clone> Nested<T> {
    /// Rebuild the nested form from a row-major flat slice.
    ///
    /// `data.len()` must equal the product of `shape` (1 for the empty
    /// shape); this is an internal invariant of the callers.
    pub fn from_flat(data: &[T], shape: &[usize]) -> Nested<T> {
        match shape.split_first() {
            None => Nested::Scalar(data[0].clone()),
            Some((&outer, rest)) => {
                let stride: usize = rest.iter().product();
                let mut items = Vec::with_capacity(outer);
                for i in 0..outer {
                    items.push(Nested::from_flat(&data[i * stride..(i + 1) * stride], rest));
                }
                Nested::Array(items)
            }
        }
    }
}

/// Classify all leaves of a nested document with `classify`.
///
/// Returns the shared tag when every leaf agrees and sibling sub-array
/// lengths are consistent, [`DataType::Mixed`] when tags differ, and
/// [`DataType::Undefined`] on irregular sibling lengths. Irregular shape is
/// reported, not raised; callers decide whether to treat it as an error.
pub fn data_type_of<T, F>(nested: &Nested<T>, classify: &F) -> DataType
where
    F: Fn(&T) -> &'static str,
{
    match nested {
        Nested::Scalar(value) => DataType::Tag(classify(value)),
        Nested::Array(items) => {
            let mut result: Option<DataType> = None;
            let mut length = 0;
            for (i, item) in items.iter().enumerate() {
                if let Nested::Array(inner) = item {
                    if i == 0 {
                        length = inner.len();
                    }
                    if inner.len() != length {
                        return DataType::Undefined;
                    }
                }
                let item_type = data_type_of(item, classify);
                if item_type == DataType::Undefined {
                    return DataType::Undefined;
                }
                match result {
                    None => result = Some(item_type),
                    Some(r) if r != item_type => return DataType::Mixed,
                    _ => {}
                }
            }
            result.unwrap_or(DataType::Undefined)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Scalar(value) => fmt::Display::fmt(value, f),
            Nested::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix2x2() -> Nested<f64> {
        Nested::Array(vec![
            Nested::Array(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]),
            Nested::Array(vec![Nested::Scalar(3.0), Nested::Scalar(4.0)]),
        ])
    }

    #[test]
    fn test_shape_scalar() {
        let n: Nested<f64> = Nested::Scalar(5.0);
        assert_eq!(n.shape(), Vec::<usize>::new());
    }

    #[test]
    fn test_shape_2d() {
        assert_eq!(matrix2x2().shape(), vec![2, 2]);
    }

    #[test]
    fn test_shape_empty_array() {
        let n: Nested<f64> = Nested::Array(vec![]);
        assert_eq!(n.shape(), vec![0]);
    }

    #[test]
    fn test_shape_first_walk_does_not_validate() {
        // Ragged input: shape comes from the first element only
        let n = Nested::Array(vec![
            Nested::Array(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]),
            Nested::Array(vec![Nested::Scalar(3.0)]),
        ]);
        assert_eq!(n.shape(), vec![2, 2]);
        assert!(n.validate(&[2, 2]).is_err());
    }

    #[test]
    fn test_validate_ok() {
        assert!(matrix2x2().validate(&[2, 2]).is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let n = Nested::Array(vec![Nested::Scalar(1.0)]);
        let err = n.validate(&[2]).unwrap_err();
        match err {
            TensorError::DimensionMismatch {
                actual,
                expected,
                relation,
            } => {
                assert_eq!((actual, expected), (1, 2));
                assert_eq!(relation, Relation::NotEqual);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_validate_too_shallow() {
        // A scalar where the shape still expects one more level
        let n = Nested::Array(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]);
        let err = n.validate(&[2, 1]).unwrap_err();
        match err {
            TensorError::DimensionMismatch { relation, .. } => {
                assert_eq!(relation, Relation::Less);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_validate_too_deep() {
        let err = matrix2x2().validate(&[2]).unwrap_err();
        match err {
            TensorError::DimensionMismatch { relation, .. } => {
                assert_eq!(relation, Relation::Greater);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_flatten_row_major() {
        assert_eq!(matrix2x2().flatten(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_from_flat_roundtrip() {
        let n = Nested::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
        assert_eq!(n.shape(), vec![2, 3]);
        assert_eq!(n.flatten(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_from_flat_scalar() {
        let n = Nested::from_flat(&[7.0], &[]);
        assert_eq!(n, Nested::Scalar(7.0));
    }

    #[test]
    fn test_from_flat_zero_dim() {
        let n: Nested<f64> = Nested::from_flat(&[], &[2, 0]);
        assert_eq!(n.shape(), vec![2, 0]);
        assert_eq!(n.flatten(), Vec::<f64>::new());
    }

    #[test]
    fn test_data_type_uniform() {
        let dt = data_type_of(&matrix2x2(), &|_| "number");
        assert_eq!(dt, DataType::Tag("number"));
    }

    #[test]
    fn test_data_type_mixed() {
        let n = Nested::Array(vec![Nested::Scalar(0), Nested::Scalar(1)]);
        let dt = data_type_of(&n, &|v| if *v == 0 { "zero" } else { "nonzero" });
        assert_eq!(dt, DataType::Mixed);
    }

    #[test]
    fn test_data_type_ragged_is_undefined() {
        let n = Nested::Array(vec![
            Nested::Array(vec![Nested::Scalar(1.0), Nested::Scalar(2.0)]),
            Nested::Array(vec![Nested::Scalar(3.0)]),
        ]);
        assert_eq!(data_type_of(&n, &|_| "number"), DataType::Undefined);
    }

    #[test]
    fn test_data_type_empty_is_undefined() {
        let n: Nested<f64> = Nested::Array(vec![]);
        assert_eq!(data_type_of(&n, &|_| "number"), DataType::Undefined);
    }

    #[test]
    fn test_display() {
        assert_eq!(matrix2x2().to_string(), "[[1, 2], [3, 4]]");
    }

    #[test]
    fn test_serde_untagged_prefers_arrays() {
        let n: Nested<f64> = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(n, matrix2x2());
        let s: Nested<f64> = serde_json::from_str("5.0").unwrap();
        assert_eq!(s, Nested::Scalar(5.0));
    }
}
