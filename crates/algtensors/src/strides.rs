//! Stride computation and index validation utilities.
//!
//! Uses row-major (C) order: the last dimension varies fastest, matching the
//! outermost-first traversal order of the nested wire format.

use crate::error::TensorError;

/// Compute row-major strides from shape.
///
/// For shape [d0, d1, d2], returns strides [d1*d2, d2, 1].
///
/// # Examples
///
/// ```
/// use algtensors::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![20, 5, 1]);
/// assert_eq!(compute_strides(&[2, 3]), vec![3, 1]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert_eq!(compute_strides(&[]), Vec::<usize>::new());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0; shape.len()];
    let mut stride = 1;

    for (d, &dim) in shape.iter().enumerate().rev() {
        strides[d] = stride;
        stride *= dim;
    }

    strides
}

/// Convert cartesian indices to a linear offset using row-major strides.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}

/// Convert a linear offset to cartesian indices for a row-major shape.
pub fn linear_to_cartesian(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    let mut indices = vec![0; shape.len()];

    for (d, &dim) in shape.iter().enumerate().rev() {
        indices[d] = linear % dim;
        linear /= dim;
    }

    indices
}

/// Total number of elements held by a shape.
///
/// The empty shape is a rank-0 scalar holding one element.
#[inline]
pub fn element_count(shape: &[usize]) -> usize {
    if shape.is_empty() {
        1
    } else {
        shape.iter().product()
    }
}

/// Validate one index component against the bound of its dimension.
///
/// Non-negativity and integrality are enforced by `usize` at the type level;
/// the remaining condition is `index < bound`.
///
/// # Errors
///
/// Returns `TensorError::IndexOutOfRange` when the bound is violated.
#[inline]
pub fn validate_index(index: usize, bound: usize) -> Result<(), TensorError> {
    if index >= bound {
        return Err(TensorError::IndexOutOfRange { index, bound });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_strides_3d() {
        assert_eq!(compute_strides(&[3, 4, 5]), vec![20, 5, 1]);
    }

    #[test]
    fn test_compute_strides_2d() {
        assert_eq!(compute_strides(&[2, 3]), vec![3, 1]);
    }

    #[test]
    fn test_compute_strides_1d() {
        assert_eq!(compute_strides(&[5]), vec![1]);
    }

    #[test]
    fn test_compute_strides_empty() {
        assert_eq!(compute_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_cartesian_to_linear() {
        let strides = compute_strides(&[3, 4, 5]);
        // For shape [3, 4, 5] with row-major order:
        // index [i, j, k] -> 20*i + 5*j + k
        assert_eq!(cartesian_to_linear(&[0, 0, 0], &strides), 0);
        assert_eq!(cartesian_to_linear(&[0, 0, 1], &strides), 1);
        assert_eq!(cartesian_to_linear(&[0, 1, 0], &strides), 5);
        assert_eq!(cartesian_to_linear(&[1, 0, 0], &strides), 20);
        assert_eq!(
            cartesian_to_linear(&[2, 3, 4], &strides),
            2 * 20 + 3 * 5 + 4
        );
    }

    #[test]
    fn test_linear_to_cartesian() {
        let shape = [3, 4, 5];
        assert_eq!(linear_to_cartesian(0, &shape), vec![0, 0, 0]);
        assert_eq!(linear_to_cartesian(1, &shape), vec![0, 0, 1]);
        assert_eq!(linear_to_cartesian(5, &shape), vec![0, 1, 0]);
        assert_eq!(linear_to_cartesian(20, &shape), vec![1, 0, 0]);
    }

    #[test]
    fn test_roundtrip() {
        let shape = [3, 4, 5];
        let strides = compute_strides(&shape);
        let total: usize = shape.iter().product();

        for linear in 0..total {
            let cartesian = linear_to_cartesian(linear, &shape);
            let back = cartesian_to_linear(&cartesian, &strides);
            assert_eq!(linear, back);
        }
    }

    #[test]
    fn test_validate_index() {
        assert!(validate_index(0, 3).is_ok());
        assert!(validate_index(2, 3).is_ok());
        let err = validate_index(3, 3).unwrap_err();
        match err {
            TensorError::IndexOutOfRange { index, bound } => {
                assert_eq!(index, 3);
                assert_eq!(bound, 3);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
