//! End-to-end checks of the tensor contract: shape invariants under
//! traversal, get/set inverse, resize/reshape behavior, the matrix product
//! identity, and wire-form round-trips.

use algtensors::{DenseTensor, Relation, TensorError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn counted(shape: &[usize]) -> DenseTensor<f64> {
    let len: usize = shape.iter().product();
    DenseTensor::from_vec((0..len).map(|x| x as f64).collect(), shape).unwrap()
}

#[test]
fn shape_is_invariant_under_traversal_ops() {
    let t = counted(&[2, 3, 4]);
    let before = t.to_nested().shape();

    let mapped = t.map(|&v, _| v * 2.0);
    assert_eq!(mapped.to_nested().shape(), before);

    let scaled = t.scale(0.5);
    assert_eq!(scaled.to_nested().shape(), before);

    let negated = t.neg();
    assert_eq!(negated.to_nested().shape(), before);

    let mut visited = 0;
    t.for_each(|_, _| visited += 1);
    assert_eq!(visited, 24);
    assert_eq!(t.to_nested().shape(), before);
}

#[test]
fn json_roundtrip_preserves_shape_and_data() {
    let shapes: &[&[usize]] = &[&[5], &[3, 2], &[2, 3, 2]];
    for shape in shapes {
        let t = counted(shape);
        let json = t.to_json().unwrap();
        let back: DenseTensor<f64> = DenseTensor::from_json(&json).unwrap();
        assert_eq!(back.shape(), t.shape());
        assert_eq!(back.data(), t.data());
    }
}

#[test]
fn set_then_get_returns_value_and_leaves_the_rest() {
    let mut t = counted(&[3, 3]);
    let original = t.clone();
    t.set(&[2, 1], -42.0).unwrap();
    assert_eq!(t.get(&[2, 1]), Ok(&-42.0));
    for (index, &value) in original.iter() {
        if index.as_slice() != [2, 1] {
            assert_eq!(t.get(&index).unwrap(), &value);
        }
    }
}

#[test]
fn resize_to_same_shape_is_identity() {
    let mut t = counted(&[2, 4]);
    let original = t.clone();
    let shape = t.shape().to_vec();
    t.resize(&shape, 0.0);
    assert_eq!(t, original);
}

#[test]
fn reshape_inverse_recovers_original() {
    let t = counted(&[4, 6]);
    // any shape pair with matching products
    for sizes in [&[2isize, 12][..], &[8, 3][..], &[24][..], &[2, 2, 6][..]] {
        let there = t.reshape(sizes).unwrap();
        let back = there.reshape(&[4, 6]).unwrap();
        assert_eq!(back, t);
    }
}

#[test]
fn matrix_times_identity_is_unchanged() {
    let mut rng = StdRng::seed_from_u64(7);
    let m: DenseTensor<f64> = DenseTensor::random_with_rng(&[4, 4], &mut rng);
    let i = DenseTensor::identity(4);
    assert_eq!(m.mul(&i).unwrap(), m);
    assert_eq!(i.mul(&m).unwrap(), m);
}

#[test]
fn index_validation_distinguishes_range_and_rank() {
    let v = DenseTensor::from_vec(vec![1.0, 2.0], &[2]).unwrap();

    assert_eq!(
        v.get(&[2]),
        Err(TensorError::IndexOutOfRange { index: 2, bound: 2 })
    );
    assert_eq!(
        v.get(&[0, 0]),
        Err(TensorError::DimensionMismatch {
            actual: 2,
            expected: 1,
            relation: Relation::NotEqual,
        })
    );
}

#[test]
fn rows_and_columns_require_rank_two() {
    let vector = counted(&[4]);
    let cube = counted(&[2, 2, 2]);
    assert!(matches!(vector.rows(), Err(TensorError::InvalidType { .. })));
    assert!(matches!(cube.rows(), Err(TensorError::InvalidType { .. })));
    assert!(matches!(
        vector.columns(),
        Err(TensorError::InvalidType { .. })
    ));
}

#[test]
fn rows_then_columns_rebuild_the_matrix() {
    let m = counted(&[3, 2]);
    let rows = m.rows().unwrap();
    assert_eq!(rows.len(), 3);
    for (i, row) in rows.iter().enumerate() {
        for j in 0..2 {
            assert_eq!(row.get(&[0, j]), m.get(&[i, j]));
        }
    }
    let columns = m.columns().unwrap();
    assert_eq!(columns.len(), 2);
    for (j, column) in columns.iter().enumerate() {
        for i in 0..3 {
            assert_eq!(column.get(&[i, 0]), m.get(&[i, j]));
        }
    }
}

#[test]
fn add_sub_are_elementwise_inverses() {
    let mut rng = StdRng::seed_from_u64(11);
    let a: DenseTensor<f64> = DenseTensor::random_with_rng(&[2, 3], &mut rng);
    let b: DenseTensor<f64> = DenseTensor::random_with_rng(&[2, 3], &mut rng);
    let sum = a.add(&b).unwrap();
    let back = sum.sub(&b).unwrap();
    for (x, y) in back.data().iter().zip(a.data().iter()) {
        approx::assert_relative_eq!(x, y, epsilon = 1e-12);
    }
}

#[test]
fn squeeze_and_unsqueeze_are_inverse() {
    let mut t = counted(&[2, 3]);
    let original = t.clone();
    t.unsqueeze(4, 1).unwrap();
    assert_eq!(t.shape(), &[1, 2, 3, 1]);
    t.squeeze();
    assert_eq!(t, original);
}
