use ndarray::{ArrayD, IxDyn};

use crate::TensorPair;

/// Pairs whose data tensors are filled with their source index, so tests can
/// tell which items landed in which series.
pub fn tensor_pairs(count: usize, shape: &[usize]) -> Vec<TensorPair> {
    (0..count)
        .map(|i| {
            TensorPair::new(
                ArrayD::from_elem(IxDyn(shape), i as f32),
                ArrayD::from_elem(IxDyn(&[1]), i as f32),
            )
        })
        .collect()
}
