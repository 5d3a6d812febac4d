use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

/// One dataset sample: an input tensor paired with its training target.
///
/// Targets are tensors as well; a scalar label is stored with shape `[1]` so
/// that consecutive targets can be concatenated the same way data tensors are.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TensorPair {
    /// Input data, e.g. an image of shape `[1, 28, 28]`.
    pub data: ArrayD<f32>,

    /// Target paired with the data, e.g. a class index of shape `[1]`.
    pub target: ArrayD<f32>,
}

impl TensorPair {
    /// Creates a new pair from a data tensor and its target tensor.
    pub fn new(data: ArrayD<f32>, target: ArrayD<f32>) -> Self {
        Self { data, target }
    }
}
