use ndarray::{ArrayD, IxDyn};
use rand::{distr::Uniform, rngs::StdRng, Rng, SeedableRng};

use crate::{Dataset, InMemDataset, TensorPair};

const NUM_CLASSES: u8 = 10;

/// Dataset of randomly generated image/label pairs, used as a test fixture.
///
/// Every item holds a data tensor of the configured shape filled with random
/// values in `[0, 1)` and a random class index stored as a `[1]`-shaped target.
pub struct FakeImageDataset {
    dataset: InMemDataset<TensorPair>,
}

impl FakeImageDataset {
    /// Creates a fake dataset of `size` items with the given data shape.
    pub fn new(size: usize, shape: &[usize]) -> Self {
        Self::generate(size, shape, StdRng::from_os_rng())
    }

    /// Creates a fake dataset with a fixed seed, for reproducible tests.
    pub fn with_seed(size: usize, shape: &[usize], seed: u64) -> Self {
        Self::generate(size, shape, StdRng::seed_from_u64(seed))
    }

    fn generate(size: usize, shape: &[usize], mut rng: StdRng) -> Self {
        let labels = Uniform::new(0, NUM_CLASSES).expect("valid label range");
        let items = (0..size)
            .map(|_| {
                let data = ArrayD::from_shape_fn(IxDyn(shape), |_| rng.random::<f32>());
                let target = ArrayD::from_elem(IxDyn(&[1]), rng.sample(labels) as f32);
                TensorPair::new(data, target)
            })
            .collect();

        Self {
            dataset: InMemDataset::new(items),
        }
    }
}

impl Dataset<TensorPair> for FakeImageDataset {
    fn get(&self, index: usize) -> Option<TensorPair> {
        self.dataset.get(index)
    }

    fn len(&self) -> usize {
        self.dataset.len()
    }
}
