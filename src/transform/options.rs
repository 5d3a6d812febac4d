/// Helper option to describe the tensor axis along which a timeseries grows.
///
/// Axes are resolved against each tensor's own number of dimensions, so `Last`
/// picks axis 2 for a `[1, 28, 28]` image and axis 0 for a `[1]` target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeAxis {
    /// Use the last axis of the tensor.
    #[default]
    Last,

    /// Use a fixed axis.
    Axis(usize),
}

impl TimeAxis {
    /// Resolve the effective axis for a tensor with `ndim` dimensions.
    pub fn resolve(self, ndim: usize) -> usize {
        match self {
            TimeAxis::Last => ndim.saturating_sub(1),
            TimeAxis::Axis(axis) => axis,
        }
    }
}

impl From<usize> for TimeAxis {
    fn from(axis: usize) -> Self {
        Self::Axis(axis)
    }
}
