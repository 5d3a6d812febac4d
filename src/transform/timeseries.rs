use ndarray::{concatenate, ArrayD, Axis};
use thiserror::Error;

use crate::source::SequentialSource;
use crate::transform::TimeAxis;
use crate::{Dataset, TensorPair};

/// Error type for [TimeseriesDataset](TimeseriesDataset).
#[derive(Error, Debug)]
pub enum TimeseriesError {
    /// The configured series length cannot form a series.
    #[error("series length must be at least 1")]
    InvalidConfiguration,

    /// The source ran out of items while a series was being assembled.
    #[error("source exhausted: needed {needed} items for a series, got {fetched}")]
    SourceExhausted {
        /// Number of items a full series requires.
        needed: usize,
        /// Number of items actually fetched before exhaustion.
        fetched: usize,
    },

    /// Consecutive items could not be concatenated along the time axis.
    #[error("shape mismatch along time axis: {0}")]
    ShapeMismatch(String),
}

/// Groups consecutive `(data, target)` pairs of a sequential source into
/// fixed-length timeseries, concatenating them along a time axis.
///
/// Each series is assembled from `series_length` items pulled from the shared
/// source cursor, so retrieval is sequential-only: the [Dataset] impl keeps
/// the indexable surface for transparent chaining but `get` ignores its index
/// and always returns the *next* series. Iterating the dataset is therefore a
/// single, non-restartable pass over the groups. See [get](Dataset::get).
///
/// [len](Dataset::len) reports `ceil(source_len / series_length)`. The last
/// series is never padded: retrieving it fails with
/// [SourceExhausted](TimeseriesError::SourceExhausted) when fewer than
/// `series_length` items remain.
pub struct TimeseriesDataset<S> {
    source: S,
    series_length: usize,
    time_axis: TimeAxis,
}

impl<S> TimeseriesDataset<S>
where
    S: SequentialSource<TensorPair>,
{
    /// Creates a new timeseries dataset concatenating along the last axis.
    pub fn new(source: S, series_length: usize) -> Result<Self, TimeseriesError> {
        Self::with_time_axis(source, series_length, TimeAxis::default())
    }

    /// Creates a new timeseries dataset with an explicit time axis.
    pub fn with_time_axis(
        source: S,
        series_length: usize,
        time_axis: TimeAxis,
    ) -> Result<Self, TimeseriesError> {
        if series_length == 0 {
            return Err(TimeseriesError::InvalidConfiguration);
        }

        Ok(Self {
            source,
            series_length,
            time_axis,
        })
    }

    /// Assembles the next series, advancing the source cursor by
    /// `series_length` items.
    ///
    /// Items fetched before a failure stay consumed; there is no retry and no
    /// partial series.
    pub fn next_series(&self) -> Result<TensorPair, TimeseriesError> {
        let mut data = Vec::with_capacity(self.series_length);
        let mut targets = Vec::with_capacity(self.series_length);

        for fetched in 0..self.series_length {
            match self.source.next_item() {
                Some(item) => {
                    data.push(item.data);
                    targets.push(item.target);
                }
                None => {
                    return Err(TimeseriesError::SourceExhausted {
                        needed: self.series_length,
                        fetched,
                    })
                }
            }
        }

        Ok(TensorPair {
            data: self.join(data)?,
            target: self.join(targets)?,
        })
    }

    fn join(&self, mut parts: Vec<ArrayD<f32>>) -> Result<ArrayD<f32>, TimeseriesError> {
        if parts.len() == 1 {
            return Ok(parts.remove(0));
        }

        let axis = Axis(self.time_axis.resolve(parts[0].ndim()));
        let views: Vec<_> = parts.iter().map(|part| part.view()).collect();

        concatenate(axis, &views).map_err(|err| TimeseriesError::ShapeMismatch(err.to_string()))
    }
}

impl<S> Dataset<TensorPair> for TimeseriesDataset<S>
where
    S: SequentialSource<TensorPair>,
{
    /// Returns the next series from the shared source cursor.
    ///
    /// The index is ignored: the wrapped source only supports sequential
    /// fetches, so `get(0)` twice returns two *different* series. Failures
    /// fold to `None`; use [next_series](TimeseriesDataset::next_series) when
    /// the error matters.
    fn get(&self, _index: usize) -> Option<TensorPair> {
        self.next_series().ok()
    }

    fn len(&self) -> usize {
        self.source.len().div_ceil(self.series_length)
    }
}
