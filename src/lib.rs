#![warn(missing_docs)]

//! # Timeseries Dataset
//!
//! Dataset adapters that reshape datasets of individually-indexed images into
//! datasets of fixed-length timeseries, for sequence-model training pipelines.
//!
//! The crate provides:
//! - [`Dataset`] — a basic sized, indexable collection of items.
//! - [`InMemDataset`] — a `Vec`-backed dataset.
//! - [`SequentialSource`](source::SequentialSource) and
//!   [`CursorSource`](source::CursorSource) — explicit-cursor sequential
//!   access over a dataset.
//! - [`TimeseriesDataset`](transform::TimeseriesDataset) — groups consecutive
//!   `(data, target)` pairs into timeseries by concatenating them along a
//!   configurable time axis.

mod dataset;
mod item;

/// Sequential, cursor-based access to dataset items.
pub mod source;
/// Dataset transforms.
pub mod transform;

pub use dataset::*;
pub use item::*;

#[cfg(test)]
pub(crate) mod test_data;
