mod options;
mod timeseries;

pub use options::*;
pub use timeseries::*;
