mod base;
mod in_memory;
mod iterator;

pub use base::*;
pub use in_memory::*;
pub use iterator::*;

#[cfg(any(test, feature = "fake"))]
mod fake;

#[cfg(any(test, feature = "fake"))]
pub use self::fake::*;
