// Port traits define the full contract - some methods are only used by adapters
#![allow(dead_code)]

//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The attribute store the sheet lives in (Roll20 in production, memory in tests)
//! - Clock/Random (for testing)

mod error;
mod store;
mod testing;

pub use error::StoreError;
pub use store::{FieldChange, SheetStore, WriteOptions};
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use store::MockSheetStore;
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
