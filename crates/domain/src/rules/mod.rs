//! Pure derivation rules.
//!
//! Each rule reads a [`crate::FieldValues`] snapshot and returns the fields it
//! would write. Nothing here touches the store; the engine decides which of
//! the outputs actually changed.

pub mod creation;
pub mod formula;
pub mod heritage;
pub mod promotion;
pub mod reconcile;
pub mod resistance;
pub mod trackers;
