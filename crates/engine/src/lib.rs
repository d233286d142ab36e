//! Legion sheet engine library.
//!
//! The reactive side of the sheet: field changes come in, derived fields,
//! repeating rows and menu state go out.
//!
//! ## Structure
//!
//! - `reactive/` - Trigger registry, dispatcher and the context rules run in
//! - `use_cases/` - Derivations, sheet-opened work and the menu wizards
//! - `infrastructure/` - Store and clock ports, the in-memory store, config
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod reactive;
pub mod use_cases;

/// Shared helpers for the flow tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
