//! Recomputation engine.
//!
//! ## Structure
//!
//! - `trigger` - Watch patterns, plain or `repeating_<section>:<field>`
//! - `registry` - Ordered rules, sheet-opened actions and buttons
//! - `context` - Store access for one rule run, with diff-filtered writes
//! - `dispatcher` - FIFO event loop with cascade guard and click throttle

mod context;
mod dispatcher;
mod error;
mod event;
mod registry;
mod throttle;
mod trigger;

pub use context::SheetContext;
pub use dispatcher::{DispatchReport, SheetEngine};
pub use error::EngineError;
pub use event::{ChangeEvent, SourceType};
pub use registry::{ChangeRule, RegisteredRule, RuleRegistry, SheetAction};
pub use throttle::ButtonThrottle;
pub use trigger::{Trigger, TriggerMatch};
