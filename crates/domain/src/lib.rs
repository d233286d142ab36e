//! Legion sheet domain: item model, template catalogue and derivation rules.
//!
//! Everything in this crate is synchronous and free of I/O. The engine crate
//! owns the store, the event loop and the wizards that stitch these pieces
//! together.

pub mod catalogue;
pub mod error;
pub mod ids;
pub mod items;
pub mod rules;
pub mod value_objects;

pub use catalogue::{translation_or_sentinel, Catalogue, ItemSlotCatalogue, SheetTemplate, TemplateKind};
pub use error::DomainError;
pub use ids::RowId;
pub use items::{
    Item, ItemAllocator, ItemBaseType, ItemCategory, ItemKind, ItemOptions, ItemShape, ItemSlot,
};
pub use rules::reconcile::{plan_reconcile, ExistingRow, ReconcilePlan};
pub use value_objects::{
    flag, is_checked, parse_int, repeating_field, row_prefix, section_name, FieldMap, FieldValues,
    RepeatingFieldRef, RowRecord, REPEATING_PREFIX,
};
