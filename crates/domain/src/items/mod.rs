//! Equipment item model and per-category ordinal allocation.

mod allocator;
mod item;
mod options;

pub use allocator::ItemAllocator;
pub use item::{DoubleItem, Item, ItemBaseType, ItemCategory, ItemKind, ItemShape, ItemSlot, SingleItem};
pub use options::ItemOptions;
