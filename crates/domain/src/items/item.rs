//! Equipment items and their derived store namespace.
//!
//! An [`Item`] is an immutable value built once, fully formed, by
//! [`super::ItemAllocator::create`]: its [`ItemSlot`] (category, shape and
//! ordinal) exists before the item does, so no field name can ever be derived
//! from an item whose index or prefix has not been assigned yet.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ItemOptions;

/// Load category an item slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Light,
    Normal,
    Heavy,
    /// Free-form utility rows, kept in a repeating section instead of fixed slots
    Utility,
}

impl ItemCategory {
    /// The three categories that own fixed slots on the sheet.
    pub const LOADOUTS: [ItemCategory; 3] =
        [ItemCategory::Light, ItemCategory::Normal, ItemCategory::Heavy];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Light => "light",
            ItemCategory::Normal => "normal",
            ItemCategory::Heavy => "heavy",
            ItemCategory::Utility => "utility",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of item base types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemBaseType {
    Single,
    Double,
}

impl ItemBaseType {
    /// Short label used in identity keys and field prefixes.
    pub fn label(&self) -> &'static str {
        match self {
            ItemBaseType::Single => "si",
            ItemBaseType::Double => "do",
        }
    }
}

/// Identity of an item for ordinal assignment.
///
/// Names and the content of the extra text do not take part: two items with
/// the same shape are "the same kind" and share one ordinal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemShape {
    pub base: ItemBaseType,
    pub is_fine: bool,
    pub boxes: u32,
    pub uses: u32,
    pub diamond: bool,
    pub has_extra_text: bool,
}

impl ItemShape {
    /// Shape of the item the options would create.
    pub fn of(options: &ItemOptions) -> Self {
        let has_extra_text = !options.extra_text.is_empty();
        if options.double {
            Self {
                base: ItemBaseType::Double,
                is_fine: options.is_fine,
                boxes: 0,
                uses: 0,
                diamond: false,
                has_extra_text,
            }
        } else {
            Self {
                base: ItemBaseType::Single,
                is_fine: options.is_fine,
                boxes: options.boxes,
                uses: options.uses,
                diamond: options.diamond,
                has_extra_text,
            }
        }
    }

    /// Canonical key: `base|fine|boxes|uses|diamond|desc`, e.g. `si|true|0|3|false|false`.
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.base.label(),
            self.is_fine,
            self.boxes,
            self.uses,
            self.diamond,
            self.has_extra_text
        )
    }

    /// Human-readable markers in their fixed order: base, `fine`, `<n>box`,
    /// `<n>uses`, `dia`, `desc`. The order is part of every generated field
    /// name and must not change.
    pub fn markers(&self) -> Vec<String> {
        let mut markers = vec![self.base.label().to_string()];
        if self.is_fine {
            markers.push("fine".to_string());
        }
        if self.boxes > 0 {
            markers.push(format!("{}box", self.boxes));
        }
        if self.uses > 0 {
            markers.push(format!("{}uses", self.uses));
        }
        if self.diamond {
            markers.push("dia".to_string());
        }
        if self.has_extra_text {
            markers.push("desc".to_string());
        }
        markers
    }
}

impl fmt::Display for ItemShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Typed record of where an item lives in the store.
///
/// The single source of every item field name: `prefix()` and `field()` are
/// the only places the naming convention is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemSlot {
    pub category: ItemCategory,
    pub shape: ItemShape,
    pub ordinal: u32,
}

impl ItemSlot {
    /// `<markers>_<ordinal>`, e.g. `si_fine_3uses_0`.
    pub fn human_readable(&self) -> String {
        let mut parts = self.shape.markers();
        parts.push(self.ordinal.to_string());
        parts.join("_")
    }

    /// `item_<category>_<markers>_<ordinal>`
    pub fn prefix(&self) -> String {
        format!("item_{}_{}", self.category, self.human_readable())
    }

    /// `<prefix>_<suffix>`, e.g. `item_light_si_fine_0_show`.
    pub fn field(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix(), suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleItem {
    pub name: Option<String>,
    pub boxes: u32,
    pub uses: u32,
    pub diamond: bool,
}

/// A paired item. It owns no boxes or uses of its own; each half is a one-box single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleItem {
    pub first_name: Option<String>,
    pub second_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Single(SingleItem),
    Double(DoubleItem),
}

/// One equipment slot instance with its assigned slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    slot: ItemSlot,
    is_fine: bool,
    extra_text: String,
    kind: ItemKind,
}

impl Item {
    /// Assemble an item for an already-allocated slot.
    pub(crate) fn assemble(slot: ItemSlot, options: &ItemOptions) -> Self {
        let kind = if options.double {
            ItemKind::Double(DoubleItem {
                first_name: options.first_name.clone(),
                second_name: options.second_name.clone(),
            })
        } else {
            ItemKind::Single(SingleItem {
                name: options.name.clone(),
                boxes: options.boxes,
                uses: options.uses,
                diamond: options.diamond,
            })
        };
        Self {
            slot,
            is_fine: options.is_fine,
            extra_text: options.extra_text.clone(),
            kind,
        }
    }

    pub fn slot(&self) -> &ItemSlot {
        &self.slot
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn category(&self) -> ItemCategory {
        self.slot.category
    }

    pub fn index(&self) -> u32 {
        self.slot.ordinal
    }

    pub fn prefix(&self) -> String {
        self.slot.prefix()
    }

    pub fn field(&self, suffix: &str) -> String {
        self.slot.field(suffix)
    }

    pub fn base_type(&self) -> ItemBaseType {
        match self.kind {
            ItemKind::Single(_) => ItemBaseType::Single,
            ItemKind::Double(_) => ItemBaseType::Double,
        }
    }

    pub fn is_fine(&self) -> bool {
        self.is_fine
    }

    pub fn extra_text(&self) -> &str {
        &self.extra_text
    }

    pub fn has_extra_text(&self) -> bool {
        !self.extra_text.is_empty()
    }

    /// Only single items carry a name of their own.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Single(single) => single.name.as_deref(),
            ItemKind::Double(_) => None,
        }
    }

    pub fn boxes(&self) -> u32 {
        match &self.kind {
            ItemKind::Single(single) => single.boxes,
            ItemKind::Double(_) => 0,
        }
    }

    pub fn uses(&self) -> u32 {
        match &self.kind {
            ItemKind::Single(single) => single.uses,
            ItemKind::Double(_) => 0,
        }
    }

    pub fn diamond(&self) -> bool {
        match &self.kind {
            ItemKind::Single(single) => single.diamond,
            ItemKind::Double(_) => false,
        }
    }

    /// Identity shape computed from the item's own attributes.
    pub fn shape(&self) -> ItemShape {
        ItemShape {
            base: self.base_type(),
            is_fine: self.is_fine,
            boxes: self.boxes(),
            uses: self.uses(),
            diamond: self.diamond(),
            has_extra_text: self.has_extra_text(),
        }
    }

    pub fn key(&self) -> String {
        self.shape().key()
    }

    pub fn human_readable_prefix(&self) -> String {
        self.slot.human_readable()
    }

    /// First half of a paired item, sharing the pair's slot.
    pub fn first_item(&self) -> Option<Item> {
        match &self.kind {
            ItemKind::Double(double) => Some(self.half(double.first_name.clone())),
            ItemKind::Single(_) => None,
        }
    }

    /// Second half of a paired item, sharing the pair's slot.
    pub fn second_item(&self) -> Option<Item> {
        match &self.kind {
            ItemKind::Double(double) => Some(self.half(double.second_name.clone())),
            ItemKind::Single(_) => None,
        }
    }

    fn half(&self, name: Option<String>) -> Item {
        Item {
            slot: self.slot,
            is_fine: self.is_fine,
            extra_text: String::new(),
            kind: ItemKind::Single(SingleItem {
                name,
                boxes: 1,
                uses: 0,
                diamond: false,
            }),
        }
    }
}
