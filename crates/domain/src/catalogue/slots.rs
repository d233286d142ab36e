//! Every fixed item slot the sheet can show.
//!
//! Regenerating items hides all of these first, then shows the subset a
//! template grants. Both passes must derive the same prefixes, so the granted
//! subset is allocated with a fresh allocator per pass while this catalogue
//! keeps its own, built once.

use super::templates::ItemSpec;
use crate::items::{Item, ItemAllocator, ItemCategory};

const PLAIN: ItemSpec = ItemSpec::EMPTY;
const FINE: ItemSpec = ItemSpec::EMPTY.fine();
/// Marks the slot as carrying descriptive text; the content is irrelevant here.
const DESC: &str = "desc";

const LIGHT_SLOTS: [ItemSpec; 15] = [
    FINE,
    FINE,
    FINE.double(),
    FINE.uses(3),
    FINE.extra(DESC),
    FINE.boxes(1),
    PLAIN,
    PLAIN,
    PLAIN,
    PLAIN,
    PLAIN.uses(1),
    PLAIN.uses(3),
    PLAIN.uses(4),
    PLAIN.uses(5),
    PLAIN.boxes(1),
];

const NORMAL_SLOTS: [ItemSpec; 11] = [
    FINE,
    FINE.double(),
    FINE.extra(DESC),
    FINE.uses(3),
    PLAIN,
    PLAIN.double(),
    PLAIN.extra(DESC),
    PLAIN.boxes(1),
    PLAIN.uses(1),
    PLAIN.uses(3),
    PLAIN.uses(5),
];

const HEAVY_SLOTS: [ItemSpec; 8] = [
    FINE,
    FINE.extra(DESC),
    FINE.double(),
    FINE.double().extra(DESC),
    PLAIN,
    PLAIN,
    PLAIN.uses(1),
    PLAIN.uses(1),
];

/// The fixed slots of the light, normal and heavy loads.
#[derive(Debug, Clone)]
pub struct ItemSlotCatalogue {
    light: Vec<Item>,
    normal: Vec<Item>,
    heavy: Vec<Item>,
}

impl ItemSlotCatalogue {
    pub fn standard() -> Self {
        Self {
            light: allocate(ItemCategory::Light, &LIGHT_SLOTS),
            normal: allocate(ItemCategory::Normal, &NORMAL_SLOTS),
            heavy: allocate(ItemCategory::Heavy, &HEAVY_SLOTS),
        }
    }

    /// Slots of one category. Utility items have no fixed slots.
    pub fn slots(&self, category: ItemCategory) -> &[Item] {
        match category {
            ItemCategory::Light => &self.light,
            ItemCategory::Normal => &self.normal,
            ItemCategory::Heavy => &self.heavy,
            ItemCategory::Utility => &[],
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &Item> {
        self.light.iter().chain(&self.normal).chain(&self.heavy)
    }

    /// Whether an item's prefix names a slot the sheet can show.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.all().any(|slot| slot.prefix() == prefix)
    }
}

impl Default for ItemSlotCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

fn allocate(category: ItemCategory, specs: &[ItemSpec]) -> Vec<Item> {
    let mut allocator = ItemAllocator::new(category);
    specs.iter().map(|spec| allocator.create(&spec.options())).collect()
}
