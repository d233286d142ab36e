use std::collections::{BTreeMap, HashMap};

use super::{Item, ItemCategory, ItemOptions, ItemShape, ItemSlot};

/// Assigns collision-free ordinals to items of one category.
///
/// Items with the same [`ItemShape`] receive ordinals `0, 1, 2, ...` in
/// request order. Counters only grow; the only reset is a new allocator.
/// Scope one allocator to one regeneration pass so ordinals never drift
/// between passes.
#[derive(Debug, Clone)]
pub struct ItemAllocator {
    category: ItemCategory,
    counts: HashMap<ItemShape, u32>,
}

impl ItemAllocator {
    pub fn new(category: ItemCategory) -> Self {
        Self {
            category,
            counts: HashMap::new(),
        }
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Create a fully-assigned item. Never fails: a malformed bag yields a
    /// degenerate but valid item.
    pub fn create(&mut self, options: &ItemOptions) -> Item {
        let shape = ItemShape::of(options);
        let ordinal = self.next_ordinal(shape);
        let slot = ItemSlot {
            category: self.category,
            shape,
            ordinal,
        };
        Item::assemble(slot, options)
    }

    pub fn create_all<'a>(&mut self, options: impl IntoIterator<Item = &'a ItemOptions>) -> Vec<Item> {
        options.into_iter().map(|o| self.create(o)).collect()
    }

    /// Snapshot of the next free ordinal per identity key.
    pub fn counts(&self) -> BTreeMap<String, u32> {
        self.counts
            .iter()
            .map(|(shape, count)| (shape.key(), *count))
            .collect()
    }

    fn next_ordinal(&mut self, shape: ItemShape) -> u32 {
        let count = self.counts.entry(shape).or_insert(0);
        let ordinal = *count;
        *count += 1;
        ordinal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn light_fine_items_get_sequential_prefixes() {
        let mut light = ItemAllocator::new(ItemCategory::Light);
        let first = light.create(&ItemOptions::new().fine());
        let second = light.create(&ItemOptions::new().fine());
        let third = light.create(&ItemOptions::new().fine().uses(3));

        assert_eq!(first.prefix(), "item_light_si_fine_0");
        assert_eq!(second.prefix(), "item_light_si_fine_1");
        assert_eq!(third.prefix(), "item_light_si_fine_3uses_0");
    }

    #[test]
    fn names_share_an_ordinal_sequence() {
        let mut normal = ItemAllocator::new(ItemCategory::Normal);
        let armor = normal.create(&ItemOptions::named("armor"));
        let tonics = normal.create(&ItemOptions::named("tonics"));
        assert_eq!(armor.key(), tonics.key());
        assert_eq!(armor.index(), 0);
        assert_eq!(tonics.index(), 1);
    }

    #[test]
    fn counts_snapshot_reflects_next_free_ordinal() {
        let mut heavy = ItemAllocator::new(ItemCategory::Heavy);
        heavy.create(&ItemOptions::new());
        heavy.create(&ItemOptions::new());
        heavy.create(&ItemOptions::paired("a", "b").fine());

        let counts = heavy.counts();
        assert_eq!(counts.get("si|false|0|0|false|false"), Some(&2));
        assert_eq!(counts.get("do|true|0|0|false|false"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn fresh_allocators_start_over() {
        let mut a = ItemAllocator::new(ItemCategory::Light);
        let mut b = ItemAllocator::new(ItemCategory::Light);
        a.create(&ItemOptions::new());
        assert_eq!(b.create(&ItemOptions::new()).index(), 0);
    }

    #[test]
    fn paired_item_halves_follow_the_pair_index() {
        let mut light = ItemAllocator::new(ItemCategory::Light);
        light.create(&ItemOptions::paired("a", "b"));
        let pair = light.create(&ItemOptions::paired("c", "d"));
        assert_eq!(pair.index(), 1);
        assert_eq!(pair.first_item().map(|i| i.index()), Some(1));
        assert_eq!(pair.second_item().map(|i| i.index()), Some(1));
    }

    fn arb_options() -> impl Strategy<Value = ItemOptions> {
        (
            any::<bool>(),
            any::<bool>(),
            0u32..4,
            0u32..6,
            any::<bool>(),
            proptest::option::of("[a-z]{0,8}"),
            "[a-z ]{0,8}",
        )
            .prop_map(|(double, is_fine, boxes, uses, diamond, name, extra)| ItemOptions {
                double,
                name: name.clone(),
                first_name: name.clone(),
                second_name: name,
                extra_text: extra,
                is_fine,
                boxes,
                uses,
                diamond,
            })
    }

    proptest! {
        #[test]
        fn identical_shapes_yield_sequential_unique_prefixes(options in arb_options(), n in 1usize..12) {
            let mut allocator = ItemAllocator::new(ItemCategory::Normal);
            let items: Vec<Item> = (0..n).map(|_| allocator.create(&options)).collect();

            let ordinals: Vec<u32> = items.iter().map(Item::index).collect();
            let expected: Vec<u32> = (0..n as u32).collect();
            prop_assert_eq!(ordinals, expected);

            let prefixes: HashSet<String> = items.iter().map(Item::prefix).collect();
            prop_assert_eq!(prefixes.len(), n);
        }

        #[test]
        fn key_ignores_name_and_extra_text_content(
            options in arb_options(),
            other_name in "[a-z]{1,8}",
            other_extra in "[a-z]{1,8}",
        ) {
            let mut renamed = options.clone();
            renamed.name = Some(other_name.clone());
            renamed.first_name = Some(other_name.clone());
            renamed.second_name = Some(other_name);
            if !renamed.extra_text.is_empty() {
                renamed.extra_text = other_extra;
            }

            let mut allocator = ItemAllocator::new(ItemCategory::Light);
            let a = allocator.create(&options);
            let b = allocator.create(&renamed);
            prop_assert_eq!(a.key(), b.key());
            prop_assert_eq!(b.index(), a.index() + 1);
        }

        #[test]
        fn pair_index_propagates_to_both_halves(k in 0u32..20) {
            let mut allocator = ItemAllocator::new(ItemCategory::Heavy);
            let mut pair = allocator.create(&ItemOptions::paired("x", "y"));
            for _ in 0..k {
                pair = allocator.create(&ItemOptions::paired("x", "y"));
            }
            prop_assert_eq!(pair.index(), k);
            prop_assert_eq!(pair.first_item().map(|i| i.index()), Some(k));
            prop_assert_eq!(pair.second_item().map(|i| i.index()), Some(k));
        }

        #[test]
        fn distinct_items_never_share_a_prefix(batch in proptest::collection::vec(arb_options(), 1..30)) {
            let mut allocator = ItemAllocator::new(ItemCategory::Light);
            let items = allocator.create_all(&batch);
            let prefixes: HashSet<String> = items.iter().map(Item::prefix).collect();
            prop_assert_eq!(prefixes.len(), items.len());
        }
    }
}
