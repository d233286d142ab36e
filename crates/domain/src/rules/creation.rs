//! Field bundles written by the creation and promotion wizards.

use crate::catalogue::tables::ACTIONS;
use crate::catalogue::{ItemSlotCatalogue, ResolvedLoadout, SheetTemplate};
use crate::items::{ItemAllocator, ItemCategory, ItemKind};
use crate::rules::trackers::changed_attribute_list;
use crate::value_objects::{flag, parse_int, FieldMap, RowRecord};

/// Highest rating a specialist action reaches through the wizards.
pub const MAX_SPECIALIST_RATING: i64 = 3;

/// Specialist action rating after a creation or promotion raised it by one.
pub fn raised_specialist_action(current: &str) -> i64 {
    (parse_int(current) + 1).min(MAX_SPECIALIST_RATING)
}

/// Zero every action the player never touched, then apply the template ratings.
pub fn starting_actions(changed_ledger: &str, template: &SheetTemplate) -> FieldMap {
    let touched = changed_attribute_list(changed_ledger);
    let mut actions: FieldMap = ACTIONS
        .iter()
        .filter(|action| !touched.contains(*action))
        .map(|action| (action.to_string(), "0".to_string()))
        .collect();
    actions.extend(template.starting_actions.clone());
    actions
}

/// Template base attributes over the defaults every sheet starts from.
///
/// Creation also resets the rookie/soldier progression flags; promotion keeps them.
pub fn base_attributes(template: &SheetTemplate, is_promotion: bool) -> FieldMap {
    let mut fields = FieldMap::from([
        ("broken_info".to_string(), String::new()),
        ("setting_show_advanced_abilities".to_string(), "0".to_string()),
        ("setting_show_alchemicals".to_string(), "0".to_string()),
        ("setting_specialist_action".to_string(), "-".to_string()),
        ("xp_condition".to_string(), String::new()),
    ]);
    if !is_promotion {
        for name in [
            "setting_extra_trauma",
            "show_ability_divider",
            "show_not_a_rookie_anymore",
            "show_specialist_training",
            "upgraded_from_rookie",
            "upgraded_from_soldier",
        ] {
            fields.insert(name.to_string(), "0".to_string());
        }
    }
    fields.extend(template.base.clone());
    fields
}

/// Everything an item regeneration writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRegeneration {
    /// Slot visibility, names and extra text for the fixed loads
    pub fields: FieldMap,
    /// Rows to reconcile into the `item` repeating section
    pub utility_rows: Vec<RowRecord>,
}

/// Hide every catalogue slot, then show and fill the slots `loadout` grants.
///
/// The granted slots come from fresh allocators scoped to this call, so a
/// regeneration derives the same prefixes no matter how many ran before it.
pub fn item_regeneration(slots: &ItemSlotCatalogue, loadout: &ResolvedLoadout) -> ItemRegeneration {
    let mut fields = FieldMap::new();
    for category in ItemCategory::LOADOUTS {
        for slot in slots.slots(category) {
            fields.insert(slot.field("show"), "0".to_string());
        }

        let mut allocator = ItemAllocator::new(category);
        for item in allocator.create_all(loadout.category(category)) {
            fields.insert(item.field("show"), "1".to_string());
            match item.kind() {
                ItemKind::Single(single) => {
                    if let Some(name) = single.name.as_deref().filter(|n| !n.is_empty()) {
                        fields.insert(item.field("name"), name.to_string());
                    }
                }
                ItemKind::Double(_) => {
                    let first = item.first_item().and_then(|i| i.name().map(str::to_string));
                    let second = item.second_item().and_then(|i| i.name().map(str::to_string));
                    fields.insert(item.field("name"), first.unwrap_or_default());
                    fields.insert(item.field("name2"), second.unwrap_or_default());
                }
            }
            if item.has_extra_text() {
                fields.insert(item.field("extra"), item.extra_text().to_string());
            }
        }
    }

    let mut utility = ItemAllocator::new(ItemCategory::Utility);
    let utility_rows = utility
        .create_all(loadout.category(ItemCategory::Utility))
        .into_iter()
        .map(|item| {
            let mut row = RowRecord::new();
            if let Some(name) = item.name() {
                row.set(RowRecord::NAME, name);
            }
            row.with("num_boxes", item.boxes().to_string())
                .with("num_uses", item.uses().to_string())
                .with("diamond", flag(item.diamond()))
                .with("layout_chosen", "1")
        })
        .collect();

    ItemRegeneration {
        fields,
        utility_rows,
    }
}

/// Promotion from rookie to soldier: one more trauma box, menu closed.
pub fn rookie_promotion_fields(extra_trauma: &str) -> FieldMap {
    FieldMap::from([
        (
            "setting_extra_trauma".to_string(),
            (parse_int(extra_trauma) + 1).to_string(),
        ),
        ("show_menu".to_string(), "0".to_string()),
        ("upgraded_from_rookie".to_string(), "1".to_string()),
    ])
}

/// Promotion from soldier to a specialist: menu closed.
pub fn soldier_promotion_applied() -> FieldMap {
    FieldMap::from([
        ("show_menu".to_string(), "0".to_string()),
        ("upgraded_from_soldier".to_string(), "1".to_string()),
    ])
}

/// `version` and its display line `character_sheet`.
pub fn sheet_version_fields(version: &str, title: &str) -> FieldMap {
    FieldMap::from([
        ("version".to_string(), version.to_string()),
        ("character_sheet".to_string(), format!("{title} v{version}")),
    ])
}
