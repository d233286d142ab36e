//! Template catalogue: static game data resolved against a translator.
//!
//! The raw tables hold translation keys. [`Catalogue::resolve`] turns them
//! into display strings once, which is what the recomputation rules and the
//! wizard flows consume.

pub mod divine;
pub mod playbooks;
pub mod slots;
pub mod tables;
pub mod templates;

use std::collections::HashMap;

use crate::items::{ItemCategory, ItemOptions};
use crate::value_objects::{FieldMap, RowRecord};
use crate::DomainError;

pub use slots::ItemSlotCatalogue;
pub use templates::{DivineTemplate, ItemLoadout, ItemSpec, PlaybookTemplate};

/// Prefix of the visible marker for translation keys the translator does not know.
pub const UNDEFINED_TRANSLATION: &str = "TRANSLATION_KEY_UNDEFINED";

/// A translation, or the visible sentinel `TRANSLATION_KEY_UNDEFINED: <key>`
/// when the lookup came back empty.
pub fn translation_or_sentinel(key: &str, found: Option<String>) -> String {
    match found {
        Some(text) if !text.is_empty() => text,
        _ => format!("{UNDEFINED_TRANSLATION}: {key}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Playbook,
    Divine,
}

/// Items of a template with display names filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLoadout {
    pub light: Vec<ItemOptions>,
    pub normal: Vec<ItemOptions>,
    pub heavy: Vec<ItemOptions>,
    pub utility: Vec<ItemOptions>,
}

impl ResolvedLoadout {
    fn resolve(loadout: &ItemLoadout, translate: &dyn Fn(&str) -> String) -> Self {
        let resolve_all =
            |specs: &[ItemSpec]| specs.iter().map(|s| s.resolve(translate)).collect::<Vec<_>>();
        Self {
            light: resolve_all(loadout.light),
            normal: resolve_all(loadout.normal),
            heavy: resolve_all(loadout.heavy),
            utility: resolve_all(loadout.utility),
        }
    }

    pub fn category(&self, category: ItemCategory) -> &[ItemOptions] {
        match category {
            ItemCategory::Light => &self.light,
            ItemCategory::Normal => &self.normal,
            ItemCategory::Heavy => &self.heavy,
            ItemCategory::Utility => &self.utility,
        }
    }
}

/// A template ready to be applied to a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTemplate {
    pub id: String,
    pub kind: TemplateKind,
    /// Attributes written when the template is applied
    pub base: FieldMap,
    /// Rows for the `ability` repeating section
    pub abilities: Vec<RowRecord>,
    pub items: ResolvedLoadout,
    pub specialist_action: Option<String>,
    pub starting_actions: FieldMap,
}

impl SheetTemplate {
    fn from_playbook(playbook: &PlaybookTemplate, translate: &dyn Fn(&str) -> String) -> Self {
        let id = playbook.id;
        let mut base: FieldMap = playbook
            .base
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        base.insert("playbook".into(), translate(&format!("playbook_{id}")));
        base.insert("sheet_type".into(), "character".into());
        base.insert("xp_condition".into(), translate(&format!("xp_condition_{id}")));
        if let Some(action) = playbook.specialist_action {
            base.insert("setting_show_advanced_abilities".into(), "1".into());
            base.insert("setting_specialist_action".into(), action.into());
        }

        let mut abilities = ability_rows("playbook_ability", playbook.abilities, translate);
        // The medic starts with their first ability already taken
        if id == "medic" {
            if let Some(first) = abilities.first_mut() {
                first.set("check", "1");
            }
        }

        Self {
            id: id.to_string(),
            kind: TemplateKind::Playbook,
            base,
            abilities,
            items: ResolvedLoadout::resolve(&playbook.items, translate),
            specialist_action: playbook.specialist_action.map(str::to_string),
            starting_actions: playbook
                .starting_actions
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn from_divine(divine: &DivineTemplate, translate: &dyn Fn(&str) -> String) -> Self {
        let base: FieldMap = divine
            .base
            .iter()
            .map(|(k, v)| {
                let value = if DivineTemplate::TRANSLATED_BASE.contains(k) {
                    translate(v)
                } else {
                    v.to_string()
                };
                (k.to_string(), value)
            })
            .collect();

        let mut abilities = ability_rows("divine_ability", divine.abilities, translate);
        if base.get("sheet_type").map(String::as_str) == Some("broken") {
            if let Some(first) = abilities.first_mut() {
                first.set("check", "1");
            }
        }

        Self {
            id: divine.id.to_string(),
            kind: TemplateKind::Divine,
            base,
            abilities,
            items: ResolvedLoadout::default(),
            specialist_action: None,
            starting_actions: FieldMap::new(),
        }
    }

    /// Names of the granted ability rows, in order.
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().filter_map(RowRecord::name).collect()
    }
}

fn ability_rows(
    key_prefix: &str,
    keys: &[&str],
    translate: &dyn Fn(&str) -> String,
) -> Vec<RowRecord> {
    keys.iter()
        .map(|key| {
            RowRecord::named(translate(&format!("{key_prefix}_{key}")))
                .with("description", translate(&format!("{key_prefix}_{key}_desc")))
        })
        .collect()
}

/// Every template plus the lookups derived from them.
#[derive(Debug, Clone)]
pub struct Catalogue {
    playbooks: Vec<SheetTemplate>,
    divine: Vec<SheetTemplate>,
    ability_descriptions: HashMap<String, String>,
    slots: ItemSlotCatalogue,
}

impl Catalogue {
    /// Resolve every template. `translate` must already apply the
    /// undefined-key sentinel; see [`translation_or_sentinel`].
    pub fn resolve(translate: impl Fn(&str) -> String) -> Self {
        let translate: &dyn Fn(&str) -> String = &translate;
        let playbooks: Vec<SheetTemplate> = playbooks::PLAYBOOKS
            .iter()
            .map(|p| SheetTemplate::from_playbook(p, translate))
            .collect();
        let divine: Vec<SheetTemplate> = divine::DIVINE
            .iter()
            .map(|d| SheetTemplate::from_divine(d, translate))
            .collect();

        let ability_descriptions = playbooks
            .iter()
            .flat_map(|p| &p.abilities)
            .filter_map(|row| {
                let description = row.get("description")?;
                Some((row.name()?.to_lowercase(), description.to_string()))
            })
            .collect();

        Self {
            playbooks,
            divine,
            ability_descriptions,
            slots: ItemSlotCatalogue::standard(),
        }
    }

    pub fn playbook(&self, id: &str) -> Result<&SheetTemplate, DomainError> {
        self.playbooks
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::unknown_template(id))
    }

    pub fn divine(&self, id: &str) -> Result<&SheetTemplate, DomainError> {
        self.divine
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DomainError::unknown_template(id))
    }

    pub fn playbooks(&self) -> &[SheetTemplate] {
        &self.playbooks
    }

    pub fn divine_templates(&self) -> &[SheetTemplate] {
        &self.divine
    }

    /// Description of a playbook ability by its display name, ignoring case.
    pub fn ability_description(&self, name: &str) -> Option<&str> {
        self.ability_descriptions
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    pub fn slots(&self) -> &ItemSlotCatalogue {
        &self.slots
    }
}
