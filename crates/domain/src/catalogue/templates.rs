//! Static template shapes. Names in here are translation keys; they become
//! display strings when a [`super::Catalogue`] is resolved.

use crate::items::ItemOptions;

/// Compile-time description of one item a template grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub name: Option<&'static str>,
    pub first_name: Option<&'static str>,
    pub second_name: Option<&'static str>,
    /// Translation key of the descriptive text
    pub extra_text: Option<&'static str>,
    pub is_fine: bool,
    pub boxes: u32,
    pub uses: u32,
    pub diamond: bool,
    pub double: bool,
}

impl ItemSpec {
    pub const EMPTY: ItemSpec = ItemSpec {
        name: None,
        first_name: None,
        second_name: None,
        extra_text: None,
        is_fine: false,
        boxes: 0,
        uses: 0,
        diamond: false,
        double: false,
    };

    pub const fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..Self::EMPTY
        }
    }

    pub const fn paired(first_name: &'static str, second_name: &'static str) -> Self {
        Self {
            first_name: Some(first_name),
            second_name: Some(second_name),
            double: true,
            ..Self::EMPTY
        }
    }

    pub const fn fine(self) -> Self {
        Self {
            is_fine: true,
            ..self
        }
    }

    pub const fn boxes(self, boxes: u32) -> Self {
        Self { boxes, ..self }
    }

    pub const fn uses(self, uses: u32) -> Self {
        Self { uses, ..self }
    }

    pub const fn diamond(self) -> Self {
        Self {
            diamond: true,
            ..self
        }
    }

    pub const fn double(self) -> Self {
        Self {
            double: true,
            ..self
        }
    }

    pub const fn extra(self, key: &'static str) -> Self {
        Self {
            extra_text: Some(key),
            ..self
        }
    }

    /// Options with the raw keys left untranslated.
    pub fn options(&self) -> ItemOptions {
        ItemOptions {
            double: self.double,
            name: self.name.map(str::to_string),
            first_name: self.first_name.map(str::to_string),
            second_name: self.second_name.map(str::to_string),
            extra_text: self.extra_text.unwrap_or_default().to_string(),
            is_fine: self.is_fine,
            boxes: self.boxes,
            uses: self.uses,
            diamond: self.diamond,
        }
    }

    /// Options with names looked up as `item_<name>` and the extra text
    /// looked up by its key. Empty names stay empty.
    pub fn resolve(&self, translate: &dyn Fn(&str) -> String) -> ItemOptions {
        let item_name = |name: &str| {
            if name.is_empty() {
                String::new()
            } else {
                translate(&format!("item_{name}"))
            }
        };
        let mut options = self.options();
        options.name = self.name.map(item_name);
        options.first_name = self.first_name.map(item_name);
        options.second_name = self.second_name.map(item_name);
        options.extra_text = match self.extra_text {
            Some(key) if !key.is_empty() => translate(key),
            _ => String::new(),
        };
        options
    }
}

/// Items granted per load category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLoadout {
    pub light: &'static [ItemSpec],
    pub normal: &'static [ItemSpec],
    pub heavy: &'static [ItemSpec],
    /// Free-form rows of the `item` repeating section
    pub utility: &'static [ItemSpec],
}

impl ItemLoadout {
    pub const NONE: ItemLoadout = ItemLoadout {
        light: &[],
        normal: &[],
        heavy: &[],
        utility: &[],
    };
}

/// A class a soldier can be created as or promoted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybookTemplate {
    pub id: &'static str,
    /// Ability keys, looked up as `playbook_ability_<key>`
    pub abilities: &'static [&'static str],
    pub base: &'static [(&'static str, &'static str)],
    pub items: ItemLoadout,
    pub specialist_action: Option<&'static str>,
    pub starting_actions: &'static [(&'static str, &'static str)],
}

/// A chosen or broken sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivineTemplate {
    pub id: &'static str,
    /// Ability keys, looked up as `divine_ability_<key>`
    pub abilities: &'static [&'static str],
    pub base: &'static [(&'static str, &'static str)],
}

impl DivineTemplate {
    /// Base attributes whose values are translation keys.
    pub const TRANSLATED_BASE: [&'static str; 3] = ["character_name", "broken_name", "broken_info"];
}
