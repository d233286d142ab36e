//! Fixed game tables: attributes and their actions, trackers, heritages,
//! legion playbooks and their starting rows.

use serde::{Deserialize, Serialize};

/// Resistance attribute, each backed by a fixed list of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Insight,
    Prowess,
    Resolve,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Insight, Attribute::Prowess, Attribute::Resolve];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Insight => "insight",
            Attribute::Prowess => "prowess",
            Attribute::Resolve => "resolve",
        }
    }

    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Attribute::Insight => &["research", "scout", "rig"],
            Attribute::Prowess => &["wreck", "skirmish", "shoot", "maneuver"],
            Attribute::Resolve => &["consort", "discipline", "marshal", "sway"],
        }
    }

    /// `<attr>_bonus`
    pub fn bonus_field(&self) -> String {
        format!("{}_bonus", self.as_str())
    }

    /// `<attr>_formula`
    pub fn formula_field(&self) -> String {
        formula_field(self.as_str())
    }
}

/// `<name>_formula`, the roll-formula companion of a rated field.
pub fn formula_field(name: &str) -> String {
    format!("{name}_formula")
}

/// Every regular action, in attribute order.
pub const ACTIONS: [&str; 11] = [
    "research",
    "scout",
    "rig",
    "wreck",
    "skirmish",
    "shoot",
    "maneuver",
    "consort",
    "discipline",
    "marshal",
    "sway",
];

pub const SPECIALIST_ACTIONS: [&str; 7] =
    ["aim", "anchor", "channels", "doctor", "grit", "scrounge", "weave"];

pub fn is_specialist_action(name: &str) -> bool {
    SPECIALIST_ACTIONS.contains(&name)
}

pub const TRAUMAS: [&str; 8] = [
    "cold", "haunted", "obsessed", "paranoid", "reckless", "soft", "unstable", "vicious",
];

pub const BLIGHTS: [&str; 8] = [
    "anathema", "host", "hunger", "miasma", "mutation", "rage", "rot", "visions",
];

/// `trauma_<name>` for every trauma.
pub fn trauma_fields() -> Vec<String> {
    TRAUMAS.iter().map(|t| format!("trauma_{t}")).collect()
}

/// `blight_<name>` for every blight.
pub fn blight_fields() -> Vec<String> {
    BLIGHTS.iter().map(|b| format!("blight_{b}")).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heritage {
    pub name: &'static str,
    pub traits: [&'static str; 4],
}

impl Heritage {
    /// `show_heritage_<name>`
    pub fn show_field(&self) -> String {
        format!("show_heritage_{}", self.name)
    }

    pub fn trait_fields(&self) -> impl Iterator<Item = String> + '_ {
        self.traits.iter().map(|t| trait_field(t))
    }
}

pub const HERITAGES: [Heritage; 4] = [
    Heritage {
        name: "bartan",
        traits: ["warm", "pious", "stoic", "educated"],
    },
    Heritage {
        name: "panyar",
        traits: ["artisan", "traveler", "shrewd", "marked"],
    },
    Heritage {
        name: "orite",
        traits: ["noble", "connected", "vengeful", "stern"],
    },
    Heritage {
        name: "zemyati",
        traits: ["tough", "bold", "loyal", "stubborn"],
    },
];

/// `trait_<name>`
pub fn trait_field(name: &str) -> String {
    format!("trait_{name}")
}

/// Every heritage trait field, heritage by heritage.
pub fn heritage_trait_fields() -> Vec<String> {
    HERITAGES.iter().flat_map(|h| h.trait_fields()).collect()
}

pub const SETTING_NUM_HERITAGE_TRAITS: &str = "setting_num_heritage_traits";

/// Translation key of the rookie ability granting extra heritage traits.
pub const ABILITY_PLUS_HERITAGE: &str = "playbook_ability_every_inch_a";

/// Translation key of the rookie ability granting an extra trauma box.
pub const ABILITY_ROOKIE_EXTRA_TRAUMA: &str = "playbook_ability_gotta_make_it_out_alive";

pub const LEGION_PLAYBOOKS: [&str; 5] =
    ["commander", "marshal", "quartermaster", "lorekeeper", "spymaster"];

/// Translation keys of the squads a new marshal sheet starts with.
pub const STARTING_SQUADS: [&str; 6] = [
    "ember_wolves",
    "shattered_lions",
    "grinning_ravens",
    "ghost_owls",
    "star_vipers",
    "silver_stags",
];

/// Translation keys of the materiel a new quartermaster sheet starts with.
/// Duplicates are intentional, each one is its own row.
pub const STARTING_MATERIEL: [&str; 8] = [
    "horses",
    "black_shot",
    "horses",
    "black_shot",
    "horses",
    "black_shot",
    "religious_supplies",
    "religious_supplies",
];

/// Sheet kinds other than the legion playbooks.
pub const CHARACTER_SHEET_TYPES: [&str; 3] = ["character", "broken", "chosen"];

/// Whether `sheet_type` holds a kind the sheet knows how to render.
pub fn is_valid_sheet_type(sheet_type: &str) -> bool {
    CHARACTER_SHEET_TYPES.contains(&sheet_type) || LEGION_PLAYBOOKS.contains(&sheet_type)
}

/// Free-text fields whose surrounding whitespace is trimmed after player edits.
/// Repeating entries use the `repeating_<section>:<field>` watch form.
pub const AUTO_EXPAND_FIELDS: [&str; 6] = [
    "repeating_ability:name",
    "repeating_ability:description",
    "repeating_clock:name",
    "char_notes",
    "xp_condition",
    "xp_condition_extra",
];
