//! Chosen and broken sheets.

use super::templates::DivineTemplate;

pub const SHREYA: DivineTemplate = DivineTemplate {
    id: "shreya",
    abilities: &[
        "book_of_hours",
        "asrika’s_mercy",
        "asrika’s_blessing",
        "asrika’s_tears",
        "anointed_shreya",
        "battle-saint",
        "blood_of_the_chosen",
        "war-saint",
    ],
    base: &[
        ("character_name", "chosen_shreya_name"),
        ("chosen_type", "shreya"),
        ("sheet_type", "chosen"),
    ],
};

pub const HORNED_ONE: DivineTemplate = DivineTemplate {
    id: "horned_one",
    abilities: &[
        "horned_god’s_bounty",
        "horned_god’s_eyes",
        "horned_god’s_thews",
        "shapeshifter",
        "anointed_horned",
        "great_hunter",
        "forest’s_wings",
        "hide_of_the_white_hind",
    ],
    base: &[
        ("character_name", "chosen_horned_one_name"),
        ("chosen_type", "horned_one"),
        ("sheet_type", "chosen"),
    ],
};

pub const ZORA: DivineTemplate = DivineTemplate {
    id: "zora",
    abilities: &[
        "star_of_the_dawn",
        "sacred_seals",
        "living_god’s_fury",
        "living_god’s_kiss",
        "living_god’s_vigor",
        "heart_of_heroes",
        "anointed_zora",
        "blood_of_fire",
    ],
    base: &[
        ("character_name", "chosen_zora_name"),
        ("chosen_type", "zora"),
        ("sheet_type", "chosen"),
    ],
};

pub const BLIGHTER: DivineTemplate = DivineTemplate {
    id: "blighter",
    abilities: &[
        "abominable_science",
        "attrition_strategies",
        "cruel_gluttony",
        "toxic_bile",
        "modern_warfare",
        "scars_of_war",
        "toxic_mutagen",
        "violent_emulsion",
    ],
    base: &[
        ("broken_type", "blighter"),
        ("broken_info", "broken_blighter_info"),
        ("character_name", "broken_blighter"),
        ("sheet_type", "broken"),
    ],
};

pub const BREAKER: DivineTemplate = DivineTemplate {
    id: "breaker",
    abilities: &[
        "the_coven",
        "the_changing_curse",
        "pillar_of_skulls",
        "nature’s_fury",
        "storm_riding",
        "wild_awakening",
        "dark_visions",
        "defilement",
    ],
    base: &[
        ("broken_type", "breaker"),
        ("broken_info", "broken_breaker_info"),
        ("character_name", "broken_breaker"),
        ("sheet_type", "broken"),
    ],
};

pub const RENDER: DivineTemplate = DivineTemplate {
    id: "render",
    abilities: &[
        "the_sworn",
        "the_forge",
        "heartless",
        "spearforge",
        "fury",
        "shredders",
        "forced_march",
        "massacre",
    ],
    base: &[
        ("broken_type", "render"),
        ("broken_info", "broken_render_info"),
        ("character_name", "broken_render"),
        ("sheet_type", "broken"),
    ],
};

pub const DIVINE: [DivineTemplate; 6] = [SHREYA, HORNED_ONE, ZORA, BLIGHTER, BREAKER, RENDER];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_divine_sheet_names_its_character_and_type() {
        for divine in DIVINE {
            let keys: Vec<&str> = divine.base.iter().map(|(k, _)| *k).collect();
            assert!(keys.contains(&"character_name"), "{}", divine.id);
            assert!(keys.contains(&"sheet_type"), "{}", divine.id);
            assert_eq!(divine.abilities.len(), 8);
        }
    }
}
