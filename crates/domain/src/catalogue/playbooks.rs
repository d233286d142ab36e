//! Soldier playbooks: abilities, granted items and starting ratings.

use super::templates::{ItemLoadout, ItemSpec, PlaybookTemplate};

/// Playbooks a soldier can be promoted into.
pub const SPECIALIST_PLAYBOOKS: [&str; 5] = ["heavy", "medic", "officer", "scout", "sniper"];

pub const ROOKIE: &str = "rookie";
pub const SOLDIER: &str = "soldier";

const fn item(name: &'static str) -> ItemSpec {
    ItemSpec::named(name)
}

const fn pair(first: &'static str, second: &'static str) -> ItemSpec {
    ItemSpec::paired(first, second)
}

/// Two unnamed utility boxes.
const BLANK_PAIR: ItemSpec = ItemSpec::named("").boxes(2);
const SUPPLIES: ItemSpec = ItemSpec::named("supplies").boxes(1).uses(5);
const BLACK_SHOT: ItemSpec = ItemSpec::named("black_shot").boxes(2).uses(3);
const OIL: ItemSpec = ItemSpec::named("oil").boxes(1).uses(3);
const RELIQUARY: ItemSpec = ItemSpec::named("reliquary").boxes(2).uses(3);

pub const HEAVY: PlaybookTemplate = PlaybookTemplate {
    id: "heavy",
    abilities: &[
        "bulwark",
        "backup",
        "tenacious",
        "weaponmaster",
        "war_machine",
        "vigorous",
        "against_the_darkness",
        "elite",
    ],
    base: &[],
    items: ItemLoadout {
        light: &[
            item("fine_armor").fine(),
            item("fine_hand_weapon").fine(),
            item("flare_gun").uses(4),
        ],
        normal: &[
            item("fitted_heavy_plate").fine().extra("replaces_any_armor"),
            pair("fine_shield", "fine_heavy_weapon").fine(),
        ],
        heavy: &[
            item("fine_wrecking_kit").fine(),
            item("fine_tower_shield").fine().extra("replaces_any_shield"),
        ],
        utility: &[
            item("hand_weapon").boxes(1),
            item("shield").boxes(1),
            SUPPLIES,
            BLANK_PAIR,
            item("heavy_weapon").boxes(1),
            item("winter_clothing").boxes(1),
            item("soldiers_kit").boxes(1),
            BLANK_PAIR,
            BLACK_SHOT,
            OIL,
            item("wrecking_kit").boxes(1),
            RELIQUARY,
        ],
    },
    specialist_action: Some("anchor"),
    starting_actions: &[("skirmish", "2"), ("wreck", "1")],
};

pub const MEDIC: PlaybookTemplate = PlaybookTemplate {
    id: "medic",
    abilities: &[
        "attache",
        "first_aid",
        "not_today",
        "doctor_feelgood",
        "field_dressing",
        "chemist",
        "moral_support",
        "elite",
    ],
    base: &[("setting_show_alchemicals", "1")],
    items: ItemLoadout {
        light: &[
            item("fine_medic_kit").fine().uses(3),
            item("tonics").uses(1),
            item("holy_symbol_of_mercy"),
            item("mark_of_the_healing_god").boxes(1),
        ],
        normal: &[
            item("fine_pistol").fine(),
            item("ammo").uses(5),
            item("armor"),
            item("tonics").uses(1),
        ],
        heavy: &[item("tonics").uses(1), item("tonics").uses(1)],
        utility: &[
            item("hand_weapon").boxes(1),
            item("shield").boxes(1),
            SUPPLIES,
            BLANK_PAIR,
            OIL,
            item("winter_clothing").boxes(1),
            item("repair_kit").boxes(1).uses(3),
            BLANK_PAIR,
            item("bandolier").boxes(1).uses(4).diamond(),
            BLACK_SHOT,
            item("books_n_scrolls").boxes(1).uses(2),
            RELIQUARY,
        ],
    },
    specialist_action: Some("doctor"),
    starting_actions: &[
        ("consort", "1"),
        ("discipline", "1"),
        ("maneuver", "1"),
        ("research", "2"),
    ],
};

pub const OFFICER: PlaybookTemplate = PlaybookTemplate {
    id: "officer",
    abilities: &[
        "tactician",
        "lead_from_the_front",
        "logistical_support",
        "mission_first",
        "obedience",
        "strategist",
        "officer_school",
        "elite",
    ],
    base: &[],
    items: ItemLoadout {
        light: &[
            item("fine_armor").fine(),
            item("fine_hand_weapon").fine(),
            item("flare_gun").uses(4),
            item("fine_ornate_clock").fine().boxes(1),
        ],
        normal: &[
            item("fine_luxury_item").fine(),
            pair("fine_shield", "fine_pistol").fine(),
            item("ammo").uses(5),
        ],
        heavy: &[
            item("battlefield_banner"),
            item("fine_heavy_armor").fine().extra("replaces_armor"),
        ],
        utility: &[
            item("hand_weapon").boxes(1),
            item("shield").boxes(1),
            SUPPLIES,
            BLANK_PAIR,
            item("large_weapon").boxes(1),
            item("winter_clothing").boxes(1),
            item("compass_&_maps").boxes(1),
            BLANK_PAIR,
            BLACK_SHOT,
            OIL,
            item("lenses").boxes(1),
            RELIQUARY,
        ],
    },
    specialist_action: Some("channels"),
    starting_actions: &[("discipline", "1"), ("sway", "2")],
};

pub const SCOUT: PlaybookTemplate = PlaybookTemplate {
    id: "scout",
    abilities: &[
        "ghost",
        "panther-like_grace",
        "like_the_wind",
        "infiltrator",
        "sixth_sense",
        "ready_for_anything",
        "daredevil",
        "elite",
    ],
    base: &[],
    items: ItemLoadout {
        light: &[
            item("fine_compass_&_maps").fine(),
            item("fine_bow_&_arrows").fine(),
            item("black_arrows").uses(3).fine(),
        ],
        normal: &[
            item("climbing_kit"),
            item("fine_lenses").fine(),
            item("fine_reliquary").fine().uses(3),
        ],
        heavy: &[item("camo_gear"), item("fine_armor").fine()],
        utility: &[
            item("hand_weapon").boxes(1),
            item("pistol").boxes(1),
            SUPPLIES,
            BLANK_PAIR,
            item("large_weapon").boxes(1),
            item("ammo").boxes(1).uses(5),
            item("winter_clothing").boxes(1),
            BLANK_PAIR,
            BLACK_SHOT,
            item("flare_gun").boxes(1).uses(4),
            item("soldiers_kit").boxes(1),
            RELIQUARY,
        ],
    },
    specialist_action: Some("scrounge"),
    starting_actions: &[("maneuver", "1"), ("scout", "2")],
};

pub const SNIPER: PlaybookTemplate = PlaybookTemplate {
    id: "sniper",
    abilities: &[
        "one_eye",
        "ambush",
        "akimbo",
        "notches",
        "sharpshooter",
        "cover_fire",
        "crimson_shot",
        "elite",
    ],
    base: &[],
    items: ItemLoadout {
        light: &[
            item("black_shot").uses(3),
            item("ammo").uses(5),
            pair("2_fine_pistols", "fine_long_rifle").fine(),
        ],
        normal: &[item("gun_maintenance_kit"), item("fine_armor").fine()],
        heavy: &[pair("2_fine_pistols", "fine_long_rifle")
            .fine()
            .extra("whichever_you_didnt_take_at_light_load")],
        utility: &[
            item("crimson_shot").boxes(1).diamond(),
            item("pistol").boxes(1),
            SUPPLIES,
            BLANK_PAIR,
            item("hand_weapon").boxes(1),
            item("ammo").boxes(1).uses(5),
            item("winter_clothing").boxes(1),
            BLANK_PAIR,
            BLACK_SHOT,
            OIL,
            item("soldiers_kit").boxes(1),
            RELIQUARY,
        ],
    },
    specialist_action: Some("aim"),
    starting_actions: &[("scout", "1"), ("shoot", "2")],
};

pub const ROOKIE_PLAYBOOK: PlaybookTemplate = PlaybookTemplate {
    id: ROOKIE,
    abilities: &[
        "devils_own_luck",
        "every_inch_a",
        "hard_knocks",
        "just_a_kid",
        "gotta_make_it_out_alive",
        "home_cooking",
        "jack_of_all_trades",
    ],
    base: &[
        ("setting_extra_trauma", "-1"),
        ("show_ability_divider", "1"),
        ("show_not_a_rookie_anymore", "1"),
    ],
    items: ItemLoadout {
        light: &[
            item("naive_hope"),
            item("memento_of_home"),
            item("soldiers_kit"),
            item("musket"),
            item("ammo").uses(5),
        ],
        normal: &[
            item("family_weapon"),
            pair("tents_&_camping_gear", "cooking_kit"),
            item("fresh_food").boxes(1),
        ],
        heavy: &[item("armor"), item("shield")],
        utility: &[
            item("armor").boxes(1),
            item("shield").boxes(1),
            SUPPLIES,
            BLANK_PAIR,
            item("hand_weapon").boxes(1),
            item("winter_clothing").boxes(1),
            item("medic_kit").boxes(1).uses(3),
            BLANK_PAIR,
            BLACK_SHOT,
            OIL,
            item("climbing_kit").boxes(1),
            RELIQUARY,
        ],
    },
    specialist_action: None,
    starting_actions: &[("consort", "1"), ("maneuver", "1"), ("skirmish", "1")],
};

pub const SOLDIER_PLAYBOOK: PlaybookTemplate = PlaybookTemplate {
    id: SOLDIER,
    abilities: &[
        "relentless",
        "over_the_top",
        "iron_will",
        "loaded_for_bear",
        "eat_iron_shit_nails",
        "grenadier",
        "cavalry",
        "elite",
    ],
    base: &[("show_ability_divider", "1"), ("show_specialist_training", "1")],
    items: ItemLoadout {
        light: &[
            item("fine_armor").fine(),
            item("memento_of_home"),
            item("fine_hand_weapon").fine(),
            item("fine_kit").fine().extra("pick_one_kit"),
        ],
        normal: &[
            item("+2_utility"),
            pair("fine_heavy_weapon", "fine_shield").fine(),
        ],
        heavy: &[
            item("+1_utility"),
            item("fine_heavy_armor").fine().extra("replaces_armor"),
        ],
        utility: &[
            item("musket").boxes(1),
            item("ammo").boxes(1).uses(5),
            SUPPLIES,
            BLANK_PAIR,
            item("pistol").boxes(1),
            item("winter_clothing").boxes(1),
            item("medic_kit").boxes(1).uses(3),
            BLANK_PAIR,
            BLACK_SHOT,
            OIL,
            item("soldiers_kit").boxes(1),
            RELIQUARY,
        ],
    },
    specialist_action: Some("grit"),
    starting_actions: &[("consort", "1"), ("maneuver", "1"), ("skirmish", "1")],
};

/// Every playbook in registration order.
pub const PLAYBOOKS: [PlaybookTemplate; 7] = [
    HEAVY,
    MEDIC,
    OFFICER,
    SCOUT,
    SNIPER,
    ROOKIE_PLAYBOOK,
    SOLDIER_PLAYBOOK,
];
