//! Roll-formula strings for the chat roll templates.
//!
//! Formulas are queries of the form `?{<prompt>|<label>,<template>|...}`.
//! Commas and closing braces inside a template would end the query early, so
//! they are written as HTML entities.

use crate::value_objects::parse_int;

/// `,` written as an entity so it survives inside a query option.
pub const K_COMMA: &str = "&#44;";
/// `}` written as an entity so it survives inside a query option.
pub const K_BRACE: &str = "&#125;";

/// Bonus-dice choices offered by every roll formula, in prompt order.
pub const BONUS_DICE: [i64; 10] = [0, 1, 2, 3, 4, 5, 6, -1, -2, -3];

/// Dice-count choices offered by the number-of-dice prompt.
pub const DICE_COUNTS: [i64; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Largest pool a template renders; bigger ratings roll this many dice.
pub const MAX_POOL: i64 = 99;

fn double_brace() -> String {
    K_BRACE.repeat(2)
}

/// Template fragment rolling `num` dice. Zero or fewer dice roll two dice
/// and keep the lowest, which the template marks with `zerodie` fields.
pub fn dice_magic(num: i64) -> String {
    let num = num.min(MAX_POOL);
    let braces = double_brace();
    if num > 0 {
        (1..=num)
            .map(|i| {
                let separator = if i < num { K_COMMA } else { "" };
                format!("{{{{die{i}=[[d6]]{separator}{braces}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        format!("{{{{zerodie1=[[d6]]{K_COMMA}{braces} {{{{zerodie2=[[d6]]{braces}")
    }
}

/// Roll formula for a dice pool of `base`, adjusted by the bonus-dice prompt.
pub fn roll_formula(base: i64) -> String {
    let options = BONUS_DICE
        .iter()
        .map(|n| format!("{n},{}", dice_magic(base.saturating_add(*n))))
        .collect::<Vec<_>>()
        .join("|");
    format!("?{{@{{bonusdice}}|{options}}}")
}

/// [`roll_formula`] for a raw field value; unparsable values roll as zero.
pub fn roll_formula_for(raw: &str) -> String {
    roll_formula(parse_int(raw))
}

/// Number-of-dice prompt for fortune and free rolls.
pub fn numdice_formula(prompt: &str) -> String {
    let options = DICE_COUNTS
        .iter()
        .map(|n| format!("{n},{}", dice_magic(*n)))
        .collect::<Vec<_>>()
        .join("|");
    format!("?{{{prompt}|{options}}}")
}

/// Position prompt offering the three positions and a fortune roll.
pub fn position_query(translate: &dyn Fn(&str) -> String) -> String {
    let positions = ["risky", "controlled", "desperate"]
        .iter()
        .map(|p| {
            let label = translate(p);
            format!("{label},position={label}")
        })
        .collect::<Vec<_>>()
        .join("|");
    format!(
        "?{{{}|{positions}|{},short=short}}",
        translate("position"),
        translate("fortune_roll")
    )
}

/// Free-text notes prompt.
pub fn notes_query(translate: &dyn Fn(&str) -> String) -> String {
    format!("?{{{}}}", translate("notes"))
}

const ENGAGEMENT_RESULTS: [&str; 4] = ["crit", "6", "4_5", "1_3"];

fn engagement_option(mission_type: &str, translate: &dyn Fn(&str) -> String) -> String {
    let braces = double_brace();
    let results = ENGAGEMENT_RESULTS
        .iter()
        .map(|r| {
            format!("{{{{result_{r}=^{{engagement_{mission_type}_{r}{K_BRACE}{braces}")
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{},{results} {{{{{mission_type}-mission=1{braces}",
        translate(&format!("{mission_type}_mission"))
    )
}

/// Engagement-roll prompt of the marshal sheet: primary or secondary mission.
pub fn engagement_query(translate: &dyn Fn(&str) -> String) -> String {
    format!(
        "?{{{}|{}|{}}}",
        translate("mission_type"),
        engagement_option("primary", translate),
        engagement_option("secondary", translate)
    )
}
