//! Heritage trait selection and the abilities that change it.

use crate::catalogue::tables::{heritage_trait_fields, HERITAGES, SETTING_NUM_HERITAGE_TRAITS};
use crate::value_objects::{flag, FieldMap, FieldValues};

/// Fields read by [`heritage_outputs`].
pub fn heritage_inputs() -> Vec<String> {
    let mut inputs = heritage_trait_fields();
    inputs.push(SETTING_NUM_HERITAGE_TRAITS.to_string());
    inputs
}

/// Whether enough traits are chosen, and which heritages stay visible.
///
/// Before any trait is picked every heritage is shown; afterwards only the
/// heritages with at least one picked trait remain.
pub fn heritage_outputs(values: &FieldValues) -> FieldMap {
    let max_traits = values.int(SETTING_NUM_HERITAGE_TRAITS);
    let counts: Vec<(String, i64)> = HERITAGES
        .iter()
        .map(|h| (h.show_field(), h.trait_fields().map(|t| values.int(&t)).sum()))
        .collect();
    let total: i64 = counts.iter().map(|(_, n)| n).sum();

    let mut outputs = FieldMap::new();
    outputs.insert(
        "heritage_traits_chosen".to_string(),
        flag(total >= max_traits).to_string(),
    );
    for (show_field, count) in counts {
        outputs.insert(show_field, flag(total == 0 || count > 0).to_string());
    }
    outputs
}

/// Whether an ability row names the heritage ability.
///
/// The translated ability name carries a trailing placeholder of three
/// characters, so both sides are compared without their last three.
pub fn is_heritage_ability(row_name: &str, translated_ability: &str) -> bool {
    drop_last_chars(row_name, 3) == drop_last_chars(translated_ability, 3)
}

fn drop_last_chars(text: &str, n: usize) -> &str {
    let keep = text.chars().count().saturating_sub(n);
    match text.char_indices().nth(keep) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// New number of heritage traits after the heritage ability is toggled.
pub fn heritage_traits_after_toggle(current: i64, checked: bool) -> i64 {
    if checked {
        current + 2
    } else {
        current - 2
    }
}
