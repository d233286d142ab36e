use crate::catalogue::tables::{is_specialist_action, Attribute, SPECIALIST_ACTIONS};
use crate::rules::formula::roll_formula;
use crate::value_objects::{FieldMap, FieldValues};

pub const SETTING_SPECIALIST_ACTION: &str = "setting_specialist_action";

/// Fields the resistance of `attribute` reads.
pub fn resistance_inputs(attribute: Attribute) -> Vec<String> {
    attribute
        .actions()
        .iter()
        .map(|a| a.to_string())
        .chain(std::iter::once(attribute.bonus_field()))
        .chain(SPECIALIST_ACTIONS.iter().map(|a| a.to_string()))
        .chain(std::iter::once(SETTING_SPECIALIST_ACTION.to_string()))
        .collect()
}

/// Fields whose change retriggers the resistance of `attribute`.
pub fn resistance_triggers(attribute: Attribute) -> Vec<String> {
    attribute
        .actions()
        .iter()
        .map(|a| a.to_string())
        .chain(std::iter::once(attribute.bonus_field()))
        .chain(SPECIALIST_ACTIONS.iter().map(|a| a.to_string()))
        .collect()
}

/// One point for every rated action of the attribute, plus the bonus field.
/// Insight also gains a point when the chosen specialist action is rated.
pub fn resistance_total(attribute: Attribute, values: &FieldValues) -> i64 {
    let rated = attribute
        .actions()
        .iter()
        .filter(|action| values.int(action) != 0)
        .count() as i64;
    let bonus = values.int(&attribute.bonus_field());
    let specialist = match attribute {
        Attribute::Insight if specialist_action_rated(values) => 1,
        _ => 0,
    };
    rated + bonus + specialist
}

fn specialist_action_rated(values: &FieldValues) -> bool {
    let chosen = values.get(SETTING_SPECIALIST_ACTION);
    is_specialist_action(chosen) && values.int(chosen) != 0
}

/// `<attr>` and `<attr>_formula` for the current snapshot.
pub fn resistance_outputs(attribute: Attribute, values: &FieldValues) -> FieldMap {
    let total = resistance_total(attribute, values);
    FieldMap::from([
        (attribute.as_str().to_string(), total.to_string()),
        (attribute.formula_field(), roll_formula(total)),
    ])
}
