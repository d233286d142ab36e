//! Promotion readiness and eligibility.

use crate::catalogue::playbooks::SPECIALIST_PLAYBOOKS;
use crate::catalogue::tables::ACTIONS;
use crate::catalogue::SheetTemplate;
use crate::value_objects::{flag, parse_int, FieldMap, FieldValues};

pub const ROOKIE_UPGRADE: &str = "rookie_upgrade";
pub const SOLDIER_UPGRADE: &str = "soldier_upgrade";
pub const UPGRADED_FROM_ROOKIE: &str = "upgraded_from_rookie";
pub const UPGRADED_FROM_SOLDIER: &str = "upgraded_from_soldier";

/// An unset "already upgraded" flag reads as not upgraded.
fn not_upgraded(values: &FieldValues, field: &str) -> bool {
    matches!(values.get(field), "" | "0")
}

/// The rookie asked for promotion and has not been promoted before.
pub fn rookie_promotion_ready(values: &FieldValues) -> bool {
    values.is_checked(ROOKIE_UPGRADE) && not_upgraded(values, UPGRADED_FROM_ROOKIE)
}

/// The soldier asked for promotion and has not been promoted before.
pub fn soldier_promotion_ready(values: &FieldValues) -> bool {
    values.is_checked(SOLDIER_UPGRADE) && not_upgraded(values, UPGRADED_FROM_SOLDIER)
}

/// Fields read by [`soldier_promotion_fields`].
pub fn soldier_promotion_inputs() -> Vec<String> {
    [SOLDIER_UPGRADE, UPGRADED_FROM_SOLDIER]
        .iter()
        .chain(ACTIONS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// A soldier can become a specialist once every starting action of that
/// specialist is already at its starting rating.
pub fn eligible_for(specialist: &SheetTemplate, values: &FieldValues) -> bool {
    specialist
        .starting_actions
        .iter()
        .all(|(action, rating)| values.int(action) >= parse_int(rating))
}

/// `promo_eligible_<specialist>` flags for each specialist playbook found in `playbooks`.
pub fn promotion_eligibility<'a>(
    playbooks: impl IntoIterator<Item = &'a SheetTemplate>,
    values: &FieldValues,
) -> FieldMap {
    playbooks
        .into_iter()
        .filter(|p| SPECIALIST_PLAYBOOKS.contains(&p.id.as_str()))
        .map(|p| {
            (
                format!("promo_eligible_{}", p.id),
                flag(eligible_for(p, values)).to_string(),
            )
        })
        .collect()
}

/// Menu state opening the rookie promotion step.
pub fn rookie_promotion_menu() -> FieldMap {
    FieldMap::from([
        ("menu_mode".to_string(), "rookie_to_soldier".to_string()),
        ("show_menu".to_string(), "1".to_string()),
    ])
}

/// Menu state opening the soldier promotion step, with eligibility flags.
pub fn soldier_promotion_fields<'a>(
    playbooks: impl IntoIterator<Item = &'a SheetTemplate>,
    values: &FieldValues,
) -> FieldMap {
    let mut fields = promotion_eligibility(playbooks, values);
    fields.insert("menu_mode".to_string(), "soldier_to_specialist".to_string());
    fields.insert("show_menu".to_string(), "1".to_string());
    fields
}
