//! Small derived trackers: trauma and blight sums, stress and trauma maxima,
//! the changed-attribute ledger and the pseudo-radio step down.

use crate::value_objects::{parse_int, FieldValues};

pub const BASE_STRESS_MAX: i64 = 9;
pub const BASE_TRAUMA_MAX: i64 = 4;
pub const CHANGED_ATTRIBUTES: &str = "changed_attributes";

/// Sum of the coerced values of `fields`.
pub fn sum_fields(fields: &[String], values: &FieldValues) -> i64 {
    fields.iter().map(|f| values.int(f)).sum()
}

pub fn stress_max(extra_stress: &str) -> i64 {
    BASE_STRESS_MAX + parse_int(extra_stress)
}

pub fn trauma_max(extra_trauma: &str) -> i64 {
    BASE_TRAUMA_MAX + parse_int(extra_trauma)
}

/// Split the comma-separated ledger, dropping empty entries.
pub fn changed_attribute_list(ledger: &str) -> Vec<&str> {
    ledger.split(',').filter(|a| !a.is_empty()).collect()
}

/// Append `attribute` to the ledger once, keeping first-seen order.
pub fn record_changed_attribute(ledger: &str, attribute: &str) -> String {
    let mut entries = Vec::new();
    for entry in changed_attribute_list(ledger)
        .into_iter()
        .chain(std::iter::once(attribute))
    {
        if !entry.is_empty() && !entries.contains(&entry) {
            entries.push(entry);
        }
    }
    entries.join(",")
}

/// Step-down value of a pseudo-radio after a player set it to `"0"`.
///
/// Clicking the lowest dot of a rating clears one dot instead of all of
/// them: the result is one below the previous rating, never below zero for
/// a previous rating of one or an unset one.
pub fn pseudo_radio_step_down(new_value: &str, previous_value: Option<&str>) -> Option<i64> {
    if new_value != "0" {
        return None;
    }
    let previous = previous_value.map(parse_int).unwrap_or(0);
    let previous = if previous == 0 { 1 } else { previous };
    Some(previous - 1)
}

/// Trimmed text if trimming changes it.
pub fn trimmed_if_padded(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (trimmed != text).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sums_coerce_each_field() {
        let fields: Vec<String> = ["trauma_cold", "trauma_soft", "trauma_rage"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let values: FieldValues = [("trauma_cold", "1"), ("trauma_soft", "x")].into_iter().collect();
        assert_eq!(sum_fields(&fields, &values), 1);
    }

    #[test]
    fn maxima_add_extra_boxes() {
        assert_eq!(stress_max("2"), 11);
        assert_eq!(stress_max(""), 9);
        assert_eq!(trauma_max("-1"), 3);
        assert_eq!(trauma_max("junk"), 4);
    }

    #[test]
    fn ledger_deduplicates_in_first_seen_order() {
        assert_eq!(record_changed_attribute("", "wreck"), "wreck");
        assert_eq!(record_changed_attribute("wreck,shoot", "wreck"), "wreck,shoot");
        assert_eq!(record_changed_attribute("wreck,,shoot,", "aim"), "wreck,shoot,aim");
        assert_eq!(record_changed_attribute("a,a,b", "c"), "a,b,c");
        assert_eq!(changed_attribute_list(",x,"), vec!["x"]);
    }

    #[test]
    fn step_down_from_one_clears_the_rating() {
        assert_eq!(pseudo_radio_step_down("0", Some("1")), Some(0));
        assert_eq!(pseudo_radio_step_down("0", Some("3")), Some(2));
        assert_eq!(pseudo_radio_step_down("0", None), Some(0));
        assert_eq!(pseudo_radio_step_down("0", Some("")), Some(0));
        assert_eq!(pseudo_radio_step_down("2", Some("3")), None);
    }

    #[test]
    fn trimming() {
        assert_eq!(trimmed_if_padded("  Ghost "), Some("Ghost"));
        assert_eq!(trimmed_if_padded("Ghost"), None);
        assert_eq!(trimmed_if_padded(""), None);
    }

    proptest! {
        #[test]
        fn ledger_update_is_idempotent(
            entries in proptest::collection::vec("[a-z]{1,6}", 0..6),
            attribute in "[a-z]{1,6}",
        ) {
            let ledger = entries.join(",");
            let once = record_changed_attribute(&ledger, &attribute);
            let twice = record_changed_attribute(&once, &attribute);
            prop_assert_eq!(&once, &twice);
            prop_assert!(changed_attribute_list(&once).contains(&attribute.as_str()));
        }

        #[test]
        fn step_down_never_goes_below_zero_for_positive_ratings(previous in 0i64..10) {
            let step = pseudo_radio_step_down("0", Some(&previous.to_string()));
            prop_assert!(step.is_some_and(|v| v >= 0));
        }
    }
}
