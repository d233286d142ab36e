//! String-valued sheet fields and their coercions.
//!
//! Every value crossing the store boundary is a string. Numbers and booleans
//! are conventions on top of that: booleans are `"0"`/`"1"`, and an absent key
//! or empty string means "never set". Coercion never fails; anything that is
//! not a number reads as `0` and anything that is not `"1"` reads as unchecked.

use std::collections::{BTreeMap, HashMap};

/// A batch of field writes, ordered by name so batches are deterministic.
pub type FieldMap = BTreeMap<String, String>;

/// Parse the leading integer of a field value, in the lenient way sheet
/// values have always been read: leading whitespace and a sign are allowed,
/// trailing junk is ignored, and no digits at all yields `0`.
///
/// `"3"` -> 3, `" -2 "` -> -2, `"4uses"` -> 4, `"1.9"` -> 1, `""` -> 0, `"abc"` -> 0.
pub fn parse_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return 0;
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Render a boolean as a sheet flag.
pub fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// A flag is checked only when it is exactly `"1"`.
pub fn is_checked(raw: Option<&str>) -> bool {
    raw == Some("1")
}

/// Snapshot of field values returned by a store read.
///
/// Absent keys read as the empty string, which every coercion treats as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value, if the store returned one.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value as a string, empty when unset.
    pub fn get(&self, name: &str) -> &str {
        self.raw(name).unwrap_or("")
    }

    /// Value coerced with [`parse_int`].
    pub fn int(&self, name: &str) -> i64 {
        parse_int(self.get(name))
    }

    pub fn is_checked(&self, name: &str) -> bool {
        is_checked(self.raw(name))
    }

    /// Whether the field has a non-empty value.
    pub fn is_set(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keep only the entries of `desired` whose value differs from this snapshot.
    pub fn changed_entries(&self, desired: &FieldMap) -> FieldMap {
        desired
            .iter()
            .filter(|(name, value)| self.raw(name) != Some(value.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_is_lenient() {
        assert_eq!(parse_int("3"), 3);
        assert_eq!(parse_int("  -2 "), -2);
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("4uses"), 4);
        assert_eq!(parse_int("1.9"), 1);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("-"), 0);
    }

    #[test]
    fn parse_int_saturates_instead_of_overflowing() {
        assert_eq!(parse_int("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn flags_round_trip_through_is_checked() {
        assert!(is_checked(Some(flag(true))));
        assert!(!is_checked(Some(flag(false))));
        assert!(!is_checked(None));
        assert!(!is_checked(Some("on")));
    }

    #[test]
    fn field_values_default_to_unset() {
        let values: FieldValues = [("wreck", "2")].into_iter().collect();
        assert_eq!(values.int("wreck"), 2);
        assert_eq!(values.int("shoot"), 0);
        assert_eq!(values.get("shoot"), "");
        assert!(!values.is_set("shoot"));
    }

    #[test]
    fn changed_entries_drops_equal_values() {
        let current: FieldValues = [("a", "1"), ("b", "2")].into_iter().collect();
        let desired: FieldMap = [("a", "1"), ("b", "3"), ("c", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let changed = current.changed_entries(&desired);
        assert_eq!(changed.len(), 2);
        assert_eq!(changed.get("b").map(String::as_str), Some("3"));
        // An absent field differs from an explicit empty value
        assert_eq!(changed.get("c").map(String::as_str), Some(""));
    }
}
