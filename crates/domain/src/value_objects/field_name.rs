//! Store field naming for repeating sections.
//!
//! A field in a repeating row is named `repeating_<section>_<rowid>_<field>`.
//! Handlers that run inside a row speak about the row-relative form
//! `repeating_<section>_<field>`, which is resolved against the row that
//! triggered them.

use crate::{DomainError, RowId};

pub const REPEATING_PREFIX: &str = "repeating_";

/// `repeating_<section>`
pub fn section_name(section: &str) -> String {
    format!("{REPEATING_PREFIX}{section}")
}

/// `repeating_<section>_<rowid>`
pub fn row_prefix(section: &str, row_id: &RowId) -> String {
    format!("{REPEATING_PREFIX}{section}_{row_id}")
}

/// `repeating_<section>_<rowid>_<field>`
pub fn repeating_field(section: &str, row_id: &RowId, field: &str) -> String {
    format!("{REPEATING_PREFIX}{section}_{row_id}_{field}")
}

/// A fully-qualified field inside a repeating row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepeatingFieldRef {
    pub section: String,
    pub row_id: RowId,
    pub field: String,
}

impl RepeatingFieldRef {
    /// Split a full field name into section, row and field.
    ///
    /// Returns `None` for non-repeating names and for row-relative names
    /// that carry no row id.
    pub fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(REPEATING_PREFIX)?;
        let mut parts = rest.splitn(3, '_');
        let section = parts.next().filter(|s| !s.is_empty())?;
        let row = parts.next().filter(|s| !s.is_empty())?;
        let field = parts.next().filter(|s| !s.is_empty())?;
        let row_id = RowId::parse(row).ok()?;
        Some(Self {
            section: section.to_string(),
            row_id,
            field: field.to_string(),
        })
    }

    /// Same as [`RepeatingFieldRef::parse`] but reports the failure.
    pub fn try_parse(name: &str) -> Result<Self, DomainError> {
        Self::parse(name).ok_or_else(|| DomainError::invalid_field_name(name))
    }

    pub fn full_name(&self) -> String {
        repeating_field(&self.section, &self.row_id, &self.field)
    }

    /// Another field of the same row.
    pub fn sibling(&self, field: &str) -> String {
        repeating_field(&self.section, &self.row_id, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> RowId {
        RowId::parse(id).unwrap()
    }

    #[test]
    fn builds_names() {
        let id = row("-Abc123");
        assert_eq!(section_name("ability"), "repeating_ability");
        assert_eq!(row_prefix("ability", &id), "repeating_ability_-Abc123");
        assert_eq!(
            repeating_field("ability", &id, "name"),
            "repeating_ability_-Abc123_name"
        );
    }

    #[test]
    fn parses_full_names_with_underscored_fields() {
        let parsed = RepeatingFieldRef::parse("repeating_item_-Xyz_num_boxes").unwrap();
        assert_eq!(parsed.section, "item");
        assert_eq!(parsed.row_id, row("-Xyz"));
        assert_eq!(parsed.field, "num_boxes");
        assert_eq!(parsed.full_name(), "repeating_item_-Xyz_num_boxes");
        assert_eq!(parsed.sibling("name"), "repeating_item_-Xyz_name");
    }

    #[test]
    fn rejects_non_repeating_and_relative_names() {
        assert!(RepeatingFieldRef::parse("stress_max").is_none());
        assert!(RepeatingFieldRef::parse("repeating_ability_name").is_none());
        assert!(RepeatingFieldRef::parse("repeating__-A_name").is_none());
        assert!(RepeatingFieldRef::try_parse("xp_condition").is_err());
    }
}
