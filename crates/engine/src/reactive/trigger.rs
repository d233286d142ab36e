//! Watch patterns and how store field names match them.

use std::fmt;

use legion_sheet_domain::{DomainError, RepeatingFieldRef, REPEATING_PREFIX};

/// What a rule watches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// One plain field
    Field(String),
    /// `field` in any row of `section`, written `repeating_<section>:<field>`
    Repeating { section: String, field: String },
}

/// How an attribute matched a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerMatch {
    Field,
    /// The row the changed field lives in
    Row(RepeatingFieldRef),
}

impl Trigger {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Parse a watch pattern: a plain field name or `repeating_<section>:<field>`.
    pub fn parse(pattern: &str) -> Result<Self, DomainError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(DomainError::invalid_trigger(pattern));
        }
        let Some((head, field)) = pattern.split_once(':') else {
            return Ok(Self::Field(pattern.to_string()));
        };
        let section = head
            .strip_prefix(REPEATING_PREFIX)
            .filter(|s| !s.is_empty() && !s.contains('_'))
            .ok_or_else(|| DomainError::invalid_trigger(pattern))?;
        if field.is_empty() || field.contains(':') {
            return Err(DomainError::invalid_trigger(pattern));
        }
        Ok(Self::Repeating {
            section: section.to_string(),
            field: field.to_string(),
        })
    }

    /// Parse every pattern, failing on the first bad one.
    pub fn parse_all<'a>(
        patterns: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Self>, DomainError> {
        patterns.into_iter().map(Self::parse).collect()
    }

    pub fn matches(&self, attribute: &str) -> Option<TriggerMatch> {
        match self {
            Self::Field(name) => (name == attribute).then_some(TriggerMatch::Field),
            Self::Repeating { section, field } => RepeatingFieldRef::parse(attribute)
                .filter(|r| r.section == *section && r.field == *field)
                .map(TriggerMatch::Row),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Repeating { section, field } => write!(f, "{REPEATING_PREFIX}{section}:{field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_match_exactly() {
        let trigger = Trigger::parse("wreck").unwrap();
        assert_eq!(trigger.matches("wreck"), Some(TriggerMatch::Field));
        assert_eq!(trigger.matches("wreck_formula"), None);
    }

    #[test]
    fn repeating_triggers_match_any_row() {
        let trigger = Trigger::parse("repeating_ability:name").unwrap();
        let Some(TriggerMatch::Row(row)) = trigger.matches("repeating_ability_-Abc_name") else {
            panic!("expected a row match");
        };
        assert_eq!(row.row_id.as_str(), "-Abc");
        assert_eq!(row.sibling("description"), "repeating_ability_-Abc_description");

        assert_eq!(trigger.matches("repeating_ability_-Abc_description"), None);
        assert_eq!(trigger.matches("repeating_clock_-Abc_name"), None);
        assert_eq!(trigger.matches("repeating_ability_name"), None);
    }

    #[test]
    fn underscored_row_fields_match() {
        let trigger = Trigger::parse("repeating_item:num_boxes").unwrap();
        assert!(trigger.matches("repeating_item_-X_num_boxes").is_some());
    }

    #[test]
    fn rejects_malformed_patterns() {
        assert!(Trigger::parse("").is_err());
        assert!(Trigger::parse("repeating_:name").is_err());
        assert!(Trigger::parse("ability:name").is_err());
        assert!(Trigger::parse("repeating_ability:").is_err());
        assert!(Trigger::parse_all(["wreck", "repeating_x:"]).is_err());
    }

    #[test]
    fn displays_as_watch_pattern() {
        let patterns = ["repeating_clock:name", "char_notes"];
        let triggers = Trigger::parse_all(patterns).unwrap();
        let shown: Vec<String> = triggers.iter().map(Trigger::to_string).collect();
        assert_eq!(shown, patterns);
    }
}
