//! Unified error type for the sheet domain.
//!
//! Malformed or missing field values are never errors here: the store hands
//! back strings and "never set" is the normal state, so those are coerced to
//! safe defaults by [`crate::value_objects`]. The variants below cover the
//! programmer-facing failures only (unknown template ids, bad field patterns).

use thiserror::Error;

/// Error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A playbook, divine or legion template id that the catalogue does not know
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A field name that does not follow the store naming convention
    #[error("Invalid field name: {0}")]
    InvalidFieldName(String),

    /// A watch pattern that cannot be turned into a trigger
    #[error("Invalid trigger pattern: {0}")]
    InvalidTrigger(String),

    /// A repeating row identifier that would break field-name parsing
    #[error("Invalid row id: {0}")]
    InvalidRowId(String),

    /// The row id generator kept handing out ids that are already taken
    #[error("Could not allocate a fresh row id in section {section} after {attempts} attempts")]
    RowIdExhausted { section: String, attempts: usize },
}

impl DomainError {
    /// Create an unknown template error
    pub fn unknown_template(id: impl Into<String>) -> Self {
        Self::UnknownTemplate(id.into())
    }

    /// Create an invalid field name error
    pub fn invalid_field_name(name: impl Into<String>) -> Self {
        Self::InvalidFieldName(name.into())
    }

    /// Create an invalid trigger error
    pub fn invalid_trigger(pattern: impl Into<String>) -> Self {
        Self::InvalidTrigger(pattern.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = DomainError::unknown_template("necromancer");
        assert_eq!(err.to_string(), "Unknown template: necromancer");

        let err = DomainError::invalid_trigger("repeating_:name");
        assert!(err.to_string().contains("repeating_:name"));
    }
}
