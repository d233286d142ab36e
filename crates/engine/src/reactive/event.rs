//! Change events flowing through the engine.

use crate::infrastructure::ports::FieldChange;

/// Who produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    Player,
    Sheetworker,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Full store name of the changed field
    pub source_attribute: String,
    pub new_value: String,
    pub previous_value: Option<String>,
    pub source_type: SourceType,
    /// Zero for player edits, one more for every write in between
    pub depth: u32,
}

impl ChangeEvent {
    pub fn player(
        source_attribute: impl Into<String>,
        new_value: impl Into<String>,
        previous_value: Option<String>,
    ) -> Self {
        Self {
            source_attribute: source_attribute.into(),
            new_value: new_value.into(),
            previous_value,
            source_type: SourceType::Player,
            depth: 0,
        }
    }

    /// Event for a change written by a rule running at `parent_depth`.
    pub fn from_write(change: FieldChange, parent_depth: u32) -> Self {
        Self {
            source_attribute: change.name,
            new_value: change.current,
            previous_value: change.previous,
            source_type: SourceType::Sheetworker,
            depth: parent_depth.saturating_add(1),
        }
    }

    pub fn is_player(&self) -> bool {
        self.source_type == SourceType::Player
    }
}
