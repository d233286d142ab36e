use serde::{Deserialize, Serialize};

use super::FieldMap;

/// Desired contents of one repeating row: field suffix -> value.
///
/// Rows are matched against existing ones by their `name` field only, using
/// exact, case-sensitive comparison of the raw stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowRecord {
    fields: FieldMap,
}

impl RowRecord {
    pub const NAME: &'static str = "name";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with(Self::NAME, name)
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// The matching key. A record without a name matches rows with an empty or absent name.
    pub fn name(&self) -> Option<&str> {
        self.fields.get(Self::NAME).map(String::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
