use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Identifier of one row inside a repeating section.
///
/// Row ids are generated by the store. They are embedded in field names as
/// `repeating_<section>_<rowid>_<field>`, so an id must be non-empty and
/// must not contain `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RowId(String);

/// Characters of generated row ids: the Roll20 push-id alphabet without `_`.
pub const ROW_ID_ALPHABET: &[u8; 63] =
    b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const TIMESTAMP_CHARS: usize = 8;
const RANDOM_CHARS: usize = 12;

impl RowId {
    /// An id shaped like the ones Roll20 hands out: `-`, eight characters
    /// encoding `timestamp_millis`, then twelve characters chosen by `pick`.
    ///
    /// `pick` returns an index into [`ROW_ID_ALPHABET`]; larger values wrap.
    pub fn generate(timestamp_millis: u64, mut pick: impl FnMut() -> usize) -> Self {
        let base = ROW_ID_ALPHABET.len() as u64;
        let mut stamp = [0u8; TIMESTAMP_CHARS];
        let mut remaining = timestamp_millis;
        for slot in stamp.iter_mut().rev() {
            *slot = ROW_ID_ALPHABET[(remaining % base) as usize];
            remaining /= base;
        }

        let mut id = String::with_capacity(1 + TIMESTAMP_CHARS + RANDOM_CHARS);
        id.push('-');
        id.extend(stamp.iter().map(|&b| char::from(b)));
        for _ in 0..RANDOM_CHARS {
            id.push(char::from(ROW_ID_ALPHABET[pick() % ROW_ID_ALPHABET.len()]));
        }
        Self(id)
    }

    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() || raw.contains('_') {
            return Err(DomainError::InvalidRowId(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RowId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RowId> for String {
    fn from(value: RowId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_generated_style_ids() {
        let id = RowId::parse("-Mx3kQ9aBcDeFgHiJkLm").unwrap();
        assert_eq!(id.as_str(), "-Mx3kQ9aBcDeFgHiJkLm");
        assert_eq!(id.to_string(), "-Mx3kQ9aBcDeFgHiJkLm");
    }

    #[test]
    fn generated_ids_parse_back() {
        let mut next = 0;
        let id = RowId::generate(1_700_000_000_000, || {
            next += 7;
            next
        });
        assert_eq!(id.as_str().len(), 21);
        assert!(id.as_str().starts_with('-'));
        assert_eq!(RowId::parse(id.as_str()), Ok(id.clone()));
    }

    #[test]
    fn generated_ids_sort_by_timestamp() {
        let early = RowId::generate(1_000, || 0);
        let late = RowId::generate(2_000, || 0);
        assert!(early < late);
    }

    #[test]
    fn rejects_empty_and_underscored_ids() {
        assert!(RowId::parse("").is_err());
        assert_eq!(
            RowId::parse("abc_def"),
            Err(DomainError::InvalidRowId("abc_def".to_string()))
        );
    }
}
