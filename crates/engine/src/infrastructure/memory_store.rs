//! In-memory sheet store for development and testing
//!
//! Holds every field in a map and tracks repeating rows in creation order.
//! It does not persist data.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use legion_sheet_domain::{row_prefix, FieldMap, FieldValues, RepeatingFieldRef, RowId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{
    ClockPort, FieldChange, RandomPort, SheetStore, StoreError, WriteOptions,
};

#[derive(Debug, Default)]
struct SheetState {
    fields: BTreeMap<String, String>,
    /// (section, row) in the order rows first received a field
    rows: Vec<(String, RowId)>,
}

impl SheetState {
    fn track_row(&mut self, name: &str) {
        if let Some(field) = RepeatingFieldRef::parse(name) {
            let known = self
                .rows
                .iter()
                .any(|(section, id)| *section == field.section && *id == field.row_id);
            if !known {
                self.rows.push((field.section, field.row_id));
            }
        }
    }
}

/// In-memory sheet store
pub struct InMemorySheetStore {
    state: Arc<RwLock<SheetState>>,
    translations: HashMap<String, String>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl InMemorySheetStore {
    pub fn new(
        translations: HashMap<String, String>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(SheetState::default())),
            translations,
            clock,
            random,
        }
    }

    /// Seed fields without any change tracking.
    pub async fn seed(&self, fields: impl IntoIterator<Item = (String, String)>) {
        let mut state = self.state.write().await;
        for (name, value) in fields {
            state.track_row(&name);
            state.fields.insert(name, value);
        }
    }

    /// Every stored field, sorted by name.
    pub async fn snapshot(&self) -> FieldMap {
        self.state.read().await.fields.clone()
    }

    pub async fn get(&self, name: &str) -> Option<String> {
        self.state.read().await.fields.get(name).cloned()
    }
}

#[async_trait]
impl SheetStore for InMemorySheetStore {
    async fn read_fields(&self, names: &[String]) -> Result<FieldValues, StoreError> {
        let state = self.state.read().await;
        Ok(names
            .iter()
            .filter_map(|name| {
                state
                    .fields
                    .get(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect())
    }

    async fn write_fields(
        &self,
        fields: FieldMap,
        options: WriteOptions,
    ) -> Result<Vec<FieldChange>, StoreError> {
        if let Some(name) = fields.keys().find(|name| name.is_empty()) {
            return Err(StoreError::invalid_field(name));
        }

        let mut state = self.state.write().await;
        let mut changes = Vec::new();
        for (name, value) in fields {
            state.track_row(&name);
            let previous = state.fields.insert(name.clone(), value.clone());
            if previous.as_deref() != Some(value.as_str()) {
                changes.push(FieldChange {
                    name,
                    previous,
                    current: value,
                });
            }
        }
        tracing::trace!(changed = changes.len(), silent = options.silent, "Applied write");
        Ok(changes)
    }

    async fn list_row_ids(&self, section: &str) -> Result<Vec<RowId>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .filter(|(s, _)| s == section)
            .map(|(_, id)| id.clone())
            .collect())
    }

    fn generate_row_id(&self) -> RowId {
        let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let max = i32::try_from(legion_sheet_domain::ids::ROW_ID_ALPHABET.len() - 1).unwrap_or(0);
        RowId::generate(millis, || {
            usize::try_from(self.random.gen_range(0, max)).unwrap_or(0)
        })
    }

    async fn remove_row(&self, section: &str, row_id: &RowId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let position = state
            .rows
            .iter()
            .position(|(s, id)| s == section && id == row_id)
            .ok_or_else(|| StoreError::row_not_found(section, row_id))?;
        state.rows.remove(position);

        let prefix = format!("{}_", row_prefix(section, row_id));
        state.fields.retain(|name, _| !name.starts_with(&prefix));
        Ok(())
    }

    fn translate(&self, key: &str) -> Option<String> {
        self.translations.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom, SystemRandom};
    use chrono::TimeZone;

    fn store() -> InMemorySheetStore {
        let clock = FixedClock(chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        InMemorySheetStore::new(
            HashMap::from([("bonusdice".to_string(), "Bonus dice".to_string())]),
            Arc::new(clock),
            Arc::new(SystemRandom::new()),
        )
    }

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn writes_report_only_changed_fields() {
        let store = store();
        store.seed(fields(&[("wreck", "1")])).await;

        let changes = store
            .write_fields(fields(&[("wreck", "1"), ("shoot", "2")]), WriteOptions::NOTIFY)
            .await
            .unwrap();

        assert_eq!(
            changes,
            vec![FieldChange {
                name: "shoot".to_string(),
                previous: None,
                current: "2".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn reads_omit_absent_fields() {
        let store = store();
        store.seed(fields(&[("wreck", "1")])).await;

        let values = store
            .read_fields(&["wreck".to_string(), "shoot".to_string()])
            .await
            .unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values.raw("shoot"), None);
    }

    #[tokio::test]
    async fn rows_are_listed_in_creation_order_and_removed_with_their_fields() {
        let store = store();
        store
            .write_fields(
                fields(&[
                    ("repeating_ability_-B_name", "Backup"),
                    ("repeating_ability_-A_name", "Bulwark"),
                    ("repeating_squad_-C_name", "Ember Wolves"),
                ]),
                WriteOptions::SILENT,
            )
            .await
            .unwrap();
        // Both fields land in one batch, sorted by name, so -A is seen first
        let ids = store.list_row_ids("ability").await.unwrap();
        assert_eq!(
            ids,
            vec![RowId::parse("-A").unwrap(), RowId::parse("-B").unwrap()]
        );

        store
            .remove_row("ability", &RowId::parse("-A").unwrap())
            .await
            .unwrap();
        assert_eq!(store.list_row_ids("ability").await.unwrap().len(), 1);
        assert_eq!(store.get("repeating_ability_-A_name").await, None);
        assert_eq!(store.list_row_ids("squad").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removing_unknown_row_fails() {
        let store = store();
        let err = store
            .remove_row("ability", &RowId::parse("-X").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_row_not_found());
    }

    #[test]
    fn generated_ids_are_valid_and_distinct() {
        let store = store();
        let first = store.generate_row_id();
        let second = store.generate_row_id();
        assert!(!first.as_str().contains('_'));
        assert_ne!(first, second);
    }

    #[test]
    fn fixed_sources_give_reproducible_ids() {
        let fixed = || {
            InMemorySheetStore::new(
                HashMap::new(),
                Arc::new(FixedClock(chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())),
                Arc::new(FixedRandom(5)),
            )
        };
        let id = fixed().generate_row_id();
        assert_eq!(id, fixed().generate_row_id());
        assert_eq!(id.as_str().len(), 21);
        assert!(id.as_str().ends_with(&"4".repeat(12)));
    }

    #[test]
    fn translations_come_from_the_table() {
        let store = store();
        assert_eq!(store.translate("bonusdice").as_deref(), Some("Bonus dice"));
        assert_eq!(store.translate("missing"), None);
    }
}
