//! What a rule sees while it runs.

use std::sync::Arc;

use legion_sheet_domain::{translation_or_sentinel, FieldMap, FieldValues, RepeatingFieldRef};

use crate::infrastructure::ports::{FieldChange, SheetStore, WriteOptions};
use crate::reactive::{ChangeEvent, EngineError};

/// Store access for one rule invocation.
///
/// Notifying writes are turned into [`ChangeEvent`]s one level deeper than
/// the invocation; the dispatcher queues them once the rule returns.
pub struct SheetContext {
    store: Arc<dyn SheetStore>,
    row: Option<RepeatingFieldRef>,
    depth: u32,
    emitted: Vec<ChangeEvent>,
    fields_written: usize,
}

impl SheetContext {
    pub fn new(store: Arc<dyn SheetStore>, row: Option<RepeatingFieldRef>, depth: u32) -> Self {
        Self {
            store,
            row,
            depth,
            emitted: Vec::new(),
            fields_written: 0,
        }
    }

    pub fn store(&self) -> &Arc<dyn SheetStore> {
        &self.store
    }

    /// The repeating row whose change triggered the rule, if any.
    pub fn row(&self) -> Option<&RepeatingFieldRef> {
        self.row.as_ref()
    }

    /// Full name of `field` in the triggering row.
    pub fn row_field(&self, field: &str) -> Result<String, EngineError> {
        self.row
            .as_ref()
            .map(|row| row.sibling(field))
            .ok_or_else(|| EngineError::MissingRowScope(field.to_string()))
    }

    pub async fn read(&self, names: &[String]) -> Result<FieldValues, EngineError> {
        Ok(self.store.read_fields(names).await?)
    }

    pub async fn read_one(&self, name: &str) -> Result<String, EngineError> {
        let values = self.read(&[name.to_string()]).await?;
        Ok(values.get(name).to_string())
    }

    /// Write the entries of `desired` that differ from the store, in one batch.
    ///
    /// Returns the entries actually written.
    pub async fn apply(
        &mut self,
        desired: FieldMap,
        options: WriteOptions,
    ) -> Result<FieldMap, EngineError> {
        if desired.is_empty() {
            return Ok(desired);
        }
        let names: Vec<String> = desired.keys().cloned().collect();
        let current = self.read(&names).await?;
        let changed = current.changed_entries(&desired);
        if !changed.is_empty() {
            self.write(changed.clone(), options).await?;
        }
        Ok(changed)
    }

    /// [`SheetContext::apply`] with a notifying write.
    pub async fn set_if_changed(&mut self, desired: FieldMap) -> Result<FieldMap, EngineError> {
        self.apply(desired, WriteOptions::NOTIFY).await
    }

    pub async fn set_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<FieldMap, EngineError> {
        self.set_if_changed(FieldMap::from([(name.into(), value.into())]))
            .await
    }

    /// Write `fields` without comparing against the store first.
    pub async fn write(
        &mut self,
        fields: FieldMap,
        options: WriteOptions,
    ) -> Result<Vec<FieldChange>, EngineError> {
        let changes = self.store.write_fields(fields, options).await?;
        self.fields_written += changes.len();
        if !options.silent {
            self.emitted.extend(
                changes
                    .iter()
                    .cloned()
                    .map(|change| ChangeEvent::from_write(change, self.depth)),
            );
        }
        Ok(changes)
    }

    /// Translation of `key`, or the visible undefined-key sentinel.
    pub fn get_translation(&self, key: &str) -> String {
        translation_or_sentinel(key, self.store.translate(key))
    }

    /// Events produced so far and the number of fields changed.
    pub fn into_parts(self) -> (Vec<ChangeEvent>, usize) {
        (self.emitted, self.fields_written)
    }
}
