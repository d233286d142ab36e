//! The attribute store a character sheet lives in.

use async_trait::async_trait;
use legion_sheet_domain::{FieldMap, FieldValues, RowId};

use super::StoreError;

/// Options of one batched write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Silent writes change the store without waking any watcher.
    pub silent: bool,
}

impl WriteOptions {
    pub const NOTIFY: WriteOptions = WriteOptions { silent: false };
    pub const SILENT: WriteOptions = WriteOptions { silent: true };
}

/// A field whose stored value changed during a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub name: String,
    pub previous: Option<String>,
    pub current: String,
}

/// Key-value attribute store.
///
/// Every value is a string. Absent keys are omitted from reads, and row ids
/// handed out by [`SheetStore::generate_row_id`] never contain `_`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetStore: Send + Sync {
    async fn read_fields(&self, names: &[String]) -> Result<FieldValues, StoreError>;

    /// Apply `fields` as one batch and return the fields whose value changed.
    async fn write_fields(
        &self,
        fields: FieldMap,
        options: WriteOptions,
    ) -> Result<Vec<FieldChange>, StoreError>;

    /// Ids of the rows of `section`, in creation order.
    async fn list_row_ids(&self, section: &str) -> Result<Vec<RowId>, StoreError>;

    /// A new row id. Uniqueness inside one batch is the caller's concern.
    fn generate_row_id(&self) -> RowId;

    async fn remove_row(&self, section: &str, row_id: &RowId) -> Result<(), StoreError>;

    /// Translation of `key`, if the store knows one.
    fn translate(&self, key: &str) -> Option<String>;
}
