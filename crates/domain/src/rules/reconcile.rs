//! Reconciliation of desired records against the rows of a repeating section.
//!
//! Planning is pure: the engine reads the existing rows, asks for a plan and
//! then performs the removals and the single batched write the plan lists.

use std::collections::HashSet;

use crate::value_objects::{repeating_field, FieldMap, FieldValues, RowRecord};
use crate::{DomainError, RowId};

/// Attempts per created row before the id generator is considered broken.
pub const MAX_ID_ATTEMPTS: usize = 64;

const CHECK: &str = "check";

/// The parts of an existing row that reconciliation looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingRow {
    pub id: RowId,
    pub name: Option<String>,
    pub check: Option<String>,
}

impl ExistingRow {
    /// Only rows explicitly unchecked are purged; unset and checked rows survive.
    pub fn is_unchecked(&self) -> bool {
        self.check.as_deref() == Some("0")
    }

    fn matches(&self, record: &RowRecord) -> bool {
        self.name.as_deref().unwrap_or("") == record.name().unwrap_or("")
    }
}

/// Fields to read for the rows `ids` of `section`: each row's `check` and `name`.
pub fn existing_row_fields(section: &str, ids: &[RowId]) -> Vec<String> {
    ids.iter()
        .map(|id| repeating_field(section, id, CHECK))
        .chain(ids.iter().map(|id| repeating_field(section, id, RowRecord::NAME)))
        .collect()
}

/// Pair each row id with the values read for it.
pub fn existing_rows(section: &str, ids: &[RowId], values: &FieldValues) -> Vec<ExistingRow> {
    ids.iter()
        .map(|id| ExistingRow {
            id: id.clone(),
            name: values
                .raw(&repeating_field(section, id, RowRecord::NAME))
                .map(str::to_string),
            check: values
                .raw(&repeating_field(section, id, CHECK))
                .map(str::to_string),
        })
        .collect()
}

/// Rows to remove and rows to create for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePlan {
    pub section: String,
    pub removals: Vec<RowId>,
    pub creations: Vec<(RowId, RowRecord)>,
}

impl ReconcilePlan {
    /// Every field of every created row, ready for one batched write.
    pub fn fields(&self) -> FieldMap {
        self.creations
            .iter()
            .flat_map(|(id, record)| {
                record
                    .fields()
                    .map(move |(field, value)| (repeating_field(&self.section, id, field), value.to_string()))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty() && self.creations.is_empty()
    }
}

/// Plan how to make `section` contain every record of `desired`.
///
/// With `delete_unchecked`, rows whose `check` is `"0"` are removed and take
/// no part in matching. Every desired record whose name matches no remaining
/// row is created under an id from `generate_id` that differs from every
/// existing id and from every id created earlier in the plan. Matching rows
/// are left untouched. Duplicate names inside `desired` each get a row.
pub fn plan_reconcile(
    section: &str,
    existing: &[ExistingRow],
    desired: &[RowRecord],
    delete_unchecked: bool,
    mut generate_id: impl FnMut() -> RowId,
) -> Result<ReconcilePlan, DomainError> {
    let (removed, survivors): (Vec<&ExistingRow>, Vec<&ExistingRow>) = existing
        .iter()
        .partition(|row| delete_unchecked && row.is_unchecked());

    let mut taken: HashSet<RowId> = existing.iter().map(|row| row.id.clone()).collect();
    let mut creations = Vec::new();
    for record in desired {
        if survivors.iter().any(|row| row.matches(record)) {
            continue;
        }
        let id = fresh_id(section, &mut taken, &mut generate_id)?;
        creations.push((id, record.clone()));
    }

    Ok(ReconcilePlan {
        section: section.to_string(),
        removals: removed.into_iter().map(|row| row.id.clone()).collect(),
        creations,
    })
}

fn fresh_id(
    section: &str,
    taken: &mut HashSet<RowId>,
    generate_id: &mut impl FnMut() -> RowId,
) -> Result<RowId, DomainError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = generate_id();
        if taken.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }
    Err(DomainError::RowIdExhausted {
        section: section.to_string(),
        attempts: MAX_ID_ATTEMPTS,
    })
}
