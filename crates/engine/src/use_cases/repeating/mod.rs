//! Bulk fill of repeating sections.
//!
//! Reads the rows a section has, asks the domain planner what to remove and
//! create, removes, then creates every new row in one silent write.

use legion_sheet_domain::rules::reconcile::{existing_row_fields, existing_rows};
use legion_sheet_domain::{plan_reconcile, RowRecord};

use crate::infrastructure::ports::WriteOptions;
use crate::reactive::{EngineError, SheetContext};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub removed: usize,
    pub created: usize,
}

/// Make `section` hold a row for every record of `desired`, matching by name.
///
/// With `delete_unchecked`, rows whose `check` is `"0"` are removed first.
/// Re-running with the same records creates nothing.
pub async fn reconcile_section(
    ctx: &mut SheetContext,
    section: &str,
    desired: &[RowRecord],
    delete_unchecked: bool,
) -> Result<ReconcileOutcome, EngineError> {
    let store = ctx.store().clone();
    let ids = store.list_row_ids(section).await?;
    let values = ctx.read(&existing_row_fields(section, &ids)).await?;
    let existing = existing_rows(section, &ids, &values);

    let plan = plan_reconcile(section, &existing, desired, delete_unchecked, || {
        store.generate_row_id()
    })?;

    for row_id in &plan.removals {
        store.remove_row(section, row_id).await?;
    }
    let fields = plan.fields();
    if !fields.is_empty() {
        ctx.write(fields, WriteOptions::SILENT).await?;
    }

    let outcome = ReconcileOutcome {
        removed: plan.removals.len(),
        created: plan.creations.len(),
    };
    tracing::debug!(
        section,
        removed = outcome.removed,
        created = outcome.created,
        "Reconciled repeating section"
    );
    Ok(outcome)
}

/// Remove every row of `section`.
pub async fn clear_section(ctx: &SheetContext, section: &str) -> Result<usize, EngineError> {
    let store = ctx.store();
    let ids = store.list_row_ids(section).await?;
    for row_id in &ids {
        store.remove_row(section, row_id).await?;
    }
    tracing::debug!(section, removed = ids.len(), "Cleared repeating section");
    Ok(ids.len())
}
