//! Which actions the player has touched by hand.

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::{ACTIONS, SPECIALIST_ACTIONS};
use legion_sheet_domain::rules::trackers::{record_changed_attribute, CHANGED_ATTRIBUTES};

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

/// Appends every player-edited action to `changed_attributes`, so that
/// character creation leaves those ratings alone.
pub struct ChangedAttributeLedger;

impl ChangedAttributeLedger {
    pub fn triggers() -> Vec<Trigger> {
        std::iter::once("setting_extra_trauma")
            .chain(ACTIONS)
            .chain(SPECIALIST_ACTIONS)
            .map(Trigger::field)
            .collect()
    }
}

#[async_trait]
impl ChangeRule for ChangedAttributeLedger {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        if !event.is_player() {
            return Ok(());
        }
        let ledger = ctx.read_one(CHANGED_ATTRIBUTES).await?;
        let updated = record_changed_attribute(&ledger, &event.source_attribute);
        ctx.set_field(CHANGED_ATTRIBUTES, updated).await?;
        Ok(())
    }
}
