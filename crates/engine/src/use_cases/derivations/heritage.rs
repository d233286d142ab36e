//! Heritage trait picks and which heritages stay visible.

use async_trait::async_trait;
use legion_sheet_domain::rules::heritage::{heritage_inputs, heritage_outputs};

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

pub struct HeritageVisibility;

impl HeritageVisibility {
    pub fn triggers() -> Vec<Trigger> {
        heritage_inputs().into_iter().map(Trigger::Field).collect()
    }
}

#[async_trait]
impl ChangeRule for HeritageVisibility {
    async fn on_change(&self, ctx: &mut SheetContext, _event: &ChangeEvent) -> Result<(), EngineError> {
        let values = ctx.read(&heritage_inputs()).await?;
        ctx.set_if_changed(heritage_outputs(&values)).await?;
        Ok(())
    }
}
