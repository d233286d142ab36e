//! Dot ratings: the pseudo-radio step down and roll formulas.

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::{formula_field, ACTIONS, SPECIALIST_ACTIONS};
use legion_sheet_domain::rules::formula::roll_formula_for;
use legion_sheet_domain::rules::trackers::pseudo_radio_step_down;

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

/// Clicking the lowest filled dot of a rating removes one dot instead of
/// clearing the rating; every change also refreshes `<name>_formula`.
pub struct PseudoRadio {
    field: &'static str,
}

impl PseudoRadio {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }

    /// One rule per action and specialist action.
    pub fn for_all_actions() -> Vec<Self> {
        ACTIONS
            .into_iter()
            .chain(SPECIALIST_ACTIONS)
            .map(Self::new)
            .collect()
    }

    pub fn triggers(&self) -> Vec<Trigger> {
        vec![Trigger::field(self.field)]
    }
}

#[async_trait]
impl ChangeRule for PseudoRadio {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        if event.is_player() {
            if let Some(rating) =
                pseudo_radio_step_down(&event.new_value, event.previous_value.as_deref())
            {
                ctx.set_field(self.field, rating.to_string()).await?;
            }
        }
        ctx.set_field(formula_field(self.field), roll_formula_for(&event.new_value))
            .await?;
        Ok(())
    }
}

/// The legion's pressure rolls like a rating.
pub struct PressureFormula;

impl PressureFormula {
    pub fn triggers() -> Vec<Trigger> {
        vec![Trigger::field("pressure")]
    }
}

#[async_trait]
impl ChangeRule for PressureFormula {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        ctx.set_field("pressure_formula", roll_formula_for(&event.new_value))
            .await?;
        Ok(())
    }
}
