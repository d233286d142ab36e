//! Trauma and blight totals, stress and trauma maxima.

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::{blight_fields, trauma_fields};
use legion_sheet_domain::rules::trackers::{stress_max, sum_fields, trauma_max};

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

/// Sum of a group of checkboxes, recomputed after player edits.
pub struct TrackerTotal {
    output: &'static str,
    inputs: Vec<String>,
}

impl TrackerTotal {
    pub fn trauma() -> Self {
        Self {
            output: "trauma",
            inputs: trauma_fields(),
        }
    }

    pub fn blight() -> Self {
        Self {
            output: "blight",
            inputs: blight_fields(),
        }
    }

    pub fn triggers(&self) -> Vec<Trigger> {
        self.inputs.iter().cloned().map(Trigger::Field).collect()
    }
}

#[async_trait]
impl ChangeRule for TrackerTotal {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        if !event.is_player() {
            return Ok(());
        }
        let values = ctx.read(&self.inputs).await?;
        ctx.set_field(self.output, sum_fields(&self.inputs, &values).to_string())
            .await?;
        Ok(())
    }
}

/// A maximum derived from its "extra boxes" setting.
pub struct Capacity {
    setting: &'static str,
    output: &'static str,
    compute: fn(&str) -> i64,
}

impl Capacity {
    pub fn stress() -> Self {
        Self {
            setting: "setting_extra_stress",
            output: "stress_max",
            compute: stress_max,
        }
    }

    pub fn trauma() -> Self {
        Self {
            setting: "setting_extra_trauma",
            output: "trauma_max",
            compute: trauma_max,
        }
    }

    pub fn triggers(&self) -> Vec<Trigger> {
        vec![Trigger::field(self.setting)]
    }
}

#[async_trait]
impl ChangeRule for Capacity {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        let max = (self.compute)(&event.new_value);
        ctx.set_field(self.output, max.to_string()).await?;
        Ok(())
    }
}
