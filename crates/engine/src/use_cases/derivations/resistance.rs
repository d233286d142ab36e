//! Resistance totals and their roll formulas.

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::Attribute;
use legion_sheet_domain::rules::resistance::{
    resistance_inputs, resistance_outputs, resistance_triggers,
};

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

pub struct ResistanceRecalc {
    attribute: Attribute,
}

impl ResistanceRecalc {
    pub fn new(attribute: Attribute) -> Self {
        Self { attribute }
    }

    pub fn triggers(&self) -> Vec<Trigger> {
        resistance_triggers(self.attribute)
            .into_iter()
            .map(Trigger::Field)
            .collect()
    }
}

#[async_trait]
impl ChangeRule for ResistanceRecalc {
    async fn on_change(&self, ctx: &mut SheetContext, _event: &ChangeEvent) -> Result<(), EngineError> {
        let values = ctx.read(&resistance_inputs(self.attribute)).await?;
        ctx.set_if_changed(resistance_outputs(self.attribute, &values))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SystemRandom};
    use crate::infrastructure::memory_store::InMemorySheetStore;
    use legion_sheet_domain::rules::formula::roll_formula;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn store() -> Arc<InMemorySheetStore> {
        Arc::new(InMemorySheetStore::new(
            HashMap::new(),
            Arc::new(FixedClock(chrono::Utc::now())),
            Arc::new(SystemRandom::new()),
        ))
    }

    #[tokio::test]
    async fn recomputation_is_idempotent() {
        let store = store();
        store
            .seed(
                [("consort", "1"), ("sway", "2"), ("discipline", "0"), ("resolve_bonus", "1")]
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            )
            .await;
        let rule = ResistanceRecalc::new(Attribute::Resolve);
        let event = ChangeEvent::player("consort", "1", None);

        let mut first = SheetContext::new(store.clone(), None, 0);
        rule.on_change(&mut first, &event).await.unwrap();
        let (events, written) = first.into_parts();
        assert_eq!(written, 2);
        assert_eq!(events.len(), 2);
        assert_eq!(store.get("resolve").await.as_deref(), Some("3"));
        assert_eq!(store.get("resolve_formula").await, Some(roll_formula(3)));

        let mut second = SheetContext::new(store.clone(), None, 0);
        rule.on_change(&mut second, &event).await.unwrap();
        assert_eq!(second.into_parts(), (vec![], 0));
    }

    #[tokio::test]
    async fn formula_offers_every_bonus_clause() {
        let store = store();
        store
            .seed([("maneuver", "1"), ("skirmish", "1")].map(|(k, v)| (k.to_string(), v.to_string())))
            .await;
        let mut ctx = SheetContext::new(store.clone(), None, 0);
        ResistanceRecalc::new(Attribute::Prowess)
            .on_change(&mut ctx, &ChangeEvent::player("skirmish", "1", None))
            .await
            .unwrap();

        let formula = store.get("prowess_formula").await.unwrap();
        assert_eq!(formula.matches('|').count(), 10);
    }
}
