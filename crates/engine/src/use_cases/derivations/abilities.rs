//! Rules on rows of the `ability` repeating section.

use std::sync::Arc;

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::{
    ABILITY_PLUS_HERITAGE, ABILITY_ROOKIE_EXTRA_TRAUMA, SETTING_NUM_HERITAGE_TRAITS,
};
use legion_sheet_domain::rules::heritage::{heritage_traits_after_toggle, is_heritage_ability};
use legion_sheet_domain::{parse_int, Catalogue, RowRecord};

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

fn ability_trigger(field: &str) -> Vec<Trigger> {
    vec![Trigger::Repeating {
        section: "ability".to_string(),
        field: field.to_string(),
    }]
}

/// Fills an empty ability description from the playbook abilities.
pub struct AbilityDescriptionFill {
    catalogue: Arc<Catalogue>,
}

impl AbilityDescriptionFill {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn triggers() -> Vec<Trigger> {
        ability_trigger(RowRecord::NAME)
    }
}

#[async_trait]
impl ChangeRule for AbilityDescriptionFill {
    async fn on_change(&self, ctx: &mut SheetContext, _event: &ChangeEvent) -> Result<(), EngineError> {
        let name_field = ctx.row_field(RowRecord::NAME)?;
        let description_field = ctx.row_field("description")?;
        let values = ctx
            .read(&[name_field.clone(), description_field.clone()])
            .await?;
        if values.is_set(&description_field) {
            return Ok(());
        }
        if let Some(description) = self.catalogue.ability_description(values.get(&name_field)) {
            ctx.set_field(description_field, description).await?;
        }
        Ok(())
    }
}

/// "Every Inch a..." grants two more heritage traits while taken.
pub struct HeritageAbilityToggle;

impl HeritageAbilityToggle {
    pub fn triggers() -> Vec<Trigger> {
        ability_trigger("check")
    }
}

#[async_trait]
impl ChangeRule for HeritageAbilityToggle {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        let name_field = ctx.row_field(RowRecord::NAME)?;
        let values = ctx
            .read(&[name_field.clone(), SETTING_NUM_HERITAGE_TRAITS.to_string()])
            .await?;
        let ability = ctx.get_translation(ABILITY_PLUS_HERITAGE);
        if !is_heritage_ability(values.get(&name_field), &ability) {
            return Ok(());
        }
        let traits = heritage_traits_after_toggle(
            values.int(SETTING_NUM_HERITAGE_TRAITS),
            event.new_value == "1",
        );
        ctx.set_field(SETTING_NUM_HERITAGE_TRAITS, traits.to_string())
            .await?;
        Ok(())
    }
}

/// "Gotta Make It Out Alive" grants a rookie one more trauma box while taken.
pub struct ExtraTraumaAbilityToggle;

impl ExtraTraumaAbilityToggle {
    pub fn triggers() -> Vec<Trigger> {
        ability_trigger("check")
    }
}

#[async_trait]
impl ChangeRule for ExtraTraumaAbilityToggle {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        let name_field = ctx.row_field(RowRecord::NAME)?;
        let values = ctx
            .read(&[
                "playbook".to_string(),
                name_field.clone(),
                "setting_extra_trauma".to_string(),
            ])
            .await?;
        let is_trauma_ability =
            values.get(&name_field) == ctx.get_translation(ABILITY_ROOKIE_EXTRA_TRAUMA);
        let is_rookie = values.get("playbook") == ctx.get_translation("playbook_rookie");
        if !is_trauma_ability || !is_rookie {
            return Ok(());
        }
        let delta = if event.new_value == "1" { 1 } else { -1 };
        let extra = parse_int(values.get("setting_extra_trauma")) + delta;
        ctx.set_field("setting_extra_trauma", extra.to_string()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SystemRandom};
    use crate::infrastructure::memory_store::InMemorySheetStore;
    use crate::infrastructure::ports::MockSheetStore;
    use legion_sheet_domain::{RepeatingFieldRef, RowId};
    use std::collections::HashMap;

    fn row(field: &str) -> RepeatingFieldRef {
        RepeatingFieldRef {
            section: "ability".to_string(),
            row_id: RowId::parse("-R").unwrap(),
            field: field.to_string(),
        }
    }

    fn store(translations: &[(&str, &str)]) -> Arc<InMemorySheetStore> {
        let translations = translations
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Arc::new(InMemorySheetStore::new(
            translations,
            Arc::new(FixedClock(chrono::Utc::now())),
            Arc::new(SystemRandom::new()),
        ))
    }

    async fn seeded(
        translations: &[(&str, &str)],
        fields: &[(&str, &str)],
    ) -> Arc<InMemorySheetStore> {
        let store = store(translations);
        store
            .seed(fields.iter().map(|(k, v)| (k.to_string(), v.to_string())))
            .await;
        store
    }

    #[tokio::test]
    async fn description_is_filled_from_the_playbook() {
        let catalogue = Arc::new(Catalogue::resolve(|key| format!("T({key})")));
        let store = seeded(&[], &[("repeating_ability_-R_name", "t(playbook_ability_bulwark)")]).await;
        let mut ctx = SheetContext::new(store.clone(), Some(row("name")), 0);

        AbilityDescriptionFill::new(catalogue)
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_name", "x", None))
            .await
            .unwrap();
        assert_eq!(
            store.get("repeating_ability_-R_description").await.as_deref(),
            Some("T(playbook_ability_bulwark_desc)")
        );
    }

    #[tokio::test]
    async fn existing_descriptions_are_kept() {
        let catalogue = Arc::new(Catalogue::resolve(|key| format!("T({key})")));
        let mut store = MockSheetStore::new();
        store.expect_read_fields().returning(|_| {
            Ok([
                ("repeating_ability_-R_name", "T(playbook_ability_bulwark)"),
                ("repeating_ability_-R_description", "My own words"),
            ]
            .into_iter()
            .collect())
        });
        store.expect_write_fields().never();

        let mut ctx = SheetContext::new(Arc::new(store), Some(row("name")), 0);
        AbilityDescriptionFill::new(catalogue)
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_name", "x", None))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn heritage_ability_adds_and_removes_two_traits() {
        let store = seeded(
            &[(ABILITY_PLUS_HERITAGE, "Every Inch a...")],
            &[
                ("repeating_ability_-R_name", "Every Inch a..."),
                (SETTING_NUM_HERITAGE_TRAITS, "2"),
            ],
        )
        .await;

        let mut ctx = SheetContext::new(store.clone(), Some(row("check")), 0);
        HeritageAbilityToggle
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_check", "1", None))
            .await
            .unwrap();
        assert_eq!(store.get(SETTING_NUM_HERITAGE_TRAITS).await.as_deref(), Some("4"));
        // The write notifies so heritage visibility is recomputed
        assert_eq!(ctx.into_parts().0.len(), 1);

        let mut ctx = SheetContext::new(store.clone(), Some(row("check")), 0);
        HeritageAbilityToggle
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_check", "0", None))
            .await
            .unwrap();
        assert_eq!(store.get(SETTING_NUM_HERITAGE_TRAITS).await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn other_abilities_leave_heritage_alone() {
        let store = seeded(
            &[(ABILITY_PLUS_HERITAGE, "Every Inch a...")],
            &[("repeating_ability_-R_name", "Tenacious"), (SETTING_NUM_HERITAGE_TRAITS, "2")],
        )
        .await;
        let mut ctx = SheetContext::new(store.clone(), Some(row("check")), 0);
        HeritageAbilityToggle
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_check", "1", None))
            .await
            .unwrap();
        assert_eq!(store.get(SETTING_NUM_HERITAGE_TRAITS).await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn extra_trauma_only_for_rookies() {
        let translations = [
            (ABILITY_ROOKIE_EXTRA_TRAUMA, "Gotta Make It Out Alive"),
            ("playbook_rookie", "Rookie"),
        ];
        let store = seeded(
            &translations,
            &[
                ("repeating_ability_-R_name", "Gotta Make It Out Alive"),
                ("playbook", "Rookie"),
                ("setting_extra_trauma", "-1"),
            ],
        )
        .await;
        let mut ctx = SheetContext::new(store.clone(), Some(row("check")), 0);
        ExtraTraumaAbilityToggle
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_check", "1", None))
            .await
            .unwrap();
        assert_eq!(store.get("setting_extra_trauma").await.as_deref(), Some("0"));

        let soldier = seeded(
            &translations,
            &[
                ("repeating_ability_-R_name", "Gotta Make It Out Alive"),
                ("playbook", "Soldier"),
                ("setting_extra_trauma", "0"),
            ],
        )
        .await;
        let mut ctx = SheetContext::new(soldier.clone(), Some(row("check")), 0);
        ExtraTraumaAbilityToggle
            .on_change(&mut ctx, &ChangeEvent::player("repeating_ability_-R_check", "1", None))
            .await
            .unwrap();
        assert_eq!(soldier.get("setting_extra_trauma").await.as_deref(), Some("0"));
    }
}
