//! Menu wizards: character creation, chosen and broken sheets, promotions
//! and the legion playbooks.
//!
//! ## Flows
//!
//! - `generate_<playbook>`: new character from a playbook
//! - `generate_<divine>`: chosen or broken sheet
//! - `promote_to_soldier` / `promote_to_<specialist>`: keep the character,
//!   move to the next playbook
//! - `generate_<legion playbook>`: commander, marshal, quartermaster,
//!   lorekeeper and spymaster sheets

mod steps;

use std::sync::Arc;

use async_trait::async_trait;
use legion_sheet_domain::catalogue::playbooks::SOLDIER;
use legion_sheet_domain::catalogue::tables::{STARTING_MATERIEL, STARTING_SQUADS};
use legion_sheet_domain::rules::creation::{rookie_promotion_fields, soldier_promotion_applied};
use legion_sheet_domain::{Catalogue, FieldMap, RowRecord};

use crate::reactive::{EngineError, SheetAction, SheetContext};
use crate::use_cases::lifecycle::EngagementQuery;
use crate::use_cases::repeating::reconcile_section;

use steps::{
    perform_promotion, raise_specialist_action, regenerate_items, replace_abilities,
    set_base_attributes, set_starting_actions,
};

/// `generate_<playbook>`
pub struct CreateCharacter {
    catalogue: Arc<Catalogue>,
    playbook: String,
}

impl CreateCharacter {
    pub fn new(catalogue: Arc<Catalogue>, playbook: impl Into<String>) -> Self {
        Self {
            catalogue,
            playbook: playbook.into(),
        }
    }
}

#[async_trait]
impl SheetAction for CreateCharacter {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        let template = self.catalogue.playbook(&self.playbook)?;
        ctx.set_field("show_menu", "0").await?;
        raise_specialist_action(ctx, template).await?;
        replace_abilities(ctx, template).await?;
        regenerate_items(ctx, &self.catalogue, template).await?;
        set_starting_actions(ctx, template).await?;
        set_base_attributes(ctx, template, false).await?;
        tracing::info!(playbook = %self.playbook, "Created character");
        Ok(())
    }
}

/// `generate_<divine>`
pub struct GenerateDivine {
    catalogue: Arc<Catalogue>,
    divine: String,
}

impl GenerateDivine {
    pub fn new(catalogue: Arc<Catalogue>, divine: impl Into<String>) -> Self {
        Self {
            catalogue,
            divine: divine.into(),
        }
    }
}

#[async_trait]
impl SheetAction for GenerateDivine {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        let template = self.catalogue.divine(&self.divine)?;
        ctx.set_field("show_menu", "0").await?;
        set_base_attributes(ctx, template, false).await?;
        replace_abilities(ctx, template).await?;
        tracing::info!(playbook = %self.divine, "Generated divine sheet");
        Ok(())
    }
}

/// `promote_to_soldier`
pub struct PromoteRookie {
    catalogue: Arc<Catalogue>,
}

impl PromoteRookie {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }
}

#[async_trait]
impl SheetAction for PromoteRookie {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        let template = self.catalogue.playbook(SOLDIER)?;
        let extra_trauma = ctx.read_one("setting_extra_trauma").await?;
        ctx.set_if_changed(rookie_promotion_fields(&extra_trauma))
            .await?;
        perform_promotion(ctx, &self.catalogue, template).await?;
        tracing::info!(playbook = SOLDIER, "Promoted rookie");
        Ok(())
    }
}

/// `promote_to_<specialist>`
pub struct PromoteSoldier {
    catalogue: Arc<Catalogue>,
    target: String,
}

impl PromoteSoldier {
    pub fn new(catalogue: Arc<Catalogue>, target: impl Into<String>) -> Self {
        Self {
            catalogue,
            target: target.into(),
        }
    }
}

#[async_trait]
impl SheetAction for PromoteSoldier {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        let template = self.catalogue.playbook(&self.target)?;
        ctx.set_if_changed(soldier_promotion_applied()).await?;
        perform_promotion(ctx, &self.catalogue, template).await?;
        tracing::info!(playbook = %self.target, "Promoted soldier");
        Ok(())
    }
}

/// `generate_<legion playbook>`
///
/// The marshal starts with the legion's squads, the quartermaster with its
/// materiel. The other legion playbooks only switch the sheet type.
pub struct InitialiseLegion {
    target: &'static str,
}

impl InitialiseLegion {
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

fn named_rows(ctx: &SheetContext, keys: &[&str]) -> Vec<RowRecord> {
    keys.iter()
        .map(|key| RowRecord::named(ctx.get_translation(key)))
        .collect()
}

#[async_trait]
impl SheetAction for InitialiseLegion {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        ctx.set_if_changed(FieldMap::from([
            ("sheet_type".to_string(), self.target.to_string()),
            ("show_menu".to_string(), "0".to_string()),
        ]))
        .await?;

        match self.target {
            "marshal" => {
                let squads = named_rows(ctx, &STARTING_SQUADS);
                reconcile_section(ctx, "squad", &squads, false).await?;
                EngagementQuery.run(ctx).await?;
            }
            "quartermaster" => {
                let materiel = named_rows(ctx, &STARTING_MATERIEL);
                reconcile_section(ctx, "materiel", &materiel, false).await?;
            }
            _ => {}
        }
        tracing::info!(playbook = self.target, "Initialised legion sheet");
        Ok(())
    }
}
