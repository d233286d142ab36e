//! Steps shared by the creation and promotion flows.

use legion_sheet_domain::rules::creation::{
    base_attributes, item_regeneration, raised_specialist_action, starting_actions,
};
use legion_sheet_domain::rules::trackers::CHANGED_ATTRIBUTES;
use legion_sheet_domain::{Catalogue, SheetTemplate};

use crate::reactive::{EngineError, SheetContext};
use crate::use_cases::repeating::{clear_section, reconcile_section};

const ABILITY_SECTION: &str = "ability";
const ITEM_SECTION: &str = "item";

/// Raise the template's specialist action by one dot.
pub(super) async fn raise_specialist_action(
    ctx: &mut SheetContext,
    template: &SheetTemplate,
) -> Result<(), EngineError> {
    let Some(action) = template.specialist_action.as_deref() else {
        return Ok(());
    };
    let current = ctx.read_one(action).await?;
    ctx.set_field(action, raised_specialist_action(&current).to_string())
        .await?;
    Ok(())
}

/// Drop every ability row, then add the template's abilities.
pub(super) async fn replace_abilities(
    ctx: &mut SheetContext,
    template: &SheetTemplate,
) -> Result<(), EngineError> {
    clear_section(ctx, ABILITY_SECTION).await?;
    reconcile_section(ctx, ABILITY_SECTION, &template.abilities, false).await?;
    Ok(())
}

/// Add the template's abilities, dropping the ones left unticked
/// from the previous playbook.
pub(super) async fn merge_abilities(
    ctx: &mut SheetContext,
    template: &SheetTemplate,
) -> Result<(), EngineError> {
    reconcile_section(ctx, ABILITY_SECTION, &template.abilities, true).await?;
    Ok(())
}

pub(super) async fn regenerate_items(
    ctx: &mut SheetContext,
    catalogue: &Catalogue,
    template: &SheetTemplate,
) -> Result<(), EngineError> {
    let regeneration = item_regeneration(catalogue.slots(), &template.items);
    reconcile_section(ctx, ITEM_SECTION, &regeneration.utility_rows, true).await?;
    ctx.set_if_changed(regeneration.fields).await?;
    Ok(())
}

pub(super) async fn set_starting_actions(
    ctx: &mut SheetContext,
    template: &SheetTemplate,
) -> Result<(), EngineError> {
    let ledger = ctx.read_one(CHANGED_ATTRIBUTES).await?;
    ctx.set_if_changed(starting_actions(&ledger, template))
        .await?;
    Ok(())
}

pub(super) async fn set_base_attributes(
    ctx: &mut SheetContext,
    template: &SheetTemplate,
    is_promotion: bool,
) -> Result<(), EngineError> {
    ctx.set_if_changed(base_attributes(template, is_promotion))
        .await?;
    Ok(())
}

/// Move the sheet onto `template` while keeping what the character earned.
pub(super) async fn perform_promotion(
    ctx: &mut SheetContext,
    catalogue: &Catalogue,
    template: &SheetTemplate,
) -> Result<(), EngineError> {
    raise_specialist_action(ctx, template).await?;
    merge_abilities(ctx, template).await?;
    regenerate_items(ctx, catalogue, template).await?;
    set_base_attributes(ctx, template, true).await
}
