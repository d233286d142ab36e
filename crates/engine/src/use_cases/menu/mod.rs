//! The sheet menu: opening, closing and the promotion prompts.

use std::sync::Arc;

use async_trait::async_trait;
use legion_sheet_domain::rules::promotion::{
    rookie_promotion_menu, rookie_promotion_ready, soldier_promotion_fields,
    soldier_promotion_inputs, soldier_promotion_ready, ROOKIE_UPGRADE, SOLDIER_UPGRADE,
    UPGRADED_FROM_ROOKIE,
};
use legion_sheet_domain::{Catalogue, FieldMap};

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetAction, SheetContext, Trigger};

fn fields(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// `menu_open`: show the sheet choice menu and hide the settings.
pub struct OpenMenu;

#[async_trait]
impl SheetAction for OpenMenu {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        ctx.set_if_changed(fields(&[
            ("menu_mode", "sheet_choice"),
            ("show_menu", "1"),
            ("show_settings", "0"),
        ]))
        .await?;
        Ok(())
    }
}

/// `menu_cancel`
pub struct CloseMenu;

#[async_trait]
impl SheetAction for CloseMenu {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        ctx.set_field("show_menu", "0").await?;
        Ok(())
    }
}

/// Withdraw a promotion request and close the menu.
pub struct CancelPromotion {
    request_field: &'static str,
}

impl CancelPromotion {
    /// `cancel_rookie_promo`
    pub fn rookie() -> Self {
        Self {
            request_field: ROOKIE_UPGRADE,
        }
    }

    /// `cancel_soldier_promo`
    pub fn soldier() -> Self {
        Self {
            request_field: SOLDIER_UPGRADE,
        }
    }
}

#[async_trait]
impl SheetAction for CancelPromotion {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        ctx.set_if_changed(fields(&[(self.request_field, "0"), ("show_menu", "0")]))
            .await?;
        Ok(())
    }
}

/// Opens the rookie-to-soldier step once the rookie asks for it.
pub struct RookiePromotionPrompt;

impl RookiePromotionPrompt {
    pub fn triggers() -> Vec<Trigger> {
        vec![Trigger::field(ROOKIE_UPGRADE)]
    }
}

#[async_trait]
impl ChangeRule for RookiePromotionPrompt {
    async fn on_change(&self, ctx: &mut SheetContext, _event: &ChangeEvent) -> Result<(), EngineError> {
        let values = ctx
            .read(&[ROOKIE_UPGRADE.to_string(), UPGRADED_FROM_ROOKIE.to_string()])
            .await?;
        if rookie_promotion_ready(&values) {
            ctx.set_if_changed(rookie_promotion_menu()).await?;
        }
        Ok(())
    }
}

/// Opens the soldier-to-specialist step with the specialists the soldier
/// already qualifies for.
pub struct SoldierPromotionPrompt {
    catalogue: Arc<Catalogue>,
}

impl SoldierPromotionPrompt {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn triggers() -> Vec<Trigger> {
        vec![Trigger::field(SOLDIER_UPGRADE)]
    }
}

#[async_trait]
impl ChangeRule for SoldierPromotionPrompt {
    async fn on_change(&self, ctx: &mut SheetContext, _event: &ChangeEvent) -> Result<(), EngineError> {
        let values = ctx.read(&soldier_promotion_inputs()).await?;
        if !soldier_promotion_ready(&values) {
            return Ok(());
        }
        let menu = soldier_promotion_fields(self.catalogue.playbooks(), &values);
        ctx.set_if_changed(menu).await?;
        Ok(())
    }
}
