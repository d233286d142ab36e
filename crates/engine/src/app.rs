//! Application state and composition.

use std::sync::Arc;

use legion_sheet_domain::catalogue::playbooks::SPECIALIST_PLAYBOOKS;
use legion_sheet_domain::catalogue::tables::{Attribute, LEGION_PLAYBOOKS};
use legion_sheet_domain::{translation_or_sentinel, Catalogue};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{ClockPort, SheetStore};
use crate::reactive::{EngineError, RuleRegistry, SheetEngine};
use crate::use_cases::derivations::{
    AbilityDescriptionFill, Capacity, ChangedAttributeLedger, ChatImageCleanup,
    ExtraTraumaAbilityToggle, HeritageAbilityToggle, HeritageVisibility, PressureFormula,
    PseudoRadio, ResistanceRecalc, TrackerTotal, WhitespaceTrim,
};
use crate::use_cases::{
    CancelPromotion, CloseMenu, CreateCharacter, EngagementQuery, GenerateDivine,
    InitialiseLegion, OpenMenu, PromoteRookie, PromoteSoldier, RookiePromotionPrompt, SheetInit,
    SoldierPromotionPrompt, TranslatedAttributes,
};

/// Main application state.
///
/// One engine per sheet, wired to the store the sheet lives in.
pub struct App {
    pub engine: SheetEngine,
    pub catalogue: Arc<Catalogue>,
}

impl App {
    /// Resolve the catalogue against the store's translations and register
    /// every rule, sheet-opened action and button.
    pub fn new(
        store: Arc<dyn SheetStore>,
        clock: Arc<dyn ClockPort>,
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        let translator = store.clone();
        let catalogue = Arc::new(Catalogue::resolve(move |key| {
            translation_or_sentinel(key, translator.translate(key))
        }));

        let mut registry = RuleRegistry::new();
        register_rules(&mut registry, &catalogue)?;
        register_opened(&mut registry, config);
        register_buttons(&mut registry, &catalogue);

        tracing::info!(
            rules = registry.rule_names().count(),
            buttons = registry.button_names().len(),
            "Sheet engine ready"
        );
        let engine = SheetEngine::new(store, clock, registry, config);
        Ok(Self { engine, catalogue })
    }
}

/// Change rules, in the order they run for an event.
fn register_rules(registry: &mut RuleRegistry, catalogue: &Arc<Catalogue>) -> Result<(), EngineError> {
    registry.on_change(
        "changed_attributes",
        ChangedAttributeLedger::triggers(),
        Arc::new(ChangedAttributeLedger),
    );
    registry.on_change(
        "ability_description",
        AbilityDescriptionFill::triggers(),
        Arc::new(AbilityDescriptionFill::new(catalogue.clone())),
    );
    for attribute in Attribute::ALL {
        let rule = ResistanceRecalc::new(attribute);
        registry.on_change("resistance", rule.triggers(), Arc::new(rule));
    }
    for (name, rule) in [("trauma", TrackerTotal::trauma()), ("blight", TrackerTotal::blight())] {
        registry.on_change(name, rule.triggers(), Arc::new(rule));
    }
    for (name, rule) in [("stress_max", Capacity::stress()), ("trauma_max", Capacity::trauma())] {
        registry.on_change(name, rule.triggers(), Arc::new(rule));
    }
    registry
        .on_change(
            "heritage_ability",
            HeritageAbilityToggle::triggers(),
            Arc::new(HeritageAbilityToggle),
        )
        .on_change(
            "rookie_extra_trauma",
            ExtraTraumaAbilityToggle::triggers(),
            Arc::new(ExtraTraumaAbilityToggle),
        )
        .on_change(
            "heritage_choice",
            HeritageVisibility::triggers(),
            Arc::new(HeritageVisibility),
        );
    for rule in PseudoRadio::for_all_actions() {
        registry.on_change("pseudo_radio", rule.triggers(), Arc::new(rule));
    }
    registry
        .on_change("trim_whitespace", WhitespaceTrim::triggers()?, Arc::new(WhitespaceTrim))
        .on_change("chat_image", ChatImageCleanup::triggers(), Arc::new(ChatImageCleanup))
        .on_change(
            "rookie_promotion",
            RookiePromotionPrompt::triggers(),
            Arc::new(RookiePromotionPrompt),
        )
        .on_change(
            "soldier_promotion",
            SoldierPromotionPrompt::triggers(),
            Arc::new(SoldierPromotionPrompt::new(catalogue.clone())),
        )
        .on_change("pressure", PressureFormula::triggers(), Arc::new(PressureFormula));
    Ok(())
}

fn register_opened(registry: &mut RuleRegistry, config: &EngineConfig) {
    registry
        .on_opened("translated_attributes", Arc::new(TranslatedAttributes))
        .on_opened("engagement_query", Arc::new(EngagementQuery))
        .on_opened("sheet_init", Arc::new(SheetInit::new(config)));
}

fn register_buttons(registry: &mut RuleRegistry, catalogue: &Arc<Catalogue>) {
    registry
        .on_click("menu_open", Arc::new(OpenMenu))
        .on_click("menu_cancel", Arc::new(CloseMenu))
        .on_click("cancel_rookie_promo", Arc::new(CancelPromotion::rookie()))
        .on_click("cancel_soldier_promo", Arc::new(CancelPromotion::soldier()));

    for playbook in catalogue.playbooks() {
        registry.on_click(
            format!("generate_{}", playbook.id),
            Arc::new(CreateCharacter::new(catalogue.clone(), playbook.id.clone())),
        );
    }
    for divine in catalogue.divine_templates() {
        registry.on_click(
            format!("generate_{}", divine.id),
            Arc::new(GenerateDivine::new(catalogue.clone(), divine.id.clone())),
        );
    }

    registry.on_click("promote_to_soldier", Arc::new(PromoteRookie::new(catalogue.clone())));
    for specialist in SPECIALIST_PLAYBOOKS {
        registry.on_click(
            format!("promote_to_{specialist}"),
            Arc::new(PromoteSoldier::new(catalogue.clone(), specialist)),
        );
    }

    for legion in LEGION_PLAYBOOKS {
        registry.on_click(format!("generate_{legion}"), Arc::new(InitialiseLegion::new(legion)));
    }
}
