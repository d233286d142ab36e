//! Ordered registration of change rules, sheet-opened actions and buttons.
//!
//! When one change matches several rules they run in registration order.
//! That order is part of the sheet's behaviour and is fixed at composition
//! time in [`crate::app`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::reactive::{ChangeEvent, EngineError, SheetContext, Trigger, TriggerMatch};

/// Recomputation run when a watched field changes.
#[async_trait]
pub trait ChangeRule: Send + Sync {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent)
        -> Result<(), EngineError>;
}

/// Action run on sheet open or on a button click.
#[async_trait]
pub trait SheetAction: Send + Sync {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError>;
}

pub struct RegisteredRule {
    pub name: &'static str,
    pub triggers: Vec<Trigger>,
    pub rule: Arc<dyn ChangeRule>,
}

impl RegisteredRule {
    /// First trigger matching `attribute`; a rule runs once per event.
    fn matches(&self, attribute: &str) -> Option<TriggerMatch> {
        self.triggers.iter().find_map(|t| t.matches(attribute))
    }
}

#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
    opened: Vec<(&'static str, Arc<dyn SheetAction>)>,
    buttons: HashMap<String, Arc<dyn SheetAction>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change(
        &mut self,
        name: &'static str,
        triggers: Vec<Trigger>,
        rule: Arc<dyn ChangeRule>,
    ) -> &mut Self {
        let watched: Vec<String> = triggers.iter().map(Trigger::to_string).collect();
        tracing::debug!(rule = name, triggers = %watched.join(", "), "Registering callback");
        self.rules.push(RegisteredRule {
            name,
            triggers,
            rule,
        });
        self
    }

    pub fn on_opened(&mut self, name: &'static str, action: Arc<dyn SheetAction>) -> &mut Self {
        tracing::debug!(action = name, "Registering on sheet opening");
        self.opened.push((name, action));
        self
    }

    /// Register the action of `button`. A later registration replaces an earlier one.
    pub fn on_click(&mut self, button: impl Into<String>, action: Arc<dyn SheetAction>) -> &mut Self {
        let button = button.into();
        tracing::debug!(button = %button, "Registering for button");
        if self.buttons.insert(button.clone(), action).is_some() {
            tracing::warn!(button = %button, "Button registered twice, keeping the last action");
        }
        self
    }

    /// Rules matching `attribute`, in registration order.
    pub fn matching<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = (&'a RegisteredRule, TriggerMatch)> + 'a {
        self.rules
            .iter()
            .filter_map(move |rule| rule.matches(attribute).map(|m| (rule, m)))
    }

    pub fn opened(&self) -> impl Iterator<Item = (&'static str, &Arc<dyn SheetAction>)> {
        self.opened.iter().map(|(name, action)| (*name, action))
    }

    pub fn button(&self, name: &str) -> Option<&Arc<dyn SheetAction>> {
        self.buttons.get(name)
    }

    /// Registered button names, sorted.
    pub fn button_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.buttons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop;

    #[async_trait]
    impl ChangeRule for Noop {
        async fn on_change(&self, _: &mut SheetContext, _: &ChangeEvent) -> Result<(), EngineError> {
            Ok(())
        }
    }

    #[async_trait]
    impl SheetAction for Noop {
        async fn run(&self, _: &mut SheetContext) -> Result<(), EngineError> {
            Ok(())
        }
    }

    fn triggers(patterns: &[&str]) -> Vec<Trigger> {
        Trigger::parse_all(patterns.iter().copied()).unwrap()
    }

    #[test]
    fn matching_keeps_registration_order() {
        let mut registry = RuleRegistry::new();
        registry
            .on_change("second", triggers(&["wreck", "shoot"]), Arc::new(Noop))
            .on_change("other", triggers(&["sway"]), Arc::new(Noop))
            .on_change("first", triggers(&["wreck"]), Arc::new(Noop));

        let names: Vec<&str> = registry.matching("wreck").map(|(r, _)| r.name).collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[test]
    fn a_rule_matches_once_even_with_overlapping_triggers() {
        let mut registry = RuleRegistry::new();
        registry.on_change("dup", triggers(&["wreck", "wreck"]), Arc::new(Noop));
        assert_eq!(registry.matching("wreck").count(), 1);
    }

    #[test]
    fn repeating_matches_carry_the_row() {
        let mut registry = RuleRegistry::new();
        registry.on_change("fill", triggers(&["repeating_ability:name"]), Arc::new(Noop));
        let (_, matched) = registry
            .matching("repeating_ability_-Q_name")
            .next()
            .unwrap();
        assert!(matches!(matched, TriggerMatch::Row(row) if row.row_id.as_str() == "-Q"));
    }

    #[test]
    fn buttons_are_looked_up_by_name() {
        let mut registry = RuleRegistry::new();
        registry
            .on_click("menu_open", Arc::new(Noop))
            .on_click("menu_cancel", Arc::new(Noop))
            .on_click("menu_open", Arc::new(Noop));
        assert!(registry.button("menu_open").is_some());
        assert!(registry.button("generate_necromancer").is_none());
        assert_eq!(registry.button_names(), vec!["menu_cancel", "menu_open"]);
    }
}
