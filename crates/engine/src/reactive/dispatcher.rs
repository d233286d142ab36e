//! The event loop: player edits, sheet opening and clicks in, recomputations out.

use std::collections::VecDeque;
use std::sync::Arc;

use legion_sheet_domain::{FieldMap, RepeatingFieldRef};
use tokio::sync::Mutex;

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::{ClockPort, SheetStore, WriteOptions};
use crate::reactive::{
    ButtonThrottle, ChangeEvent, EngineError, RuleRegistry, SheetAction, SheetContext,
    TriggerMatch,
};

/// What one entry point did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Change events processed
    pub events: usize,
    pub rules_fired: usize,
    /// Fields whose stored value changed
    pub fields_written: usize,
    /// Events cut off by the cascade guard
    pub dropped: usize,
    /// The click fell inside the throttle window and did nothing
    pub throttled: bool,
}

pub struct SheetEngine {
    store: Arc<dyn SheetStore>,
    clock: Arc<dyn ClockPort>,
    registry: RuleRegistry,
    throttle: Mutex<ButtonThrottle>,
    max_cascade_depth: u32,
}

impl SheetEngine {
    pub fn new(
        store: Arc<dyn SheetStore>,
        clock: Arc<dyn ClockPort>,
        registry: RuleRegistry,
        config: &EngineConfig,
    ) -> Self {
        Self {
            store,
            clock,
            registry,
            throttle: Mutex::new(ButtonThrottle::from_millis(config.button_throttle_ms)),
            max_cascade_depth: config.max_cascade_depth,
        }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// A player typed `value` into `field`.
    ///
    /// The value is stored silently, then a player event carrying the
    /// previous value is dispatched. Re-entering the current value does nothing.
    pub async fn player_edit(&self, field: &str, value: &str) -> Result<DispatchReport, EngineError> {
        let changes = self
            .store
            .write_fields(
                FieldMap::from([(field.to_string(), value.to_string())]),
                WriteOptions::SILENT,
            )
            .await?;
        let queue = changes
            .into_iter()
            .map(|c| ChangeEvent::player(c.name, c.current, c.previous))
            .collect();
        self.drain(queue, DispatchReport::default()).await
    }

    /// Dispatch an event delivered by the host.
    pub async fn dispatch(&self, event: ChangeEvent) -> Result<DispatchReport, EngineError> {
        self.drain(VecDeque::from([event]), DispatchReport::default())
            .await
    }

    /// Run every sheet-opened action in order, then their cascades.
    pub async fn sheet_opened(&self) -> Result<DispatchReport, EngineError> {
        tracing::debug!("Triggering for sheet opening");
        let mut report = DispatchReport::default();
        let mut queue = VecDeque::new();
        for (name, action) in self.registry.opened() {
            tracing::debug!(action = name, "Running sheet-opened action");
            self.run_action(action.as_ref(), &mut queue, &mut report)
                .await?;
        }
        self.drain(queue, report).await
    }

    pub async fn click(&self, button: &str) -> Result<DispatchReport, EngineError> {
        let action = self
            .registry
            .button(button)
            .ok_or_else(|| EngineError::UnknownButton(button.to_string()))?;

        let admitted = self.throttle.lock().await.admit(button, self.clock.now());
        if !admitted {
            tracing::debug!(button = %button, "Click throttled");
            return Ok(DispatchReport {
                throttled: true,
                ..DispatchReport::default()
            });
        }

        tracing::debug!(button = %button, "Triggering for button");
        let mut report = DispatchReport::default();
        let mut queue = VecDeque::new();
        self.run_action(action.as_ref(), &mut queue, &mut report)
            .await?;
        self.drain(queue, report).await
    }

    async fn run_action(
        &self,
        action: &dyn SheetAction,
        queue: &mut VecDeque<ChangeEvent>,
        report: &mut DispatchReport,
    ) -> Result<(), EngineError> {
        let mut ctx = SheetContext::new(self.store.clone(), None, 0);
        action.run(&mut ctx).await?;
        let (emitted, written) = ctx.into_parts();
        report.fields_written += written;
        queue.extend(emitted);
        Ok(())
    }

    async fn drain(
        &self,
        mut queue: VecDeque<ChangeEvent>,
        mut report: DispatchReport,
    ) -> Result<DispatchReport, EngineError> {
        while let Some(event) = queue.pop_front() {
            if event.depth > self.max_cascade_depth {
                tracing::warn!(
                    attribute = %event.source_attribute,
                    depth = event.depth,
                    max_depth = self.max_cascade_depth,
                    "Cascade too deep, dropping change"
                );
                report.dropped += 1;
                continue;
            }

            report.events += 1;
            tracing::debug!(
                attribute = %event.source_attribute,
                source = ?event.source_type,
                depth = event.depth,
                "Triggering for attribute"
            );

            for (registered, matched) in self.registry.matching(&event.source_attribute) {
                let row: Option<RepeatingFieldRef> = match matched {
                    TriggerMatch::Field => None,
                    TriggerMatch::Row(row) => Some(row),
                };
                let mut ctx = SheetContext::new(self.store.clone(), row, event.depth);
                if let Err(err) = registered.rule.on_change(&mut ctx, &event).await {
                    tracing::warn!(
                        rule = registered.name,
                        attribute = %event.source_attribute,
                        error = %err,
                        "Rule failed"
                    );
                    return Err(err);
                }
                report.rules_fired += 1;

                let (emitted, written) = ctx.into_parts();
                report.fields_written += written;
                queue.extend(emitted);
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory_store::InMemorySheetStore;
    use crate::infrastructure::ports::MockClockPort;
    use crate::infrastructure::clock::SystemRandom;
    use crate::reactive::{ChangeRule, Trigger};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    /// Copies its trigger's value into `target`.
    struct Mirror {
        target: &'static str,
    }

    #[async_trait]
    impl ChangeRule for Mirror {
        async fn on_change(
            &self,
            ctx: &mut SheetContext,
            event: &ChangeEvent,
        ) -> Result<(), EngineError> {
            ctx.set_field(self.target, event.new_value.clone()).await?;
            Ok(())
        }
    }

    /// Increments its own field forever.
    struct Runaway;

    #[async_trait]
    impl ChangeRule for Runaway {
        async fn on_change(
            &self,
            ctx: &mut SheetContext,
            event: &ChangeEvent,
        ) -> Result<(), EngineError> {
            let next = legion_sheet_domain::parse_int(&event.new_value) + 1;
            ctx.set_field("counter", next.to_string()).await?;
            Ok(())
        }
    }

    struct OpenMenu;

    #[async_trait]
    impl SheetAction for OpenMenu {
        async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
            ctx.set_field("show_menu", "1").await?;
            Ok(())
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn store() -> Arc<InMemorySheetStore> {
        Arc::new(InMemorySheetStore::new(
            HashMap::new(),
            Arc::new(FixedClock(now())),
            Arc::new(SystemRandom::new()),
        ))
    }

    fn engine(store: Arc<InMemorySheetStore>, registry: RuleRegistry, depth: u32) -> SheetEngine {
        let config = EngineConfig {
            max_cascade_depth: depth,
            ..EngineConfig::default()
        };
        SheetEngine::new(store, Arc::new(FixedClock(now())), registry, &config)
    }

    #[tokio::test]
    async fn writes_cascade_through_the_queue() {
        let store = store();
        let mut registry = RuleRegistry::new();
        registry
            .on_change("a_to_b", vec![Trigger::field("a")], Arc::new(Mirror { target: "b" }))
            .on_change("b_to_c", vec![Trigger::field("b")], Arc::new(Mirror { target: "c" }));
        let engine = engine(store.clone(), registry, 16);

        let report = engine.player_edit("a", "7").await.unwrap();
        assert_eq!(report.events, 3);
        assert_eq!(report.rules_fired, 2);
        assert_eq!(report.fields_written, 2);
        assert_eq!(store.get("c").await.as_deref(), Some("7"));
    }

    #[tokio::test]
    async fn unchanged_player_value_dispatches_nothing() {
        let store = store();
        store.seed([("a".to_string(), "7".to_string())]).await;
        let mut registry = RuleRegistry::new();
        registry.on_change("a_to_b", vec![Trigger::field("a")], Arc::new(Mirror { target: "b" }));
        let engine = engine(store.clone(), registry, 16);

        let report = engine.player_edit("a", "7").await.unwrap();
        assert_eq!(report, DispatchReport::default());
    }

    #[tokio::test]
    async fn cascade_guard_stops_runaway_rules() {
        let store = store();
        let mut registry = RuleRegistry::new();
        registry.on_change("runaway", vec![Trigger::field("counter")], Arc::new(Runaway));
        let engine = engine(store.clone(), registry, 4);

        let report = engine.player_edit("counter", "0").await.unwrap();
        assert_eq!(report.dropped, 1);
        assert_eq!(report.events, 5);
        assert_eq!(store.get("counter").await.as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn repeated_clicks_inside_the_window_are_throttled() {
        let store = store();
        let mut registry = RuleRegistry::new();
        registry.on_click("menu_open", Arc::new(OpenMenu));

        let mut clock = MockClockPort::new();
        let mut ticks = vec![0, 100, 250].into_iter();
        clock
            .expect_now()
            .returning(move || now() + chrono::TimeDelta::milliseconds(ticks.next().unwrap_or(0)));
        let engine = SheetEngine::new(store.clone(), Arc::new(clock), registry, &EngineConfig::default());

        let first = engine.click("menu_open").await.unwrap();
        assert!(!first.throttled);
        assert_eq!(first.fields_written, 1);

        let second = engine.click("menu_open").await.unwrap();
        assert!(second.throttled);

        let third = engine.click("menu_open").await.unwrap();
        assert!(!third.throttled);
        // Already open, nothing to write
        assert_eq!(third.fields_written, 0);
    }

    #[tokio::test]
    async fn unknown_buttons_are_errors() {
        let engine = engine(store(), RuleRegistry::new(), 16);
        let err = engine.click("generate_necromancer").await.unwrap_err();
        assert!(matches!(err, EngineError::UnknownButton(name) if name == "generate_necromancer"));
    }

    #[tokio::test]
    async fn opened_actions_cascade_like_edits() {
        let store = store();
        let mut registry = RuleRegistry::new();
        registry
            .on_opened("menu", Arc::new(OpenMenu))
            .on_change(
                "mirror_menu",
                vec![Trigger::field("show_menu")],
                Arc::new(Mirror { target: "menu_seen" }),
            );
        let engine = engine(store.clone(), registry, 16);

        let report = engine.sheet_opened().await.unwrap();
        assert_eq!(report.rules_fired, 1);
        assert_eq!(store.get("menu_seen").await.as_deref(), Some("1"));
    }
}
