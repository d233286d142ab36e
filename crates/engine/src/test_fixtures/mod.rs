//! Helpers shared by the flow tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{seeded_store, echo_translations};
//!
//! #[tokio::test]
//! async fn heavy_gets_a_shield() {
//!     let store = seeded_store(&echo_translations(), &[("sheet_type", "character")]).await;
//!     // ... drive the engine
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::infrastructure::clock::{FixedClock, SystemRandom};
use crate::infrastructure::memory_store::InMemorySheetStore;

/// Empty in-memory store translating with `translations`.
pub fn memory_store(translations: &[(&str, &str)]) -> Arc<InMemorySheetStore> {
    let translations: HashMap<String, String> = translations
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    Arc::new(InMemorySheetStore::new(
        translations,
        Arc::new(FixedClock(now)),
        Arc::new(SystemRandom::new()),
    ))
}

/// In-memory store holding `fields`.
pub async fn seeded_store(
    translations: &[(&str, &str)],
    fields: &[(&str, &str)],
) -> Arc<InMemorySheetStore> {
    let store = memory_store(translations);
    store
        .seed(fields.iter().map(|(k, v)| (k.to_string(), v.to_string())))
        .await;
    store
}

/// Translations for the keys the flow tests look at, each shown as `T(key)`.
pub fn echo_translations() -> Vec<(&'static str, &'static str)> {
    vec![
        ("playbook_rookie", "T(playbook_rookie)"),
        ("playbook_soldier", "T(playbook_soldier)"),
        ("playbook_heavy", "T(playbook_heavy)"),
        ("playbook_ability_bulwark", "T(playbook_ability_bulwark)"),
        ("playbook_ability_backup", "T(playbook_ability_backup)"),
        ("bonusdice", "Bonus dice"),
        ("effect_query", "?{Effect|Standard,standard}"),
        ("notes", "Notes"),
        ("numberofdice", "Number of dice"),
        ("risky", "Risky"),
        ("controlled", "Controlled"),
        ("desperate", "Desperate"),
        ("position", "Position"),
        ("mission_type", "Mission type"),
    ]
}

/// Field value from a snapshot, `""` when absent.
pub fn field<'a>(snapshot: &'a legion_sheet_domain::FieldMap, name: &str) -> &'a str {
    snapshot.get(name).map(String::as_str).unwrap_or("")
}
