//! Legion sheet - replays a script of player actions against an in-memory sheet.
//!
//! ```text
//! legion-sheet demos/create_heavy.json
//! ```
//!
//! The script is a JSON array of steps:
//! `"open"`, `{"click": "<button>"}` or `{"edit": {"field": "...", "value": "..."}}`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use legion_sheet_engine::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::{load_translations, EngineConfig, ENV_TRANSLATIONS},
    memory_store::InMemorySheetStore,
    ports::ClockPort,
};
use legion_sheet_engine::reactive::DispatchReport;
use legion_sheet_engine::App;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ScriptStep {
    Open,
    Click(String),
    Edit { field: String, value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "legion_sheet_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let script_path = std::env::args()
        .nth(1)
        .context("usage: legion-sheet <script.json>")?;
    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading script {script_path}"))?;
    let steps: Vec<ScriptStep> = serde_json::from_str(&script)
        .with_context(|| format!("parsing script {script_path}"))?;

    let config = EngineConfig::from_env();
    let translations = match std::env::var(ENV_TRANSLATIONS) {
        Ok(path) => load_translations(Path::new(&path))?,
        Err(_) => {
            tracing::warn!("{ENV_TRANSLATIONS} not set, every label shows its translation key");
            HashMap::new()
        }
    };

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let store = Arc::new(InMemorySheetStore::new(
        translations,
        clock.clone(),
        Arc::new(SystemRandom::new()),
    ));
    let app = App::new(store.clone(), clock, &config)?;

    tracing::info!(steps = steps.len(), script = %script_path, "Replaying script");
    for step in steps {
        let report = match &step {
            ScriptStep::Open => app.engine.sheet_opened().await?,
            ScriptStep::Click(button) => app.engine.click(button).await?,
            ScriptStep::Edit { field, value } => app.engine.player_edit(field, value).await?,
        };
        log_step(&step, &report);
    }

    let fields = store.snapshot().await;
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

fn log_step(step: &ScriptStep, report: &DispatchReport) {
    tracing::info!(
        step = ?step,
        events = report.events,
        rules_fired = report.rules_fired,
        fields_written = report.fields_written,
        dropped = report.dropped,
        throttled = report.throttled,
        "Step replayed"
    );
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
