//! Work done every time the sheet is opened.

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::is_valid_sheet_type;
use legion_sheet_domain::rules::creation::sheet_version_fields;
use legion_sheet_domain::rules::formula::{
    engagement_query, notes_query, numdice_formula, position_query,
};
use legion_sheet_domain::{repeating_field, FieldMap};

use crate::infrastructure::config::EngineConfig;
use crate::infrastructure::ports::WriteOptions;
use crate::reactive::{EngineError, SheetAction, SheetContext};

/// Roll queries built from the current translations.
pub struct TranslatedAttributes;

#[async_trait]
impl SheetAction for TranslatedAttributes {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        let desired = {
            let translate = |key: &str| ctx.get_translation(key);
            FieldMap::from([
                ("bonusdice".to_string(), translate("bonusdice")),
                ("effect_query".to_string(), translate("effect_query")),
                ("notes_query".to_string(), notes_query(&translate)),
                ("numberofdice".to_string(), numdice_formula(&translate("numberofdice"))),
                ("position_query".to_string(), position_query(&translate)),
            ])
        };
        ctx.set_if_changed(desired).await?;
        Ok(())
    }
}

/// Engagement roll prompt, only on marshal sheets.
pub struct EngagementQuery;

#[async_trait]
impl SheetAction for EngagementQuery {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        if ctx.read_one("sheet_type").await? != "marshal" {
            return Ok(());
        }
        let query = engagement_query(&|key: &str| ctx.get_translation(key));
        ctx.set_field("engagement_roll_query", query).await?;
        Ok(())
    }
}

/// Repairs the sheet type and stamps the sheet version.
///
/// A sheet without a version is new: it also gets an `autogen` ability row so
/// the ability section never starts empty.
pub struct SheetInit {
    version: String,
    title: String,
}

impl SheetInit {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            version: config.sheet_version.clone(),
            title: config.sheet_title.clone(),
        }
    }
}

#[async_trait]
impl SheetAction for SheetInit {
    async fn run(&self, ctx: &mut SheetContext) -> Result<(), EngineError> {
        let values = ctx
            .read(&["sheet_type".to_string(), "version".to_string()])
            .await?;
        if !is_valid_sheet_type(values.get("sheet_type")) {
            tracing::debug!(sheet_type = values.get("sheet_type"), "Resetting sheet type");
            ctx.set_field("sheet_type", "character").await?;
        }

        let mut setting = sheet_version_fields(&self.version, &self.title);
        if values.is_set("version") {
            let found = values.get("version");
            if found != self.version {
                tracing::info!(from = found, to = %self.version, "Upgrading sheet");
            }
            ctx.set_if_changed(setting).await?;
        } else {
            let row_id = ctx.store().generate_row_id();
            setting.insert(repeating_field("ability", &row_id, "autogen"), "1".to_string());
            ctx.write(setting, WriteOptions::NOTIFY).await?;
            tracing::info!(version = %self.version, "Initialised new sheet");
        }
        Ok(())
    }
}
