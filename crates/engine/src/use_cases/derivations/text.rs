//! Free-text tidying: whitespace trimming and chat avatar URLs.

use std::sync::LazyLock;

use async_trait::async_trait;
use legion_sheet_domain::catalogue::tables::AUTO_EXPAND_FIELDS;
use legion_sheet_domain::rules::trackers::trimmed_if_padded;
use regex_lite::Regex;

use crate::reactive::{ChangeEvent, ChangeRule, EngineError, SheetContext, Trigger};

/// Trims surrounding whitespace from the auto-expanding text areas after
/// the player edits them.
pub struct WhitespaceTrim;

impl WhitespaceTrim {
    pub fn triggers() -> Result<Vec<Trigger>, EngineError> {
        Ok(Trigger::parse_all(AUTO_EXPAND_FIELDS)?)
    }
}

#[async_trait]
impl ChangeRule for WhitespaceTrim {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        if !event.is_player() {
            return Ok(());
        }
        let text = ctx.read_one(&event.source_attribute).await?;
        if let Some(trimmed) = trimmed_if_padded(&text) {
            ctx.set_field(event.source_attribute.clone(), trimmed).await?;
        }
        Ok(())
    }
}

// Roll20 avatar uploads, any size, with a cache-busting query
static AVATAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https://s3\.amazonaws\.com/files\.d20\.io/images/.*)/(?:med|max|original|thumb)\.(jpg|png)\?\d+$",
    )
    .expect("valid regex")
});

/// Thumbnail URL of a Roll20 avatar upload, if `url` is one.
pub fn avatar_thumbnail(url: &str) -> Option<String> {
    let captures = AVATAR_RE.captures(url)?;
    Some(format!("{}/thumb.{}", &captures[1], &captures[2]))
}

/// Points `chat_image` at the small version of an uploaded avatar.
pub struct ChatImageCleanup;

impl ChatImageCleanup {
    pub fn triggers() -> Vec<Trigger> {
        vec![Trigger::field("chat_image")]
    }
}

#[async_trait]
impl ChangeRule for ChatImageCleanup {
    async fn on_change(&self, ctx: &mut SheetContext, event: &ChangeEvent) -> Result<(), EngineError> {
        if let Some(thumbnail) = avatar_thumbnail(&event.new_value) {
            ctx.set_field("chat_image", thumbnail).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockSheetStore, WriteOptions};
    use legion_sheet_domain::FieldMap;
    use mockall::predicate::*;
    use std::sync::Arc;

    #[test]
    fn avatar_urls_point_at_thumbnails() {
        assert_eq!(
            avatar_thumbnail(
                "https://s3.amazonaws.com/files.d20.io/images/123/abc/max.png?1588000000"
            )
            .as_deref(),
            Some("https://s3.amazonaws.com/files.d20.io/images/123/abc/thumb.png")
        );
        assert_eq!(
            avatar_thumbnail("https://s3.amazonaws.com/files.d20.io/images/9/med.jpg?1").as_deref(),
            Some("https://s3.amazonaws.com/files.d20.io/images/9/thumb.jpg")
        );
        // Already cleaned URLs carry no query and stay as they are
        assert_eq!(
            avatar_thumbnail("https://s3.amazonaws.com/files.d20.io/images/9/thumb.jpg"),
            None
        );
        assert_eq!(avatar_thumbnail("https://example.com/me.png?1"), None);
    }

    #[tokio::test]
    async fn padded_text_is_trimmed_in_place() {
        let mut store = MockSheetStore::new();
        store
            .expect_read_fields()
            .returning(|_| Ok([("repeating_clock_-C_name", "  Escape ")].into_iter().collect()));
        store
            .expect_write_fields()
            .with(
                eq(FieldMap::from([(
                    "repeating_clock_-C_name".to_string(),
                    "Escape".to_string(),
                )])),
                eq(WriteOptions::NOTIFY),
            )
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let mut ctx = SheetContext::new(Arc::new(store), None, 0);
        WhitespaceTrim
            .on_change(&mut ctx, &ChangeEvent::player("repeating_clock_-C_name", "  Escape ", None))
            .await
            .unwrap();
    }

    #[test]
    fn trimmed_fields_are_valid_triggers() {
        let triggers = WhitespaceTrim::triggers().unwrap();
        assert_eq!(triggers.len(), 6);
        assert!(triggers[2].matches("repeating_clock_-C_name").is_some());
        assert!(triggers[3].matches("char_notes").is_some());
    }
}
