//! Use cases - the sheet's behaviour, built on the reactive engine.
//!
//! Derivations keep computed fields in step with their inputs. The menu,
//! lifecycle and wizard modules hold the sheet-opened work and the button
//! flows; `repeating` holds the bulk fill they share.

pub mod derivations;
pub mod lifecycle;
pub mod menu;
pub mod repeating;
pub mod wizard;

pub use lifecycle::{EngagementQuery, SheetInit, TranslatedAttributes};
pub use menu::{CancelPromotion, CloseMenu, OpenMenu, RookiePromotionPrompt, SoldierPromotionPrompt};
pub use repeating::{clear_section, reconcile_section, ReconcileOutcome};
pub use wizard::{CreateCharacter, GenerateDivine, InitialiseLegion, PromoteRookie, PromoteSoldier};
