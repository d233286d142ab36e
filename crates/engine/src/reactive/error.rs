//! Errors surfaced by the recomputation engine.

use legion_sheet_domain::DomainError;

use crate::infrastructure::ports::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// A click on a button nothing is registered for.
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    /// A row-relative field was asked for outside a repeating row.
    #[error("Field {0} needs a repeating row but the rule has none")]
    MissingRowScope(String),
}
