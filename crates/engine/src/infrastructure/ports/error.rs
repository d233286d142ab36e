//! Error types for store operations.

/// Store operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("Store unavailable during {operation}: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },

    /// A field name the store refuses to hold.
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// A repeating row that does not exist in its section.
    #[error("Row {row_id} not found in section {section}")]
    RowNotFound { section: String, row_id: String },
}

impl StoreError {
    /// Create an Unavailable error with operation context.
    pub fn unavailable(operation: &'static str, message: impl ToString) -> Self {
        Self::Unavailable {
            operation,
            message: message.to_string(),
        }
    }

    /// Create an InvalidField error.
    pub fn invalid_field(name: impl ToString) -> Self {
        Self::InvalidField(name.to_string())
    }

    /// Create a RowNotFound error.
    pub fn row_not_found(section: impl ToString, row_id: impl ToString) -> Self {
        Self::RowNotFound {
            section: section.to_string(),
            row_id: row_id.to_string(),
        }
    }

    /// Check if this is a RowNotFound error.
    pub fn is_row_not_found(&self) -> bool {
        matches!(self, Self::RowNotFound { .. })
    }
}
