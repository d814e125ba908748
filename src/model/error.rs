use thiserror::Error;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("sqlx migrate error: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),
    #[error("sqlx error: {0}")]
    SqlxError(#[from] sqlx::Error),
    #[error("json error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("access to this course is forbidden")]
    Forbidden,
    #[error("course not found")]
    NotFound,
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("invalid price format: {0}")]
    InvalidPrice(String),
    // no #[from] here: a serde failure inside a submitted sections payload is
    // client input, not a store fault
    #[error("invalid sections payload: {0}")]
    InvalidSections(serde_json::Error),
}

impl CatalogError {
    /// Whether this failure was caused by the caller's input rather than the
    /// store or this process.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidPrice(_) | Self::InvalidSections(_)
        )
    }
}
