use thiserror::Error;

pub type MediaResult<T> = std::result::Result<T, MediaError>;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
    #[error("presign error: {0}")]
    PresignError(String),
}

impl MediaError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}
