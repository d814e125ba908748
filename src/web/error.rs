use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    error::log_error,
    media::MediaError,
    model::{CatalogError, ResourceType},
};

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("AuthenticationRequired")]
    AuthenticationRequired,

    #[error("AuthenticationTokenInvalid. Error: {error}")]
    AuthenticationTokenInvalid {
        error: jsonwebtoken::errors::Error,
    },
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("ResourceNotFound: {resource_type:?}")]
    ResourceNotFound { resource_type: ResourceType },

    #[error("ResourceForbidden: {resource_type:?}")]
    ResourceForbidden { resource_type: ResourceType },

    #[error("ResourceFetchError: {resource_type:?}. Error: {error}")]
    ResourceFetchError {
        resource_type: ResourceType,
        error: CatalogError,
    },

    #[error("ResourceBadRequest: {resource_type:?}. Detail: {detail}")]
    ResourceBadRequest {
        resource_type: ResourceType,
        detail: String,
    },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("ServerMediaError: {0}")]
    ServerMediaError(#[from] MediaError),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn client_display(&self) -> String {
        String::from("Internal server error.")
    }
}

impl AuthenticationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            Self::AuthenticationTokenInvalid { .. } => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::AuthenticationRequired => String::from("Authentication required."),
            Self::AuthenticationTokenInvalid { .. } => {
                String::from("Authentication error, bearer token invalid.")
            }
        }
    }
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::ResourceForbidden { .. } => StatusCode::FORBIDDEN,
            Self::ResourceFetchError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ResourceBadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceNotFound { resource_type } => match resource_type {
                ResourceType::Course => String::from("Course not found."),
                ResourceType::Video => String::from("Video not found."),
            },
            Self::ResourceForbidden { resource_type } => match resource_type {
                ResourceType::Course => String::from("Not authorized to modify this course."),
                ResourceType::Video => String::from("Not authorized to access this video."),
            },
            Self::ResourceFetchError { .. } => {
                String::from("Unable to complete the operation.")
            }
            Self::ResourceBadRequest { detail, .. } => detail.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("ResourceError - {0}")]
    ResourceError(#[from] ResourceError),
    #[error("AuthenticationError - {0}")]
    AuthenticationError(#[from] AuthenticationError),
    #[error("ServerError - {0}")]
    ServerError(#[from] ServerError),
}

impl WebError {
    pub fn resource_not_found(r#type: ResourceType) -> Self {
        Self::ResourceError(ResourceError::ResourceNotFound {
            resource_type: r#type,
        })
    }

    pub fn resource_forbidden(r#type: ResourceType) -> Self {
        Self::ResourceError(ResourceError::ResourceForbidden {
            resource_type: r#type,
        })
    }

    pub fn resource_fetch_error(r#type: ResourceType, error: CatalogError) -> Self {
        Self::ResourceError(ResourceError::ResourceFetchError {
            resource_type: r#type,
            error,
        })
    }

    pub fn resource_bad_request<S: Into<String>>(r#type: ResourceType, detail: S) -> Self {
        Self::ResourceError(ResourceError::ResourceBadRequest {
            resource_type: r#type,
            detail: detail.into(),
        })
    }

    pub fn auth_required() -> Self {
        Self::AuthenticationError(AuthenticationError::AuthenticationRequired)
    }

    pub fn auth_token_invalid(error: jsonwebtoken::errors::Error) -> Self {
        Self::AuthenticationError(AuthenticationError::AuthenticationTokenInvalid { error })
    }

    /// Maps a course-operation failure onto the response taxonomy.
    pub fn course_error(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound => Self::resource_not_found(ResourceType::Course),
            CatalogError::Forbidden => Self::resource_forbidden(ResourceType::Course),
            e if e.is_validation() => {
                Self::resource_bad_request(ResourceType::Course, e.to_string())
            }
            e => Self::resource_fetch_error(ResourceType::Course, e),
        }
    }

    /// Maps an upload-issuance failure onto the response taxonomy.
    pub fn media_error(error: MediaError) -> Self {
        if error.is_validation() {
            Self::resource_bad_request(ResourceType::Video, error.to_string())
        } else {
            Self::ServerError(ServerError::ServerMediaError(error))
        }
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::ResourceError(e) => e.status_code(),
            Self::AuthenticationError(e) => e.status_code(),
            Self::ServerError(e) => e.status_code(),
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceError(e) => e.client_display(),
            Self::AuthenticationError(e) => e.client_display(),
            Self::ServerError(e) => e.client_display(),
        }
    }

    /// Opaque machine-readable code; never carries the underlying error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ResourceError(ResourceError::ResourceNotFound { .. }) => "ResourceNotFound",
            Self::ResourceError(ResourceError::ResourceForbidden { .. }) => "ResourceForbidden",
            Self::ResourceError(ResourceError::ResourceFetchError { .. }) => "UpstreamError",
            Self::ResourceError(ResourceError::ResourceBadRequest { .. }) => "ValidationError",
            Self::AuthenticationError(AuthenticationError::AuthenticationRequired) => {
                "AuthenticationRequired"
            }
            Self::AuthenticationError(AuthenticationError::AuthenticationTokenInvalid {
                ..
            }) => "AuthenticationTokenInvalid",
            Self::ServerError(_) => "UpstreamError",
        }
    }
}

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message for the client
    pub message: String,
    /// Opaque error code; the underlying error is logged, not echoed
    pub error: String,
    /// Optional debug details (only in debug mode)
    pub details: Option<String>,
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        log_error(&self);

        let status_code = self.status_code();

        let body = ErrorResponse {
            message: self.client_display(),
            error: self.error_code().to_string(),
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        };

        (status_code, Json(body)).into_response()
    }
}
