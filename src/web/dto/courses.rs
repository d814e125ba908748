use serde::{Deserialize, Serialize};

/// Success envelope: `{message, data}`, matching the wire contract the
/// frontend consumes.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DataResponse<T> {
    message: String,
    data: T,
}

impl<T> DataResponse<T> {
    pub fn new<M: Into<String>>(message: M, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseCreateBody {
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CourseListQuery {
    pub category: Option<String>,
}
