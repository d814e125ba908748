use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::media::UploadTarget;

#[derive(Debug, Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoUploadBody {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoUploadData {
    upload_url: String,
    video_url: String,
    expires_at: DateTime<Utc>,
}

impl From<UploadTarget> for VideoUploadData {
    fn from(target: UploadTarget) -> Self {
        Self {
            upload_url: target.grant().url().to_string(),
            expires_at: target.grant().expires_at(),
            video_url: target.video_url().to_string(),
        }
    }
}
