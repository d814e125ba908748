use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

mod error;
pub use error::{MediaError, MediaResult};

mod memory;
pub use memory::StubUploadIssuer;

mod s3;
pub use s3::S3UploadIssuer;

/// How long an issued write credential stays valid.
pub const UPLOAD_GRANT_TTL: Duration = Duration::from_secs(60);

/// Write-scoped, time-limited credential for one storage key.
#[derive(Debug, Clone)]
pub struct UploadGrant {
    url: String,
    expires_at: DateTime<Utc>,
}

impl UploadGrant {
    pub fn new(url: String, expires_at: DateTime<Utc>) -> Self {
        Self { url, expires_at }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// An issued upload destination: the short-lived write grant plus the
/// permanent retrieval URL the caller may later record on a chapter.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    grant: UploadGrant,
    video_url: String,
}

impl UploadTarget {
    pub fn grant(&self) -> &UploadGrant {
        &self.grant
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }
}

#[async_trait::async_trait]
pub trait UploadIssuer: Send + Sync + std::fmt::Debug {
    async fn grant_put(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> MediaResult<UploadGrant>;
}

/// Issues upload targets for course video assets. Persists nothing: the
/// retrieval URL only becomes durable once the caller records it through a
/// course update.
#[derive(Debug, Clone)]
pub struct MediaManager {
    issuer: Arc<dyn UploadIssuer>,
    cdn_base: String,
}

impl MediaManager {
    pub fn new<S: Into<String>>(issuer: Arc<dyn UploadIssuer>, cdn_base: S) -> Self {
        Self {
            issuer,
            cdn_base: cdn_base.into(),
        }
    }

    pub async fn issue_upload_target(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> MediaResult<UploadTarget> {
        if file_name.trim().is_empty() {
            return Err(MediaError::MissingField("fileName"));
        }
        if content_type.trim().is_empty() {
            return Err(MediaError::MissingField("fileType"));
        }

        let key = format!("videos/{}/{}", Uuid::new_v4(), file_name);
        let grant = self
            .issuer
            .grant_put(&key, content_type, UPLOAD_GRANT_TTL)
            .await?;
        let video_url = format!("{}/{}", self.cdn_base.trim_end_matches('/'), key);

        Ok(UploadTarget { grant, video_url })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn media_manager() -> MediaManager {
        MediaManager::new(
            Arc::new(StubUploadIssuer::new("https://uploads.local")),
            "https://cdn.kursa.dev/",
        )
    }

    #[tokio::test]
    async fn same_filename_twice_yields_distinct_keys_and_urls() {
        let media = media_manager();

        let first = media
            .issue_upload_target("lecture.mp4", "video/mp4")
            .await
            .unwrap();
        let second = media
            .issue_upload_target("lecture.mp4", "video/mp4")
            .await
            .unwrap();

        assert_ne!(first.video_url(), second.video_url());
        assert_ne!(first.grant().url(), second.grant().url());
    }

    #[tokio::test]
    async fn retrieval_url_joins_cdn_base_with_key() {
        let media = media_manager();

        let target = media
            .issue_upload_target("lecture.mp4", "video/mp4")
            .await
            .unwrap();

        assert!(target.video_url().starts_with("https://cdn.kursa.dev/videos/"));
        assert!(target.video_url().ends_with("/lecture.mp4"));
        // one slash between base and key even with a trailing slash configured
        assert!(!target.video_url().contains("dev//videos"));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let media = media_manager();

        let err = media.issue_upload_target("", "video/mp4").await.unwrap_err();
        assert!(matches!(err, MediaError::MissingField("fileName")));

        let err = media
            .issue_upload_target("lecture.mp4", " ")
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::MissingField("fileType")));
    }

    #[tokio::test]
    async fn grant_expiry_tracks_the_fixed_ttl() {
        let media = media_manager();
        let before = Utc::now();

        let target = media
            .issue_upload_target("lecture.mp4", "video/mp4")
            .await
            .unwrap();

        let ttl = chrono::Duration::from_std(UPLOAD_GRANT_TTL).unwrap();
        assert!(target.grant().expires_at() >= before + ttl);
    }
}
