use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use chrono::Utc;

use crate::config::Media;
use crate::media::{MediaError, MediaResult, UploadGrant, UploadIssuer};

/// Presigned-PUT credential issuer over an S3-compatible bucket.
#[derive(Debug, Clone)]
pub struct S3UploadIssuer {
    client: Client,
    bucket: String,
}

impl S3UploadIssuer {
    pub async fn from_config(media: &Media) -> Self {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);

        // local object stores (minio et al.) need an explicit endpoint and
        // path-style addressing
        if let Some(endpoint) = media.endpoint() {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        let client = Client::from_conf(builder.build());
        Self {
            client,
            bucket: media.bucket().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl UploadIssuer for S3UploadIssuer {
    async fn grant_put(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> MediaResult<UploadGrant> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| MediaError::PresignError(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| MediaError::PresignError(e.to_string()))?;

        let expires_at = Utc::now() + chrono::Duration::seconds(ttl.as_secs() as i64);
        Ok(UploadGrant::new(presigned.uri().to_string(), expires_at))
    }
}
