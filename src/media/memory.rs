use std::time::Duration;

use chrono::Utc;

use crate::media::{MediaResult, UploadGrant, UploadIssuer};

/// Deterministic issuer for tests and offline development: the "credential"
/// is just a URL under a fake upload host, scoped to the requested key.
#[derive(Debug, Clone)]
pub struct StubUploadIssuer {
    base: String,
}

impl StubUploadIssuer {
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait::async_trait]
impl UploadIssuer for StubUploadIssuer {
    async fn grant_put(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> MediaResult<UploadGrant> {
        let url = format!(
            "{}/{}?contentType={}&expiresIn={}",
            self.base.trim_end_matches('/'),
            key,
            content_type,
            ttl.as_secs()
        );
        let expires_at = Utc::now() + chrono::Duration::seconds(ttl.as_secs() as i64);
        Ok(UploadGrant::new(url, expires_at))
    }
}
