use async_trait::async_trait;

use crate::domain::{VideoMetadata, VideoReference};

#[async_trait]
pub trait VideoMetadataSource: Send + Sync {
    async fn fetch_metadata(
        &self,
        video: &VideoReference,
    ) -> Result<VideoMetadata, MetadataSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataSourceError {
    #[error("extractor unavailable: {0}")]
    Unavailable(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("malformed metadata: {0}")]
    Malformed(String),
}
