use async_trait::async_trait;

use crate::domain::VideoReference;

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Returns the transcript fragments, in playback order, for the first
    /// language in `languages` the video has captions for.
    async fn fetch_fragments(
        &self,
        video: &VideoReference,
        languages: &[String],
    ) -> Result<Vec<String>, TranscriptSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptSourceError {
    #[error("extractor unavailable: {0}")]
    Unavailable(String),
    #[error("no transcript in languages [{}]", .0.join(", "))]
    NoTranscript(Vec<String>),
    #[error("transcript fetch failed: {0}")]
    FetchFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
