use std::sync::Arc;

use crate::application::ports::{
    MetadataSourceError, TranscriptSource, TranscriptSourceError, VideoMetadataSource,
};
use crate::domain::{Transcript, VideoMetadata, VideoReference};

pub struct VideoInfoFetcher {
    metadata_source: Arc<dyn VideoMetadataSource>,
    transcript_source: Arc<dyn TranscriptSource>,
    max_duration_seconds: u64,
    transcript_languages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub metadata: VideoMetadata,
    pub transcript: Transcript,
}

impl VideoInfoFetcher {
    pub fn new(
        metadata_source: Arc<dyn VideoMetadataSource>,
        transcript_source: Arc<dyn TranscriptSource>,
        max_duration_seconds: u64,
        transcript_languages: Vec<String>,
    ) -> Self {
        Self {
            metadata_source,
            transcript_source,
            max_duration_seconds,
            transcript_languages,
        }
    }

    /// Fetches metadata, enforces the duration limit, then fetches the
    /// transcript. Videos over the limit never reach the transcript source.
    pub async fn fetch(&self, video: &VideoReference) -> Result<VideoInfo, FetchError> {
        let metadata = self
            .metadata_source
            .fetch_metadata(video)
            .await
            .map_err(FetchError::Metadata)?;

        tracing::debug!(
            title = %metadata.title,
            duration_seconds = metadata.duration_seconds,
            "Video metadata extracted"
        );

        if metadata.exceeds(self.max_duration_seconds) {
            return Err(FetchError::DurationExceeded {
                duration_seconds: metadata.duration_seconds,
                max_duration_seconds: self.max_duration_seconds,
            });
        }

        let fragments = self
            .transcript_source
            .fetch_fragments(video, &self.transcript_languages)
            .await
            .map_err(FetchError::Transcript)?;

        let transcript =
            Transcript::from_fragments(&fragments).ok_or(FetchError::EmptyTranscript)?;

        tracing::info!(
            fragments = fragments.len(),
            chars = transcript.len(),
            "Transcript assembled"
        );

        Ok(VideoInfo {
            metadata,
            transcript,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("metadata: {0}")]
    Metadata(#[source] MetadataSourceError),
    #[error(
        "Video duration {duration_seconds} seconds exceeds the allowed limit of {max_duration_seconds} seconds."
    )]
    DurationExceeded {
        duration_seconds: u64,
        max_duration_seconds: u64,
    },
    #[error("transcript: {0}")]
    Transcript(#[source] TranscriptSourceError),
    #[error("Transcription is empty.")]
    EmptyTranscript,
}

impl FetchError {
    /// Message safe to hand back to the caller.
    pub fn user_message(&self) -> String {
        match self {
            Self::Metadata(_) => "Error extracting video information.".to_string(),
            Self::DurationExceeded { .. } | Self::EmptyTranscript => self.to_string(),
            Self::Transcript(_) => "Error generating transcription.".to_string(),
        }
    }
}
