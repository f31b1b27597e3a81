use super::{Transcript, VideoMetadata, VideoReference};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    pub channel: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub transcription: String,
    pub summary: String,
    pub audio_download_link: String,
}

impl SummaryResult {
    pub fn new(
        video: &VideoReference,
        metadata: VideoMetadata,
        transcript: Transcript,
        summary: String,
    ) -> Self {
        Self {
            channel: metadata.channel_name,
            title: metadata.title,
            thumbnail: metadata.thumbnail_url,
            transcription: transcript.into_string(),
            summary,
            audio_download_link: format!("download_audio?url={}", video.as_str()),
        }
    }
}
