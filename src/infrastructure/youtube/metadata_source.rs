use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{MetadataSourceError, VideoMetadataSource};
use crate::domain::{VideoMetadata, VideoReference};

use super::yt_dlp::{YtDlp, YtDlpError};

const UNKNOWN: &str = "Unknown";

pub struct YtDlpMetadataSource {
    yt_dlp: YtDlp,
}

#[derive(Deserialize)]
struct YtDlpInfo {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    uploader: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    thumbnail: Option<String>,
}

impl YtDlpMetadataSource {
    pub fn new(yt_dlp: YtDlp) -> Self {
        Self { yt_dlp }
    }
}

#[async_trait]
impl VideoMetadataSource for YtDlpMetadataSource {
    async fn fetch_metadata(
        &self,
        video: &VideoReference,
    ) -> Result<VideoMetadata, MetadataSourceError> {
        tracing::debug!(url = %video, "Extracting video info");

        let stdout = self
            .yt_dlp
            .run([
                "--dump-single-json",
                "--skip-download",
                "--no-playlist",
                "--no-warnings",
                video.as_str(),
            ])
            .await
            .map_err(|e| match e {
                YtDlpError::Spawn { .. } => MetadataSourceError::Unavailable(e.to_string()),
                YtDlpError::Failed { .. } => MetadataSourceError::ExtractionFailed(e.to_string()),
            })?;

        parse_video_info(&stdout)
    }
}

/// Maps yt-dlp's info JSON onto `VideoMetadata`. Missing fields fall back to
/// `Unknown` and a zero duration.
pub fn parse_video_info(json: &[u8]) -> Result<VideoMetadata, MetadataSourceError> {
    let info: YtDlpInfo =
        serde_json::from_slice(json).map_err(|e| MetadataSourceError::Malformed(e.to_string()))?;

    let duration_seconds = info
        .duration
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d.ceil() as u64)
        .unwrap_or(0);

    Ok(VideoMetadata {
        title: info.title.unwrap_or_else(|| UNKNOWN.to_string()),
        channel_name: info
            .uploader
            .or(info.channel)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        duration_seconds,
        thumbnail_url: info.thumbnail,
    })
}
