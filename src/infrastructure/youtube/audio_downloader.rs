use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{AudioDownloadError, AudioDownloader};
use crate::domain::{AudioCodec, DownloadedFile, VideoReference};

use super::yt_dlp::{YtDlp, YtDlpError};

/// Downloads the best audio stream and has yt-dlp's ffmpeg post-processor
/// transcode it into `output_dir`.
pub struct YtDlpAudioDownloader {
    yt_dlp: YtDlp,
    output_dir: PathBuf,
    codec: AudioCodec,
    quality: String,
}

impl YtDlpAudioDownloader {
    pub fn new(
        yt_dlp: YtDlp,
        output_dir: impl Into<PathBuf>,
        codec: AudioCodec,
        quality: impl Into<String>,
    ) -> Self {
        Self {
            yt_dlp,
            output_dir: output_dir.into(),
            codec,
            quality: quality.into(),
        }
    }

    fn output_template(&self) -> String {
        self.output_dir
            .join("%(title)s.%(ext)s")
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait]
impl AudioDownloader for YtDlpAudioDownloader {
    async fn download(
        &self,
        video: &VideoReference,
    ) -> Result<DownloadedFile, AudioDownloadError> {
        tracing::debug!(
            url = %video,
            codec = %self.codec,
            quality = %self.quality,
            "Downloading audio"
        );

        let output_template = self.output_template();
        let stdout = self
            .yt_dlp
            .run([
                "--format",
                "bestaudio/best",
                "--extract-audio",
                "--audio-format",
                self.codec.extension(),
                "--audio-quality",
                self.quality.as_str(),
                "--output",
                output_template.as_str(),
                "--print",
                "filename",
                "--no-simulate",
                "--no-playlist",
                "--no-warnings",
                video.as_str(),
            ])
            .await
            .map_err(|e| match e {
                YtDlpError::Spawn { .. } => AudioDownloadError::Unavailable(e.to_string()),
                YtDlpError::Failed { .. } => AudioDownloadError::DownloadFailed(e.to_string()),
            })?;

        let path = parse_printed_filename(&stdout).ok_or(AudioDownloadError::NoOutput)?;

        tracing::info!(path = %path.display(), "Audio downloaded");
        Ok(DownloadedFile::new(path, self.codec.clone()))
    }
}

/// yt-dlp prints the prepared filename (source container extension) once per
/// video. The last non-empty line wins.
pub fn parse_printed_filename(stdout: &[u8]) -> Option<PathBuf> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(PathBuf::from)
}
