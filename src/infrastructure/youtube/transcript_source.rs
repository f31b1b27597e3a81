use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{TranscriptSource, TranscriptSourceError};
use crate::domain::VideoReference;

use super::caption_tracks::{CaptionKind, CaptionListing, CaptionTrack};
use super::webvtt::{parse_cues, select_subtitle};
use super::yt_dlp::{YtDlp, YtDlpError};

/// Fetches uploaded or auto-generated captions through yt-dlp and turns them
/// into transcript fragments.
///
/// The caption listing is read first so that only one real track is
/// downloaded; machine-translated tracks are never requested.
pub struct YtDlpTranscriptSource {
    yt_dlp: YtDlp,
}

impl YtDlpTranscriptSource {
    pub fn new(yt_dlp: YtDlp) -> Self {
        Self { yt_dlp }
    }

    async fn list_tracks(
        &self,
        video: &VideoReference,
    ) -> Result<CaptionListing, TranscriptSourceError> {
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
            .map_err(map_yt_dlp_error)?;

        CaptionListing::from_info_json(&stdout).map_err(|e| {
            TranscriptSourceError::FetchFailed(format!("malformed caption listing: {e}"))
        })
    }

    async fn download_track(
        &self,
        video: &VideoReference,
        track: &CaptionTrack,
    ) -> Result<String, TranscriptSourceError> {
        let workdir = tempfile::tempdir()?;
        let output_template = workdir
            .path()
            .join("%(id)s.%(ext)s")
            .to_string_lossy()
            .into_owned();
        let write_flag = match track.kind {
            CaptionKind::Manual => "--write-subs",
            CaptionKind::Automatic => "--write-auto-subs",
        };

        self.yt_dlp
            .run([
                "--skip-download",
                write_flag,
                "--sub-langs",
                track.language.as_str(),
                "--sub-format",
                "vtt",
                "--output",
                output_template.as_str(),
                "--no-playlist",
                "--no-warnings",
                video.as_str(),
            ])
            .await
            .map_err(map_yt_dlp_error)?;

        let mut files: Vec<PathBuf> = Vec::new();
        let mut entries = tokio::fs::read_dir(workdir.path()).await?;
        while let Some(entry) = entries.next_entry().await? {
            files.push(entry.path());
        }
        files.sort();

        let subtitle = select_subtitle(&files, std::slice::from_ref(&track.language))
            .ok_or_else(|| TranscriptSourceError::NoTranscript(vec![track.language.clone()]))?;

        tracing::debug!(file = %subtitle.display(), "Reading caption file");

        Ok(tokio::fs::read_to_string(&subtitle).await?)
    }
}

fn map_yt_dlp_error(e: YtDlpError) -> TranscriptSourceError {
    match e {
        YtDlpError::Spawn { .. } => TranscriptSourceError::Unavailable(e.to_string()),
        YtDlpError::Failed { .. } => TranscriptSourceError::FetchFailed(e.to_string()),
    }
}

#[async_trait]
impl TranscriptSource for YtDlpTranscriptSource {
    async fn fetch_fragments(
        &self,
        video: &VideoReference,
        languages: &[String],
    ) -> Result<Vec<String>, TranscriptSourceError> {
        tracing::debug!(url = %video, languages = %languages.join(","), "Fetching captions");

        let track = self
            .list_tracks(video)
            .await?
            .select(languages)
            .ok_or_else(|| TranscriptSourceError::NoTranscript(languages.to_vec()))?;

        tracing::debug!(language = %track.language, kind = ?track.kind, "Using caption track");

        let vtt = self.download_track(video, &track).await?;
        Ok(parse_cues(&vtt))
    }
}
