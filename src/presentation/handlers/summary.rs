use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::domain::{SummaryResult, VideoReference};
use crate::presentation::error::SummaryRequestError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub channel: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub transcription: String,
    pub summary: String,
    pub audio_download_link: String,
}

impl From<SummaryResult> for SummaryResponse {
    fn from(result: SummaryResult) -> Self {
        Self {
            channel: result.channel,
            title: result.title,
            thumbnail: result.thumbnail,
            transcription: result.transcription,
            summary: result.summary,
            audio_download_link: result.audio_download_link,
        }
    }
}

/// `POST /api/generate_video_summary`
///
/// Validate, fetch metadata and transcript, summarize, respond. The first
/// failure short-circuits to the error translator.
#[tracing::instrument(skip(state, payload))]
pub async fn generate_video_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, SummaryRequestError> {
    let Json(request) = payload?;
    let video = VideoReference::parse(&request.url)?;

    tracing::debug!(url = %video, "Generating video summary");

    let info = state.video_info_fetcher.fetch(&video).await?;
    let summary = state.summarizer.summarize(&info.transcript).await?;
    let result = SummaryResult::new(&video, info.metadata, info.transcript, summary);

    tracing::info!(url = %video, title = %result.title, "Video summary generated");

    Ok(Json(SummaryResponse::from(result)))
}
