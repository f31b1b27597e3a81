use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use serde::Deserialize;
use tokio_util::io::ReaderStream;

use crate::application::services::ServedFile;
use crate::domain::VideoReference;
use crate::presentation::error::DownloadRequestError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub url: Option<String>,
}

/// `GET /api/download_audio?url=...`
///
/// Downloads and transcodes the audio track, then streams it back as an
/// attachment. The file is deleted by a background task shortly after the
/// response starts.
#[tracing::instrument(skip(state, query))]
pub async fn download_audio_handler(
    State(state): State<AppState>,
    query: Result<Query<DownloadQuery>, QueryRejection>,
) -> Result<Response, DownloadRequestError> {
    let Query(query) = query?;
    let video = VideoReference::parse(query.url.as_deref().unwrap_or_default())?;

    tracing::debug!(url = %video, "Downloading audio");

    let downloaded = state.audio_downloader.download(&video).await?;
    let served = state.file_server.serve(&downloaded).await?;

    attachment_response(served)
}

fn attachment_response(served: ServedFile) -> Result<Response, DownloadRequestError> {
    let disposition = content_disposition(&served.file_name);
    let body = Body::from_stream(ReaderStream::new(served.file));

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, served.content_type)
        .header(header::CONTENT_LENGTH, served.size_bytes.to_string())
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(body)?)
}

/// `attachment` disposition with an ASCII `filename` and, for names that need
/// it, an RFC 5987 `filename*` carrying the exact UTF-8 name.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if fallback == file_name {
        format!("attachment; filename=\"{}\"", file_name)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(file_name)
        )
    }
}
