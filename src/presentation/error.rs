use std::any::Any;
use std::error::Error;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::AudioDownloadError;
use crate::application::services::{FetchError, FileServeError, SummaryError};
use crate::domain::InvalidVideoUrl;

const SUMMARY_FAILED: &str = "An error occurred while generating the summary.";
const DOWNLOAD_FAILED: &str = "Error downloading audio.";
const SERVE_FAILED: &str = "An error occurred while downloading the audio.";
const FILE_NOT_FOUND: &str = "File not found.";
const UNEXPECTED: &str = "An unexpected error occurred.";

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub success: bool,
    pub context: String,
}

/// A failure already logged and ready to send. Only `translate` builds one.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Logs `message: error`, the error's source chain and the context, then
/// builds the client payload. The error's own text never reaches the body.
pub fn translate(
    message: &str,
    error: &(dyn Error + 'static),
    status: StatusCode,
    context: &str,
) -> ApiError {
    tracing::error!(status = status.as_u16(), "{}: {}", message, error);
    tracing::error!(error = ?error, chain = %source_chain(error), "Error details");
    if !context.is_empty() {
        tracing::error!("Context: {}", context);
    }

    ApiError {
        status,
        body: ErrorBody {
            message: message.to_string(),
            success: false,
            context: context.to_string(),
        },
    }
}

fn source_chain(error: &(dyn Error + 'static)) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str("\n  caused by: ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryRequestError {
    #[error("malformed request body: {0}")]
    MalformedRequest(#[from] JsonRejection),
    #[error(transparent)]
    InvalidUrl(#[from] InvalidVideoUrl),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl SummaryRequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::InvalidUrl(_) | Self::Fetch(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Summary(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedRequest(_) => InvalidVideoUrl.to_string(),
            Self::InvalidUrl(e) => e.to_string(),
            Self::Fetch(e) => e.user_message(),
            Self::Summary(_) => SUMMARY_FAILED.to_string(),
        }
    }
}

impl IntoResponse for SummaryRequestError {
    fn into_response(self) -> Response {
        translate(&self.user_message(), &self, self.status(), "").into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadRequestError {
    #[error("malformed query: {0}")]
    MalformedQuery(#[from] QueryRejection),
    #[error(transparent)]
    InvalidUrl(#[from] InvalidVideoUrl),
    #[error(transparent)]
    Download(#[from] AudioDownloadError),
    #[error(transparent)]
    Serve(#[from] FileServeError),
    #[error("building response: {0}")]
    Response(#[from] axum::http::Error),
}

impl DownloadRequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedQuery(_) | Self::InvalidUrl(_) | Self::Download(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Serve(FileServeError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Serve(FileServeError::Io { .. }) | Self::Response(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedQuery(_) => InvalidVideoUrl.to_string(),
            Self::InvalidUrl(e) => e.to_string(),
            Self::Download(_) => DOWNLOAD_FAILED.to_string(),
            Self::Serve(FileServeError::NotFound(_)) => FILE_NOT_FOUND.to_string(),
            Self::Serve(FileServeError::Io { .. }) | Self::Response(_) => SERVE_FAILED.to_string(),
        }
    }
}

impl IntoResponse for DownloadRequestError {
    fn into_response(self) -> Response {
        translate(&self.user_message(), &self, self.status(), "").into_response()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("handler panicked: {0}")]
pub struct PanicError(pub String);

/// Response for a handler that panicked; plugged into `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    translate(
        UNEXPECTED,
        &PanicError(detail),
        StatusCode::INTERNAL_SERVER_ERROR,
        "",
    )
    .into_response()
}
