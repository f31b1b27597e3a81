use async_trait::async_trait;

use crate::domain::{DownloadedFile, VideoReference};

#[async_trait]
pub trait AudioDownloader: Send + Sync {
    /// Downloads the best available audio stream and transcodes it to the
    /// configured codec. The returned path is the one the downloader reports,
    /// which may still carry the source container extension.
    async fn download(
        &self,
        video: &VideoReference,
    ) -> Result<DownloadedFile, AudioDownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDownloadError {
    #[error("downloader unavailable: {0}")]
    Unavailable(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("downloader reported no output file")]
    NoOutput,
}
