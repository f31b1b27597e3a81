use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::fs::File;
use tokio::task::JoinHandle;

use crate::domain::DownloadedFile;

pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Hands downloaded audio to the response and removes it afterwards.
///
/// Deletion runs on its own task after a fixed grace period. Nothing ties it
/// to the response body, so a client still reading after the grace period
/// races the delete. On Unix the already-open handle keeps the data readable.
#[derive(Debug, Clone)]
pub struct FileServer {
    grace_period: Duration,
}

#[derive(Debug)]
pub struct ServedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub file: File,
}

impl FileServer {
    pub fn new(grace_period: Duration) -> Self {
        Self { grace_period }
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// Absolute path of the transcoded file, or `NotFound` if it is not on disk.
    pub async fn resolve(&self, downloaded: &DownloadedFile) -> Result<PathBuf, FileServeError> {
        let normalized = downloaded.normalized_path();
        let path = std::path::absolute(&normalized).unwrap_or(normalized);

        match tokio::fs::try_exists(&path).await {
            Ok(true) => Ok(path),
            Ok(false) => Err(FileServeError::NotFound(path)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Existence check failed");
                Err(FileServeError::NotFound(path))
            }
        }
    }

    /// Resolves the file, schedules its deletion and opens it for streaming.
    /// The deletion is scheduled before opening, so it still runs when the
    /// open fails.
    pub async fn serve(&self, downloaded: &DownloadedFile) -> Result<ServedFile, FileServeError> {
        let path = self.resolve(downloaded).await?;

        self.schedule_deletion(path.clone());

        let file = File::open(&path).await.map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "Failed to open file for serving");
            FileServeError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let size_bytes = file
            .metadata()
            .await
            .map_err(|source| FileServeError::Io {
                path: path.clone(),
                source,
            })?
            .len();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::info!(
            path = %path.display(),
            size_bytes,
            "Serving audio file"
        );

        Ok(ServedFile {
            content_type: downloaded.codec().mime_type(),
            file_name,
            size_bytes,
            path,
            file,
        })
    }

    /// Fire-and-forget: the caller may drop the handle. Failures are logged,
    /// never returned.
    pub fn schedule_deletion(&self, path: PathBuf) -> JoinHandle<()> {
        let grace_period = self.grace_period;
        tokio::spawn(async move {
            tokio::time::sleep(grace_period).await;
            delete_served_file(&path).await;
        })
    }
}

impl Default for FileServer {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_PERIOD)
    }
}

async fn delete_served_file(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::info!(path = %path.display(), "File deleted after serving"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "File not found during cleanup")
        }
        Err(e) => tracing::error!(path = %path.display(), error = %e, "Failed to delete file"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileServeError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to serve {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
