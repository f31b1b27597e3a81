use std::path::PathBuf;

use super::AudioCodec;

/// Container extensions the downloader may report before the transcode step
/// has renamed the file.
pub const PRE_TRANSCODE_EXTENSIONS: &[&str] = &["webm", "m4a", "mp4", "opus", "ogg", "mkv"];

/// Audio file produced by the downloader for the current request.
///
/// `path` is what the downloader reported, which names the source container
/// rather than the transcoded file actually left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    path: PathBuf,
    codec: AudioCodec,
}

impl DownloadedFile {
    pub fn new(path: impl Into<PathBuf>, codec: AudioCodec) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    pub fn codec(&self) -> &AudioCodec {
        &self.codec
    }

    /// Path of the transcoded file: a known container extension is swapped
    /// for the codec extension, any other path is returned as is.
    pub fn normalized_path(&self) -> PathBuf {
        let has_container_extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                PRE_TRANSCODE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false);

        if has_container_extension {
            self.path.with_extension(self.codec.extension())
        } else {
            self.path.clone()
        }
    }
}
