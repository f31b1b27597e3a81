use std::sync::Arc;

use crate::application::ports::AudioDownloader;
use crate::application::services::{FileServer, Summarizer, VideoInfoFetcher};

/// Shared, immutable per-process state; nothing here is mutated by requests.
#[derive(Clone)]
pub struct AppState {
    pub video_info_fetcher: Arc<VideoInfoFetcher>,
    pub summarizer: Arc<Summarizer>,
    pub audio_downloader: Arc<dyn AudioDownloader>,
    pub file_server: Arc<FileServer>,
}
