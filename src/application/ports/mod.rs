mod audio_downloader;
mod llm_client;
mod transcript_source;
mod video_metadata_source;

pub use audio_downloader::{AudioDownloadError, AudioDownloader};
pub use llm_client::{LlmClient, LlmClientError};
pub use transcript_source::{TranscriptSource, TranscriptSourceError};
pub use video_metadata_source::{MetadataSourceError, VideoMetadataSource};
