mod download;
mod health;
mod summary;

pub use download::{DownloadQuery, content_disposition, download_audio_handler};
pub use health::health_handler;
pub use summary::{SummaryRequest, SummaryResponse, generate_video_summary_handler};
