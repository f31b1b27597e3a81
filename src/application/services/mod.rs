mod file_server;
mod summarizer;
mod summary_prompt;
mod video_info_fetcher;

pub use file_server::{DEFAULT_GRACE_PERIOD, FileServeError, FileServer, ServedFile};
pub use summarizer::{SummaryError, Summarizer};
pub use summary_prompt::summary_system_prompt;
pub use video_info_fetcher::{FetchError, VideoInfo, VideoInfoFetcher};
