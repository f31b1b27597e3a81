mod audio_codec;
mod downloaded_file;
mod summary_result;
mod transcript;
mod video_metadata;
mod video_reference;

pub use audio_codec::AudioCodec;
pub use downloaded_file::{DownloadedFile, PRE_TRANSCODE_EXTENSIONS};
pub use summary_result::SummaryResult;
pub use transcript::Transcript;
pub use video_metadata::VideoMetadata;
pub use video_reference::{InvalidVideoUrl, VideoReference};
