mod audio_downloader;
mod caption_tracks;
mod metadata_source;
mod transcript_source;
pub mod webvtt;
mod yt_dlp;

pub use audio_downloader::{YtDlpAudioDownloader, parse_printed_filename};
pub use caption_tracks::{CaptionKind, CaptionListing, CaptionTrack};
pub use metadata_source::{YtDlpMetadataSource, parse_video_info};
pub use transcript_source::YtDlpTranscriptSource;
pub use yt_dlp::{YtDlp, YtDlpError};
