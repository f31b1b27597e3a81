use std::path::PathBuf;

use youreview::application::ports::{
    AudioDownloadError, AudioDownloader, MetadataSourceError, TranscriptSource,
    TranscriptSourceError, VideoMetadataSource,
};
use youreview::domain::{AudioCodec, VideoReference};
use youreview::infrastructure::youtube::{
    YtDlp, YtDlpAudioDownloader, YtDlpMetadataSource, YtDlpTranscriptSource,
    parse_printed_filename, parse_video_info,
};

const MISSING_BINARY: &str = "/nonexistent/bin/yt-dlp-missing";

fn video() -> VideoReference {
    VideoReference::parse("https://www.youtube.com/watch?v=abc123").unwrap()
}

#[test]
fn given_full_info_json_when_parsing_then_maps_all_fields() {
    let json = br#"{
        "id": "abc123",
        "title": "A Talk",
        "uploader": "Some Channel",
        "channel": "Other Name",
        "duration": 754.4,
        "thumbnail": "https://i.ytimg.com/vi/abc123/maxresdefault.jpg"
    }"#;

    let metadata = parse_video_info(json).unwrap();

    assert_eq!(metadata.title, "A Talk");
    assert_eq!(metadata.channel_name, "Some Channel");
    assert_eq!(metadata.duration_seconds, 755);
    assert_eq!(
        metadata.thumbnail_url.as_deref(),
        Some("https://i.ytimg.com/vi/abc123/maxresdefault.jpg")
    );
}

#[test]
fn given_sparse_info_json_when_parsing_then_uses_fallbacks() {
    let metadata = parse_video_info(br#"{"channel": "Fallback Channel"}"#).unwrap();

    assert_eq!(metadata.title, "Unknown");
    assert_eq!(metadata.channel_name, "Fallback Channel");
    assert_eq!(metadata.duration_seconds, 0);
    assert_eq!(metadata.thumbnail_url, None);
}

#[test]
fn given_null_duration_when_parsing_then_duration_is_zero() {
    let metadata = parse_video_info(br#"{"title": "Live", "duration": null}"#).unwrap();

    assert_eq!(metadata.duration_seconds, 0);
    assert_eq!(metadata.channel_name, "Unknown");
}

#[test]
fn given_invalid_json_when_parsing_then_returns_malformed() {
    let result = parse_video_info(b"ERROR: not json");

    assert!(matches!(result, Err(MetadataSourceError::Malformed(_))));
}

#[test]
fn given_printed_filenames_when_parsing_then_last_non_empty_line_wins() {
    let stdout = b"temp_audios/First.webm\ntemp_audios/My Song.webm\n\n";

    assert_eq!(
        parse_printed_filename(stdout),
        Some(PathBuf::from("temp_audios/My Song.webm"))
    );
}

#[test]
fn given_empty_stdout_when_parsing_filename_then_returns_none() {
    assert_eq!(parse_printed_filename(b"\n  \n"), None);
}

#[tokio::test]
async fn given_missing_binary_when_fetching_metadata_then_returns_unavailable() {
    let source = YtDlpMetadataSource::new(YtDlp::new(MISSING_BINARY));

    let result = source.fetch_metadata(&video()).await;

    assert!(matches!(result, Err(MetadataSourceError::Unavailable(_))));
}

#[tokio::test]
async fn given_missing_binary_when_fetching_transcript_then_returns_unavailable() {
    let source = YtDlpTranscriptSource::new(YtDlp::new(MISSING_BINARY));
    let languages = vec!["es".to_string(), "en".to_string()];

    let result = source.fetch_fragments(&video(), &languages).await;

    assert!(matches!(result, Err(TranscriptSourceError::Unavailable(_))));
}

#[tokio::test]
async fn given_missing_binary_when_downloading_audio_then_returns_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let downloader = YtDlpAudioDownloader::new(
        YtDlp::new(MISSING_BINARY),
        dir.path(),
        AudioCodec::new("mp3"),
        "192",
    );

    let result = downloader.download(&video()).await;

    assert!(matches!(result, Err(AudioDownloadError::Unavailable(_))));
}
