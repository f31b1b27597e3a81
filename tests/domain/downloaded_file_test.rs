use std::path::PathBuf;

use youreview::domain::{AudioCodec, DownloadedFile};

#[test]
fn given_webm_path_and_mp3_codec_when_normalizing_then_extension_becomes_mp3() {
    let file = DownloadedFile::new("/tmp/audio/Title.webm", AudioCodec::new("mp3"));
    assert_eq!(file.normalized_path(), PathBuf::from("/tmp/audio/Title.mp3"));
}

#[test]
fn given_m4a_path_and_opus_codec_when_normalizing_then_extension_becomes_opus() {
    let file = DownloadedFile::new("out/Talk.m4a", AudioCodec::new("opus"));
    assert_eq!(file.normalized_path(), PathBuf::from("out/Talk.opus"));
}

#[test]
fn given_path_already_in_codec_extension_when_normalizing_then_unchanged() {
    let file = DownloadedFile::new("out/Song.mp3", AudioCodec::new("mp3"));
    assert_eq!(file.normalized_path(), PathBuf::from("out/Song.mp3"));
}

#[test]
fn given_unknown_extension_when_normalizing_then_unchanged() {
    let file = DownloadedFile::new("out/Notes.txt", AudioCodec::new("mp3"));
    assert_eq!(file.normalized_path(), PathBuf::from("out/Notes.txt"));
}

#[test]
fn given_title_with_dots_when_normalizing_then_only_last_extension_changes() {
    let file = DownloadedFile::new("out/Vol. 2 - Live.webm", AudioCodec::new("mp3"));
    assert_eq!(file.normalized_path(), PathBuf::from("out/Vol. 2 - Live.mp3"));
}

#[test]
fn given_uppercase_container_extension_when_normalizing_then_still_rewritten() {
    let file = DownloadedFile::new("out/Clip.WEBM", AudioCodec::new("mp3"));
    assert_eq!(file.normalized_path(), PathBuf::from("out/Clip.mp3"));
}

#[test]
fn given_codec_when_building_mime_then_uses_audio_prefix() {
    let codec = AudioCodec::new(".MP3");
    assert_eq!(codec.extension(), "mp3");
    assert_eq!(codec.mime_type(), "audio/mp3");
}
