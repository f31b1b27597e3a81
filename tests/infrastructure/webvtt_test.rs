use std::path::PathBuf;

use youreview::domain::Transcript;
use youreview::infrastructure::youtube::webvtt::{parse_cues, select_subtitle};

fn langs(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn given_simple_vtt_when_parsing_then_returns_cue_text_without_timings() {
    let vtt = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nHello   world\n\n00:00:01.000 --> 00:00:02.000\nSecond line\n";

    let cues = parse_cues(vtt);

    assert_eq!(cues, vec!["Hello world ".to_string(), "Second line".to_string()]);
    assert_eq!(cues.concat(), "Hello world Second line");
}

#[test]
fn given_header_metadata_and_cue_ids_when_parsing_then_they_are_dropped() {
    let vtt = "WEBVTT\nKind: captions\nLanguage: en\n\nNOTE generated\n\n1\n00:00:00.000 --> 00:00:01.000 align:start position:0%\nFirst\n\nintro\n00:00:01.000 --> 00:00:02.000\nSecond\n";

    let cues = parse_cues(vtt);

    assert_eq!(cues.concat(), "First Second");
}

#[test]
fn given_inline_timestamps_and_tags_when_parsing_then_tags_are_stripped() {
    let vtt = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\nwe<00:00:00.500><c> are</c><00:00:01.000><c> live</c>\n";

    assert_eq!(parse_cues(vtt), vec!["we are live".to_string()]);
}

const ROLLING_AUTO_CAPTIONS: &str = "WEBVTT
Kind: captions
Language: en

00:00:00.000 --> 00:00:02.000 align:start position:0%
 
hello<00:00:00.480><c> world</c>

00:00:02.000 --> 00:00:02.010 align:start position:0%
hello world
 

00:00:02.010 --> 00:00:04.000 align:start position:0%
hello world
this<00:00:02.400><c> is</c><00:00:02.800><c> a</c><00:00:03.200><c> test</c>

00:00:04.000 --> 00:00:04.010 align:start position:0%
this is a test
 

00:00:04.010 --> 00:00:06.000 align:start position:0%
this is a test
goodbye<00:00:04.500><c> now</c>
";

#[test]
fn given_rolling_auto_captions_when_parsing_then_each_line_appears_once() {
    let cues = parse_cues(ROLLING_AUTO_CAPTIONS);

    assert_eq!(
        cues,
        vec![
            "hello world ".to_string(),
            "this is a test ".to_string(),
            "goodbye now".to_string(),
        ]
    );
}

#[test]
fn given_rolling_auto_captions_when_building_transcript_then_text_is_not_repeated() {
    let transcript = Transcript::from_fragments(&parse_cues(ROLLING_AUTO_CAPTIONS)).unwrap();

    assert_eq!(transcript.as_str(), "hello world this is a test goodbye now");
}

#[test]
fn given_identical_back_to_back_cues_when_parsing_then_they_collapse() {
    let vtt = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nsame line\n\n00:00:01.000 --> 00:00:02.000\nsame line\n\n00:00:02.000 --> 00:00:03.000\nnext line\n";

    assert_eq!(parse_cues(vtt).concat(), "same line next line");
}

#[test]
fn given_two_line_manual_cue_when_parsing_then_both_lines_are_kept() {
    let vtt = "WEBVTT\n\n00:00:00.000 --> 00:00:02.000\n- Where are you?\n- Right here.\n";

    assert_eq!(parse_cues(vtt).concat(), "- Where are you? - Right here.");
}

#[test]
fn given_crlf_line_endings_when_parsing_then_cues_are_found() {
    let vtt = "WEBVTT\r\n\r\n00:00:00.000 --> 00:00:01.000\r\nwindows text\r\n";

    assert_eq!(parse_cues(vtt), vec!["windows text".to_string()]);
}

#[test]
fn given_html_entities_when_parsing_then_they_are_decoded() {
    let vtt = "WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nrock &amp; roll\n";

    assert_eq!(parse_cues(vtt), vec!["rock & roll".to_string()]);
}

#[test]
fn given_header_only_when_parsing_then_returns_no_fragments() {
    assert!(parse_cues("WEBVTT\n\n").is_empty());
}

#[test]
fn given_several_tracks_when_selecting_then_preference_order_wins() {
    let files = vec![
        PathBuf::from("/tmp/abc.en.vtt"),
        PathBuf::from("/tmp/abc.pt.vtt"),
    ];

    let selected = select_subtitle(&files, &langs(&["es", "pt", "en"]));

    assert_eq!(selected, Some(PathBuf::from("/tmp/abc.pt.vtt")));
}

#[test]
fn given_only_regional_variant_when_selecting_then_base_language_matches() {
    let files = vec![PathBuf::from("/tmp/abc.en-US.vtt")];

    let selected = select_subtitle(&files, &langs(&["es", "en"]));

    assert_eq!(selected, Some(PathBuf::from("/tmp/abc.en-US.vtt")));
}

#[test]
fn given_exact_and_variant_tracks_when_selecting_then_exact_match_preferred() {
    let files = vec![
        PathBuf::from("/tmp/abc.en-orig.vtt"),
        PathBuf::from("/tmp/abc.en.vtt"),
    ];

    let selected = select_subtitle(&files, &langs(&["en"]));

    assert_eq!(selected, Some(PathBuf::from("/tmp/abc.en.vtt")));
}

#[test]
fn given_no_matching_language_when_selecting_then_returns_none() {
    let files = vec![
        PathBuf::from("/tmp/abc.fr.vtt"),
        PathBuf::from("/tmp/abc.info.json"),
    ];

    assert_eq!(select_subtitle(&files, &langs(&["es", "pt", "en"])), None);
}
