use youreview::domain::{InvalidVideoUrl, VideoReference};

#[test]
fn given_standard_watch_url_when_parsing_then_accepts() {
    let video = VideoReference::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
    assert_eq!(video.as_str(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
}

#[test]
fn given_accepted_url_forms_when_parsing_then_all_accepted() {
    let urls = [
        "http://youtube.com/watch?v=abc",
        "https://youtu.be/abc",
        "www.youtube.com/watch?v=abc",
        "youtube.com/shorts/abc",
        "youtu.be/abc?t=42",
    ];

    for url in urls {
        assert!(VideoReference::parse(url).is_ok(), "expected {url} to be accepted");
    }
}

#[test]
fn given_empty_string_when_parsing_then_returns_invalid_url() {
    assert_eq!(VideoReference::parse(""), Err(InvalidVideoUrl));
}

#[test]
fn given_rejected_url_forms_when_parsing_then_all_rejected() {
    let urls = [
        "not a url",
        "https://vimeo.com/12345",
        "https://youtube.com/",
        "https://youtube.com",
        "ftp://youtube.com/watch?v=abc",
        "https://m.youtube.com/watch?v=abc",
        "https://notyoutube.com/watch?v=abc",
        " https://youtube.com/watch?v=abc",
    ];

    for url in urls {
        assert!(VideoReference::parse(url).is_err(), "expected {url} to be rejected");
    }
}

#[test]
fn given_invalid_url_error_when_displayed_then_is_client_safe_message() {
    assert_eq!(
        InvalidVideoUrl.to_string(),
        "The provided URL is invalid or empty."
    );
}
