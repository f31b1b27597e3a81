use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$")
        .expect("youtube url pattern is valid")
});

/// A URL that has passed host validation and identifies a single video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference(String);

impl VideoReference {
    /// Accepts `youtube.com/...` or `youtu.be/...`, with optional `http(s)://`
    /// scheme and `www.` prefix. Anything else, including the empty string, is
    /// rejected before any external call is made.
    pub fn parse(url: &str) -> Result<Self, InvalidVideoUrl> {
        if url.is_empty() || !YOUTUBE_URL_PATTERN.is_match(url) {
            return Err(InvalidVideoUrl);
        }
        Ok(Self(url.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("The provided URL is invalid or empty.")]
pub struct InvalidVideoUrl;
