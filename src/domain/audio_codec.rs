use std::fmt;

/// Target codec of the audio transcode, e.g. `mp3` or `opus`.
///
/// Doubles as the file extension of the transcoded output and as the subtype
/// of the `audio/*` content type it is served with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioCodec(String);

impl AudioCodec {
    pub fn new(codec: impl Into<String>) -> Self {
        Self(codec.into().trim_start_matches('.').to_lowercase())
    }

    pub fn extension(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> String {
        format!("audio/{}", self.0)
    }
}

impl Default for AudioCodec {
    fn default() -> Self {
        Self::new("mp3")
    }
}

impl fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
