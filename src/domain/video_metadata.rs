#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub title: String,
    pub channel_name: String,
    pub duration_seconds: u64,
    pub thumbnail_url: Option<String>,
}

impl VideoMetadata {
    pub fn exceeds(&self, max_duration_seconds: u64) -> bool {
        self.duration_seconds > max_duration_seconds
    }
}
