//! Caption track listing from yt-dlp's info JSON.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Whether a track was uploaded by the channel or generated by YouTube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionKind {
    Manual,
    Automatic,
}

/// One caption track, named by the language key yt-dlp lists it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub language: String,
    pub kind: CaptionKind,
}

#[derive(Debug, Deserialize)]
struct CaptionFormat {
    #[serde(default)]
    url: Option<String>,
}

/// The `subtitles` and `automatic_captions` maps of a video.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionListing {
    #[serde(default)]
    subtitles: Option<BTreeMap<String, Vec<CaptionFormat>>>,
    #[serde(default)]
    automatic_captions: Option<BTreeMap<String, Vec<CaptionFormat>>>,
}

impl CaptionListing {
    pub fn from_info_json(json: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(json)
    }

    /// Picks the track for the most preferred language that the video really
    /// has. Uploaded tracks beat generated ones for the same language.
    ///
    /// YouTube lists every language it can machine-translate into under
    /// `automatic_captions`; those entries carry `tlang=` in their URLs and
    /// are never chosen. The untranslated generated track shows up either
    /// under the plain language key or as `<lang>-orig`.
    pub fn select(&self, languages: &[String]) -> Option<CaptionTrack> {
        languages.iter().find_map(|language| {
            self.manual_track(language)
                .map(|key| CaptionTrack {
                    language: key.to_string(),
                    kind: CaptionKind::Manual,
                })
                .or_else(|| {
                    self.automatic_track(language).map(|key| CaptionTrack {
                        language: key.to_string(),
                        kind: CaptionKind::Automatic,
                    })
                })
        })
    }

    fn manual_track(&self, language: &str) -> Option<&str> {
        let tracks = self.subtitles.as_ref()?;
        let variant = format!("{language}-");
        tracks
            .get_key_value(language)
            .or_else(|| tracks.iter().find(|(key, _)| key.starts_with(&variant)))
            .filter(|(_, formats)| !formats.is_empty())
            .map(|(key, _)| key.as_str())
    }

    fn automatic_track(&self, language: &str) -> Option<&str> {
        let tracks = self.automatic_captions.as_ref()?;
        let original = format!("{language}-orig");

        let untranslated = tracks
            .get_key_value(language)
            .filter(|(_, formats)| !formats.is_empty() && !formats.iter().any(is_translation));

        untranslated
            .or_else(|| {
                tracks
                    .get_key_value(original.as_str())
                    .filter(|(_, formats)| !formats.is_empty())
            })
            .map(|(key, _)| key.as_str())
    }
}

fn is_translation(format: &CaptionFormat) -> bool {
    format
        .url
        .as_deref()
        .is_some_and(|url| url.contains("tlang="))
}
