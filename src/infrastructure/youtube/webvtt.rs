//! WebVTT caption parsing and subtitle file selection.

use std::path::{Path, PathBuf};

/// Extracts caption text from a WebVTT document, one fragment per line.
///
/// Headers, NOTE/STYLE/REGION blocks, cue identifiers, timing lines and
/// inline tags (`<c>`, `<00:00:01.000>`, ...) are dropped. YouTube's
/// auto-generated tracks roll: every cue repeats the line shown before it
/// and adds a new one, with a short cue holding only the repeated line in
/// between. A line equal to the last kept line is therefore skipped. Every
/// fragment but the last ends with a space so the fragments concatenate into
/// readable text.
pub fn parse_cues(vtt: &str) -> Vec<String> {
    let mut lines_kept: Vec<String> = Vec::new();

    for block in vtt.replace("\r\n", "\n").split("\n\n") {
        let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
        let Some(first) = lines.next() else {
            continue;
        };

        if first.starts_with("WEBVTT")
            || first.starts_with("NOTE")
            || first.starts_with("STYLE")
            || first.starts_with("REGION")
        {
            continue;
        }

        // The timing line is either first or follows a cue identifier.
        let text_lines: Vec<&str> = if first.contains("-->") {
            lines.collect()
        } else {
            match lines.next() {
                Some(timing) if timing.contains("-->") => lines.collect(),
                _ => continue,
            }
        };

        for line in text_lines {
            let text = strip_tags(line);
            if text.is_empty() || lines_kept.last().is_some_and(|prev| prev == &text) {
                continue;
            }
            lines_kept.push(text);
        }
    }

    let count = lines_kept.len();
    lines_kept
        .into_iter()
        .enumerate()
        .map(|(i, line)| if i + 1 < count { line + " " } else { line })
        .collect()
}

fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;
    for c in line.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    let out = out
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ");
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Picks the subtitle file for the most preferred language.
///
/// yt-dlp names subtitle files `<name>.<lang>.vtt`. A file matches a
/// preference when its language tag equals it or is a regional/variant form of
/// it (`en` matches `en-US` and `en-orig`).
pub fn select_subtitle(files: &[PathBuf], languages: &[String]) -> Option<PathBuf> {
    languages.iter().find_map(|language| {
        files
            .iter()
            .find(|file| subtitle_language(file).is_some_and(|tag| tag == language.as_str()))
            .or_else(|| {
                files.iter().find(|file| {
                    subtitle_language(file)
                        .is_some_and(|tag| tag.starts_with(&format!("{language}-")))
                })
            })
            .cloned()
    })
}

fn subtitle_language(file: &Path) -> Option<&str> {
    if !file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vtt"))
    {
        return None;
    }
    file.file_stem()?.to_str()?.rsplit_once('.').map(|(_, tag)| tag)
}
