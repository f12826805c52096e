//! Media kind classification for URL-like strings.
//!
//! Every function here is a pure, total function of its input: no I/O, no
//! panics, empty input classifies as nothing. Matching is case-insensitive
//! substring containment rather than strict suffix matching, so an extension
//! appearing anywhere in the URL (including inside a query parameter) counts.
//! That permissiveness is intentional: stored asset URLs carry version
//! segments and signed query strings that defeat suffix checks.

use crate::constants::{
    AUDIO_EXTENSIONS, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS, VIDEO_UPLOAD_SEGMENT,
};

fn contains_extension(lower: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| lower.contains(ext))
}

/// Returns true if the URL references an image asset.
pub fn is_image_url(url: &str) -> bool {
    contains_extension(&url.to_lowercase(), IMAGE_EXTENSIONS)
}

/// Returns true if the URL references a video asset.
///
/// A URL matches on a video extension, or on living under the hosted
/// `/video/upload/` bucket. Audio takes precedence for the bucket rule:
/// voice notes are stored via the video bucket, so a bucket URL with an
/// audio extension is not video. A bare `.webm` still matches through the
/// extension rule; see [`MediaKind::of`] for the canonical resolution.
pub fn is_video_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    if contains_extension(&lower, VIDEO_EXTENSIONS) {
        return true;
    }
    lower.contains(VIDEO_UPLOAD_SEGMENT) && !contains_extension(&lower, AUDIO_EXTENSIONS)
}

/// Returns true if the URL references an audio asset.
///
/// Purely extension-based. This covers audio stored via the hosted video
/// bucket as well, since those URLs keep their audio extension.
pub fn is_audio_url(url: &str) -> bool {
    contains_extension(&url.to_lowercase(), AUDIO_EXTENSIONS)
}

/// Canonical media kind of a URL.
///
/// [`is_video_url`] and [`is_audio_url`] can both be true for a bare `.webm`.
/// This resolver picks one answer: image, then video, then audio. A `.webm`
/// outside the video bucket resolves to [`MediaKind::Video`]; an `.mp3`
/// inside it resolves to [`MediaKind::Audio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Other,
}

impl MediaKind {
    pub fn of(url: &str) -> Self {
        if is_image_url(url) {
            MediaKind::Image
        } else if is_video_url(url) {
            MediaKind::Video
        } else if is_audio_url(url) {
            MediaKind::Audio
        } else {
            MediaKind::Other
        }
    }
}

/// Picks the representative visual asset from an ordered media list: the
/// first image, failing that the first video. Audio-only lists have no
/// visual representation and yield None.
pub fn primary_visual_media_url(urls: &[String]) -> Option<&str> {
    if let Some(image) = urls.iter().find(|url| is_image_url(url)) {
        return Some(image.as_str());
    }
    urls.iter().find(|url| is_video_url(url)).map(String::as_str)
}

/// Stable de-duplicating filter over a media URL list.
///
/// Drops empty and whitespace-only entries and duplicate entries (first
/// occurrence wins), preserving the relative order of what remains.
pub fn normalize_media_urls(urls: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    urls.iter()
        .filter(|url| !url.trim().is_empty())
        .filter(|url| seen.insert(url.as_str()))
        .cloned()
        .collect()
}
