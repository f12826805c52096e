//! Derivative URL generation for hosted media assets.
//!
//! The hosting provider materializes resized/transcoded variants lazily on
//! first fetch of a transformation URL, so "generating a derivative" is pure
//! string rewriting: insert a fixed transformation-parameter literal between
//! the account prefix and the asset path. Nothing here issues a request or
//! verifies that a derived URL is retrievable.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    CLOUDINARY_HOST, DERIVABLE_VIDEO_EXTENSIONS, UPLOAD_SEGMENT, VIDEO_UPLOAD_SEGMENT,
};
use crate::media::classify::MediaKind;

// Image tiers: native transforms with automatic quality/format negotiation.
const IMAGE_SMALL_THUMB: &str = "w_120,h_120,c_fill,g_auto,q_auto,f_auto";
const IMAGE_THUMB: &str = "w_400,h_400,c_fill,g_auto,q_auto,f_auto";
const IMAGE_MEDIUM: &str = "w_1024,c_limit,q_auto,f_auto";
const IMAGE_LARGE: &str = "w_1600,c_limit,q_auto,f_auto";

// Video tiers: frame captures at the 1-second mark, encoded as jpeg.
const VIDEO_SMALL_THUMB: &str = "so_1,w_120,h_120,c_fill,f_jpg,q_auto";
const VIDEO_THUMB: &str = "so_1,w_400,h_400,c_fill,f_jpg,q_auto";
const VIDEO_MEDIUM: &str = "so_1,w_1024,c_limit,f_jpg,q_auto";
const VIDEO_LARGE: &str = "so_1,w_1600,c_limit,f_jpg,q_auto";

/// The derivative family generated for one original media URL.
///
/// Persisted as a JSON field on the owning artifact record, hence the
/// camelCase key names. The builder always populates all four tiers;
/// `large` stays optional in the type because older persisted records
/// predate that tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivativeSet {
    pub small_thumb: String,
    pub thumb: String,
    pub medium: String,
    #[serde(default)]
    pub large: Option<String>,
}

/// Ad hoc single-size rewrite targets used by rendering code outside the
/// derivatives map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Thumb,
    Card,
    Detail,
    FullRes,
}

impl SizeTier {
    fn transform(self) -> &'static str {
        match self {
            SizeTier::Thumb => "w_400,h_400,c_fill,g_auto,q_auto,f_auto",
            SizeTier::Card => "w_800,h_600,c_fit,q_auto,f_auto",
            SizeTier::Detail => "w_1200,h_1200,c_limit,q_auto,f_auto",
            SizeTier::FullRes => "q_auto,f_auto",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SizeTier::Thumb => "thumb",
            SizeTier::Card => "card",
            SizeTier::Detail => "detail",
            SizeTier::FullRes => "fullres",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size tier: {0}")]
pub struct ParseSizeTierError(String);

impl FromStr for SizeTier {
    type Err = ParseSizeTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumb" => Ok(SizeTier::Thumb),
            "card" => Ok(SizeTier::Card),
            "detail" => Ok(SizeTier::Detail),
            "fullres" => Ok(SizeTier::FullRes),
            other => Err(ParseSizeTierError(other.to_string())),
        }
    }
}

/// Splits a hosted-media URL at its `/upload/` delimiter.
///
/// Returns None unless the URL references the hosting domain and contains
/// exactly one delimiter, i.e. splits into exactly two parts.
fn split_hosted_url(url: &str) -> Option<(&str, &str)> {
    if !url.contains(CLOUDINARY_HOST) {
        return None;
    }
    let (prefix, asset_path) = url.split_once(UPLOAD_SEGMENT)?;
    if asset_path.contains(UPLOAD_SEGMENT) {
        return None;
    }
    Some((prefix, asset_path))
}

fn insert_transform(prefix: &str, transform: &str, asset_path: &str) -> String {
    format!("{prefix}{UPLOAD_SEGMENT}{transform}/{asset_path}")
}

/// True when the URL points at a hosted video asset that supports
/// frame-capture transformations: it must live under the video bucket and
/// use one of the derivable container formats.
///
/// Deliberately narrower than [`crate::media::classify::is_video_url`]:
/// display classification accepts `.m4v`/`.flv`/`.wmv` and bare bucket
/// paths, but the provider cannot extract frames from those.
fn is_derivable_video(lower: &str) -> bool {
    lower.contains(VIDEO_UPLOAD_SEGMENT)
        && DERIVABLE_VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

/// Builds the four-tier derivative family for one hosted media URL.
///
/// Returns None for URLs that are not hosted-media URLs, and for video or
/// audio assets that are not frame-capture eligible. Rejecting those
/// explicitly beats routing an A/V binary through the image-transform
/// branch, which would produce a URL the provider cannot materialize.
///
/// Deterministic and idempotent: the same input always yields the same
/// output, byte for byte.
pub fn build_derivative_urls(url: &str) -> Option<DerivativeSet> {
    let (prefix, asset_path) = split_hosted_url(url)?;
    let lower = url.to_lowercase();

    let tiers = if is_derivable_video(&lower) {
        [VIDEO_SMALL_THUMB, VIDEO_THUMB, VIDEO_MEDIUM, VIDEO_LARGE]
    } else {
        match MediaKind::of(url) {
            MediaKind::Video | MediaKind::Audio => return None,
            MediaKind::Image | MediaKind::Other => {
                [IMAGE_SMALL_THUMB, IMAGE_THUMB, IMAGE_MEDIUM, IMAGE_LARGE]
            }
        }
    };

    let [small_thumb, thumb, medium, large] =
        tiers.map(|transform| insert_transform(prefix, transform, asset_path));

    Some(DerivativeSet {
        small_thumb,
        thumb,
        medium,
        large: Some(large),
    })
}

/// Builds the original-URL-to-derivatives mapping for a media list.
///
/// URLs for which generation is not possible are silently absent from the
/// output; a mixed list is not an error. Ordered map so the persisted JSON
/// field is stable across rebuilds.
pub fn build_derivatives_map(urls: &[String]) -> BTreeMap<String, DerivativeSet> {
    urls.iter()
        .filter_map(|url| build_derivative_urls(url).map(|set| (url.clone(), set)))
        .collect()
}

/// Rewrites a hosted-media URL to a single size tier.
///
/// Non-hosted URLs pass through unchanged; callers render whatever they
/// were given.
pub fn rewrite_for_size(url: &str, tier: SizeTier) -> String {
    match split_hosted_url(url) {
        Some((prefix, asset_path)) => insert_transform(prefix, tier.transform(), asset_path),
        None => url.to_string(),
    }
}
