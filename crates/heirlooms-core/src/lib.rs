//! Heirlooms Core Library
//!
//! Pure domain logic for the Heirlooms media catalogue: classifying stored
//! media URLs, selecting a representative visual, and deriving resized
//! variant URLs from hosted originals. Everything in this crate is a total
//! function over strings; no I/O, no shared state, no panics.

pub mod constants;
pub mod media;

// Re-export commonly used types
pub use media::{
    build_derivative_urls, build_derivatives_map, is_audio_url, is_image_url, is_video_url,
    normalize_media_urls, primary_visual_media_url, rewrite_for_size, DerivativeSet, MediaKind,
    SizeTier,
};
