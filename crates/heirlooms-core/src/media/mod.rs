//! Media URL pipeline: classification, normalization, primary-visual
//! selection, and derivative URL generation.

pub mod classify;
pub mod derivative;

pub use classify::{
    is_audio_url, is_image_url, is_video_url, normalize_media_urls, primary_visual_media_url,
    MediaKind,
};
pub use derivative::{
    build_derivative_urls, build_derivatives_map, rewrite_for_size, DerivativeSet,
    ParseSizeTierError, SizeTier,
};
