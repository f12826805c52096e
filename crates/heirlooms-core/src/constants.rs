//! Application-wide constants.
//!
//! All of these are compile-time fixed: media classification and derivative
//! generation are deterministic string functions, not environment-driven.

/// Domain marker identifying a hosted-media (Cloudinary) URL.
pub const CLOUDINARY_HOST: &str = "res.cloudinary.com";

/// Path delimiter splitting a hosted-media URL into an account prefix and the
/// asset path. Transformation parameters are inserted immediately after it.
pub const UPLOAD_SEGMENT: &str = "/upload/";

/// Path convention for assets stored via the hosted-video bucket. Voice notes
/// reuse this bucket, so presence of the segment alone does not imply video.
pub const VIDEO_UPLOAD_SEGMENT: &str = "/video/upload/";

/// Extensions recognized as images (lowercase, matched case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".heic", ".heif",
];

/// Extensions recognized as video for display classification.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".mov", ".avi", ".mkv", ".webm", ".m4v", ".flv", ".wmv",
];

/// Extensions recognized as audio. `.webm` appears here and in
/// [`VIDEO_EXTENSIONS`]; see `media::classify` for how the overlap resolves.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    ".mp3", ".wav", ".m4a", ".aac", ".ogg", ".opus", ".webm",
];

/// Video extensions eligible for frame-capture derivatives. Narrower than
/// [`VIDEO_EXTENSIONS`]: the hosting provider only supports frame extraction
/// for these container formats.
pub const DERIVABLE_VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".webm", ".mkv"];
