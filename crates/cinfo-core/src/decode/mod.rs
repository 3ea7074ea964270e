//! Type classification and the per-type body decoders.
//!
//! Classification looks only at the declared MIME type. Decoders take a fully
//! buffered body and extract one attribute; codec failures come back as
//! [`DecodeError`] and are surfaced by the probe as `ContentUnavailable`.

mod audio;
mod image;
mod text;

pub use self::audio::audio_duration_secs;
pub use self::image::{image_dimensions, ImageSize};
pub use self::text::count_lines;

use serde::Serialize;

/// A codec could not make sense of a body.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct DecodeError(pub(crate) String);

/// Content families a probe can decode, keyed by MIME-type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    Text,
    Audio,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Image, ContentKind::Text, ContentKind::Audio];

    pub fn prefix(self) -> &'static str {
        match self {
            ContentKind::Image => "image/",
            ContentKind::Text => "text/",
            ContentKind::Audio => "audio/",
        }
    }

    /// Exact, case-sensitive prefix match; no normalization.
    pub fn matches(self, content_type: Option<&str>) -> bool {
        content_type.is_some_and(|ct| ct.starts_with(self.prefix()))
    }

    pub fn classify(content_type: Option<&str>) -> Option<ContentKind> {
        Self::ALL.into_iter().find(|k| k.matches(content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_only_image() {
        let ct = Some("image/png");
        assert!(ContentKind::Image.matches(ct));
        assert!(!ContentKind::Text.matches(ct));
        assert!(!ContentKind::Audio.matches(ct));
        assert_eq!(ContentKind::classify(ct), Some(ContentKind::Image));
    }

    #[test]
    fn parameters_do_not_affect_prefix() {
        assert!(ContentKind::Text.matches(Some("text/plain; charset=UTF-8")));
        assert_eq!(
            ContentKind::classify(Some("audio/x-wav")),
            Some(ContentKind::Audio)
        );
    }

    #[test]
    fn case_sensitive_and_missing() {
        assert!(!ContentKind::Image.matches(Some("IMAGE/PNG")));
        assert!(!ContentKind::Text.matches(Some(" text/plain")));
        assert!(!ContentKind::Text.matches(None));
        assert_eq!(ContentKind::classify(Some("application/pdf")), None);
        assert_eq!(ContentKind::classify(None), None);
    }
}
