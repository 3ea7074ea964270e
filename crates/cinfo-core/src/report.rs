//! One-shot summary of everything a probe can tell about its target.
//!
//! Runs the individual accessors in turn, so it costs one connection per
//! field, exactly as calling them by hand would.

use crate::decode::{ContentKind, ImageSize};
use crate::error::{ProbeError, ProbeResult, UnavailableCause};
use crate::probe::{ContentLength, ContentProbe};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub location: String,
    pub available: bool,
    pub content_length: Option<ContentLength>,
    pub content_type: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub kind: Option<ContentKind>,
    pub image_size: Option<ImageSize>,
    pub line_count: Option<u64>,
    pub audio_duration_secs: Option<f64>,
    /// Why the type-specific attribute is missing, if its decoder failed.
    pub decode_error: Option<String>,
}

impl ProbeReport {
    /// Collects the report. A body the decoder rejects lands in
    /// `decode_error`; any other failure after a successful availability
    /// check is returned as an error.
    pub fn collect(probe: &ContentProbe) -> ProbeResult<Self> {
        let mut report = ProbeReport {
            location: probe.location(),
            available: probe.is_available(),
            content_length: None,
            content_type: None,
            last_modified: None,
            kind: None,
            image_size: None,
            line_count: None,
            audio_duration_secs: None,
            decode_error: None,
        };
        if !report.available {
            return Ok(report);
        }

        report.content_length = Some(probe.content_length()?);
        report.content_type = probe.content_type()?;
        report.last_modified = Some(probe.last_modified()?);
        let kind = ContentKind::classify(report.content_type.as_deref());
        report.kind = kind;

        let decoded = match kind {
            Some(ContentKind::Image) => probe.image_size().map(|s| report.image_size = Some(s)),
            Some(ContentKind::Text) => probe.line_count().map(|n| report.line_count = Some(n)),
            Some(ContentKind::Audio) => probe
                .audio_duration()
                .map(|d| report.audio_duration_secs = Some(d)),
            None => Ok(()),
        };
        match decoded {
            Ok(()) => {}
            Err(ProbeError::ContentUnavailable {
                cause: UnavailableCause::Decode(msg),
                ..
            }) => {
                tracing::debug!(location = %report.location, error = %msg, "report: decoder failed");
                report.decode_error = Some(msg);
            }
            Err(e) => return Err(e),
        }

        Ok(report)
    }
}
