//! `ContentProbe`: inspect the content behind a URL.
//!
//! A probe holds nothing but its target and transport settings. Each accessor
//! opens its own connection with the cheapest transfer mode that answers the
//! question, reads what it needs, and drops the connection before returning.
//! Decoders check the declared type first (metadata-only round trip) so a
//! type mismatch is reported before any body is transferred.

use crate::decode::{self, ContentKind, ImageSize};
use crate::error::{ProbeError, ProbeResult, UnavailableCause};
use crate::transport::{self, BodySink, Connection, TransferMode, TransportOptions};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Byte length as reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "bytes")]
pub enum ContentLength {
    Known(u64),
    /// The connection succeeded but the transport could not tell the length.
    Unknown,
}

impl ContentLength {
    pub fn known(self) -> Option<u64> {
        match self {
            ContentLength::Known(n) => Some(n),
            ContentLength::Unknown => None,
        }
    }

    /// Length with `-1` standing in for unknown.
    pub fn as_i64(self) -> i64 {
        match self {
            ContentLength::Known(n) => i64::try_from(n).unwrap_or(i64::MAX),
            ContentLength::Unknown => -1,
        }
    }
}

impl fmt::Display for ContentLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLength::Known(n) => write!(f, "{}", n),
            ContentLength::Unknown => write!(f, "unknown"),
        }
    }
}

/// Probe for the content at one target URL.
#[derive(Debug, Clone)]
pub struct ContentProbe {
    target: Url,
    options: TransportOptions,
}

impl ContentProbe {
    /// Creates a probe for an already-parsed URL.
    ///
    /// Fails with `InvalidUrl` if the scheme is not one the transport handles.
    pub fn new(target: Url) -> ProbeResult<Self> {
        check_scheme(&target, target.as_str())?;
        Ok(Self {
            target,
            options: TransportOptions::default(),
        })
    }

    /// Like [`ContentProbe::new`], with a missing target reported as `NullTarget`.
    pub fn from_target(target: Option<Url>) -> ProbeResult<Self> {
        Self::new(target.ok_or(ProbeError::NullTarget)?)
    }

    /// Parses `input` as a URL and creates a probe for it.
    ///
    /// An empty or blank string is `NullTarget`; anything that does not parse
    /// as an absolute URL with a supported scheme is `InvalidUrl`.
    pub fn parse(input: &str) -> ProbeResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ProbeError::NullTarget);
        }
        let target = Url::parse(trimmed).map_err(|e| ProbeError::InvalidUrl {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        check_scheme(&target, input)?;
        Ok(Self {
            target,
            options: TransportOptions::default(),
        })
    }

    pub fn with_options(mut self, options: TransportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Replaces the target. The previous target is kept if the new one is rejected.
    pub fn set_target(&mut self, target: Url) -> ProbeResult<()> {
        check_scheme(&target, target.as_str())?;
        self.target = target;
        Ok(())
    }

    pub fn options(&self) -> &TransportOptions {
        &self.options
    }

    fn connect(&self, mode: TransferMode, sink: BodySink) -> ProbeResult<Connection> {
        transport::acquire(&self.target, mode, sink, &self.options)
    }

    fn head(&self) -> ProbeResult<Connection> {
        self.connect(TransferMode::MetadataOnly, BodySink::Discard)
    }

    fn fetch_body(&self) -> ProbeResult<Connection> {
        self.connect(TransferMode::FullBody, BodySink::Buffer)
    }

    /// Length of the content in bytes (full-body connection, body not kept).
    pub fn content_length(&self) -> ProbeResult<ContentLength> {
        let conn = self.connect(TransferMode::FullBody, BodySink::Discard)?;
        Ok(match conn.metadata().content_length {
            Some(n) => ContentLength::Known(n),
            None => ContentLength::Unknown,
        })
    }

    /// MIME type exactly as the transport reports it, parameters included.
    pub fn content_type(&self) -> ProbeResult<Option<String>> {
        let conn = self.head()?;
        Ok(conn.metadata().content_type.clone())
    }

    /// Last modification time; the Unix epoch when the transport doesn't say.
    pub fn last_modified(&self) -> ProbeResult<DateTime<Utc>> {
        let conn = self.head()?;
        Ok(conn.metadata().last_modified.unwrap_or_default())
    }

    /// The target as a string. No I/O.
    pub fn location(&self) -> String {
        self.target.to_string()
    }

    /// True iff a full-body connection can be established.
    pub fn is_available(&self) -> bool {
        match self.connect(TransferMode::FullBody, BodySink::Discard) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(target_url = %self.target, error = %e, "not available");
                false
            }
        }
    }

    pub fn is_image(&self) -> ProbeResult<bool> {
        self.is_kind(ContentKind::Image)
    }

    pub fn is_text(&self) -> ProbeResult<bool> {
        self.is_kind(ContentKind::Text)
    }

    pub fn is_audio(&self) -> ProbeResult<bool> {
        self.is_kind(ContentKind::Audio)
    }

    /// The decodable family of the content, if its declared type has one.
    pub fn kind(&self) -> ProbeResult<Option<ContentKind>> {
        let content_type = self.content_type()?;
        Ok(ContentKind::classify(content_type.as_deref()))
    }

    fn is_kind(&self, kind: ContentKind) -> ProbeResult<bool> {
        let content_type = self.content_type()?;
        Ok(kind.matches(content_type.as_deref()))
    }

    /// Pixel dimensions of image content.
    pub fn image_size(&self) -> ProbeResult<ImageSize> {
        if !self.is_image()? {
            return Err(ProbeError::NotAnImage);
        }
        let conn = self.fetch_body()?;
        decode::image_dimensions(conn.body()).map_err(|e| self.decode_failed(e))
    }

    /// Number of logical lines in text content.
    pub fn line_count(&self) -> ProbeResult<u64> {
        if !self.is_text()? {
            return Err(ProbeError::NotText);
        }
        let conn = self.fetch_body()?;
        Ok(decode::count_lines(conn.body()))
    }

    /// Duration in seconds of audio content.
    ///
    /// A body the container codec can't read is `ContentUnavailable`, never
    /// `NotAudio`: the declared type already said audio.
    pub fn audio_duration(&self) -> ProbeResult<f64> {
        if !self.is_audio()? {
            return Err(ProbeError::NotAudio);
        }
        let conn = self.fetch_body()?;
        let mime = conn.metadata().content_type.clone();
        let extension = extension_hint(&self.target);
        decode::audio_duration_secs(conn.into_body(), mime.as_deref(), extension.as_deref())
            .map_err(|e| self.decode_failed(e))
    }

    fn decode_failed(&self, e: decode::DecodeError) -> ProbeError {
        tracing::debug!(target_url = %self.target, error = %e, "decode failed");
        ProbeError::unavailable(&self.target, UnavailableCause::Decode(e.to_string()))
    }
}

impl FromStr for ContentProbe {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Url> for ContentProbe {
    type Error = ProbeError;

    fn try_from(target: Url) -> Result<Self, Self::Error> {
        Self::new(target)
    }
}

impl fmt::Display for ContentProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}

fn check_scheme(target: &Url, input: &str) -> ProbeResult<()> {
    if transport::is_supported(target) {
        Ok(())
    } else {
        Err(ProbeError::InvalidUrl {
            input: input.to_string(),
            reason: format!("unsupported scheme {:?}", target.scheme()),
        })
    }
}

/// Lowercased extension of the last path segment, used as a codec hint.
fn extension_hint(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
