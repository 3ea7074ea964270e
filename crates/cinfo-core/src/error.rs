//! Error taxonomy for probe operations.
//!
//! Construction errors (`NullTarget`, `InvalidUrl`) are fatal; `ContentUnavailable`
//! covers anything that went wrong fetching or decoding; the `Not*` variants mean
//! the declared MIME type does not match the requested decoder.

use std::fmt;

/// Why a target's content could not be obtained or decoded.
#[derive(Debug)]
pub enum UnavailableCause {
    /// Curl reported an error (resolve, connect, TLS, reset, etc.).
    Transport(curl::Error),
    /// Verb-based transport answered with a non-2xx status.
    Status(u32),
    /// Body was fetched but the codec for its declared type rejected it.
    Decode(String),
}

impl fmt::Display for UnavailableCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableCause::Transport(e) => write!(f, "{}", e),
            UnavailableCause::Status(code) => write!(f, "HTTP {}", code),
            UnavailableCause::Decode(msg) => write!(f, "undecodable body: {}", msg),
        }
    }
}

impl std::error::Error for UnavailableCause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UnavailableCause::Transport(e) => Some(e),
            UnavailableCause::Status(_) | UnavailableCause::Decode(_) => None,
        }
    }
}

/// Error returned by [`ContentProbe`](crate::probe::ContentProbe) constructors and accessors.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("no target URL given")]
    NullTarget,

    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("content unavailable at {url}: {cause}")]
    ContentUnavailable {
        url: String,
        #[source]
        cause: UnavailableCause,
    },

    #[error("content is not an image")]
    NotAnImage,

    #[error("content is not text")]
    NotText,

    #[error("content is not audio")]
    NotAudio,
}

impl ProbeError {
    pub(crate) fn unavailable(url: &url::Url, cause: UnavailableCause) -> Self {
        ProbeError::ContentUnavailable {
            url: url.to_string(),
            cause,
        }
    }

    /// True for fetch/decode failures (the recoverable, retry-at-caller category).
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ProbeError::ContentUnavailable { .. })
    }

    /// True when the declared content type does not fit the requested decoder.
    pub fn is_wrong_kind(&self) -> bool {
        matches!(
            self,
            ProbeError::NotAnImage | ProbeError::NotText | ProbeError::NotAudio
        )
    }

    /// The HTTP status behind a `ContentUnavailable`, if that was the cause.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            ProbeError::ContentUnavailable {
                cause: UnavailableCause::Status(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;
