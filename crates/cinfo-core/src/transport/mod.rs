//! Connection negotiation over libcurl.
//!
//! Every probe operation opens a fresh connection through [`acquire`], asking for
//! either metadata only (HEAD on HTTP, "nobody" elsewhere) or the full body (GET).
//! The curl handle never outlives the call; what comes back is an owned
//! [`Connection`] holding the final response's metadata and, when the caller
//! asked for [`BodySink::Buffer`], the body bytes.

mod parse;
mod scheme;

pub use scheme::{is_supported, is_verb_based, SUPPORTED_SCHEMES};

use crate::error::{ProbeError, ProbeResult, UnavailableCause};
use chrono::{DateTime, TimeZone, Utc};
use std::str;
use std::time::Duration;
use url::Url;

/// How much of the target a connection must transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// Status and headers only; no body bytes are transferred.
    MetadataOnly,
    /// Status, headers and the complete body.
    FullBody,
}

impl TransferMode {
    fn as_str(self) -> &'static str {
        match self {
            TransferMode::MetadataOnly => "metadata-only",
            TransferMode::FullBody => "full-body",
        }
    }
}

/// What happens to body bytes of a full-body transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySink {
    /// Count and drop them; only status and length matter.
    Discard,
    /// Keep them for a decoder.
    Buffer,
}

/// Transport settings applied to every connection a probe opens.
///
/// Timeouts are unset by default so libcurl's own defaults apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub follow_redirects: bool,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            timeout: None,
            follow_redirects: true,
            max_redirections: 10,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("cinfo/{}", env!("CARGO_PKG_VERSION"))
}

/// Connection-level metadata of the final response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Body length in bytes, if the transport could determine it.
    pub content_length: Option<u64>,
    /// Raw `Content-Type` value, parameters included.
    pub content_type: Option<String>,
    /// Last modification time reported by the transport.
    pub last_modified: Option<DateTime<Utc>>,
}

/// An established connection: metadata plus the body when it was buffered.
///
/// Owns everything it holds; dropping it releases the buffered body.
#[derive(Debug)]
pub struct Connection {
    metadata: Metadata,
    body: Vec<u8>,
}

impl Connection {
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Body bytes; empty unless the transfer used [`BodySink::Buffer`].
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Opens a connection to `url` in the given mode.
///
/// Verb-based transports (HTTP/HTTPS) use HEAD for [`TransferMode::MetadataOnly`]
/// and GET for [`TransferMode::FullBody`]; a final status outside 2xx is
/// `ContentUnavailable`. Other transports always complete the transfer handshake
/// and, having no `Content-Type`, get one guessed from the path's extension.
/// Body bytes go to `sink`; discarded bytes are still counted for the length.
/// No retries. Runs in the current thread; call from `spawn_blocking` if used
/// from async code.
pub fn acquire(
    url: &Url,
    mode: TransferMode,
    sink: BodySink,
    opts: &TransportOptions,
) -> ProbeResult<Connection> {
    let verb_based = is_verb_based(url);
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();
    let mut received: u64 = 0;
    let transport = |e: curl::Error| ProbeError::unavailable(url, UnavailableCause::Transport(e));

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).map_err(transport)?;
    easy.nobody(mode == TransferMode::MetadataOnly)
        .map_err(transport)?;
    easy.fetch_filetime(true).map_err(transport)?;
    easy.follow_location(opts.follow_redirects)
        .map_err(transport)?;
    easy.max_redirections(opts.max_redirections)
        .map_err(transport)?;
    easy.useragent(&opts.user_agent).map_err(transport)?;
    if let Some(t) = opts.connect_timeout {
        easy.connect_timeout(t).map_err(transport)?;
    }
    if let Some(t) = opts.timeout {
        easy.timeout(t).map_err(transport)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    // Each redirect hop starts a new header block; keep only the last.
                    if line.starts_with("HTTP/") {
                        headers.clear();
                    }
                    headers.push(line.to_string());
                }
                true
            })
            .map_err(transport)?;
        if mode == TransferMode::FullBody {
            transfer
                .write_function(|data| {
                    received += data.len() as u64;
                    if sink == BodySink::Buffer {
                        body.extend_from_slice(data);
                    }
                    Ok(data.len())
                })
                .map_err(transport)?;
        }
        if let Err(e) = transfer.perform() {
            tracing::debug!(url = %url, mode = mode.as_str(), error = %e, "transfer failed");
            return Err(transport(e));
        }
    }

    let status = if verb_based {
        let code = easy.response_code().map_err(transport)?;
        if !(200..300).contains(&code) {
            tracing::debug!(url = %url, mode = mode.as_str(), status = code, "non-success status");
            return Err(ProbeError::unavailable(url, UnavailableCause::Status(code)));
        }
        Some(code)
    } else {
        None
    };

    let fields = parse::parse_headers(&headers);

    let content_type = match fields.content_type {
        Some(ct) => Some(ct),
        None => match easy.content_type().map_err(transport)? {
            Some(ct) => Some(ct.to_string()),
            None if !verb_based => guess_content_type(url),
            None => None,
        },
    };

    let content_length = match fields.content_length {
        Some(n) => Some(n),
        None => {
            let reported = easy.content_length_download().map_err(transport)?;
            if reported >= 0.0 {
                Some(reported as u64)
            } else if mode == TransferMode::FullBody {
                Some(received)
            } else {
                None
            }
        }
    };

    let last_modified = match fields.last_modified {
        Some(t) => Some(t),
        None => easy
            .filetime()
            .map_err(transport)?
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
    };

    tracing::debug!(
        url = %url,
        mode = mode.as_str(),
        status = ?status,
        content_length = ?content_length,
        content_type = ?content_type,
        received,
        buffered = body.len(),
        "connection acquired"
    );

    Ok(Connection {
        metadata: Metadata {
            content_length,
            content_type,
            last_modified,
        },
        body,
    })
}

/// MIME type guessed from the last path segment's extension.
fn guess_content_type(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    mime_guess::from_path(segment)
        .first_raw()
        .map(str::to_string)
}
