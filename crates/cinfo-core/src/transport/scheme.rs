//! URL schemes the transport accepts.

use url::Url;

/// Schemes a probe may target. `http`/`https` are verb-based.
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "file"];

pub fn is_supported(url: &Url) -> bool {
    SUPPORTED_SCHEMES.contains(&url.scheme())
}

/// True if the transport has a request-method concept (HEAD vs GET).
pub fn is_verb_based(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
