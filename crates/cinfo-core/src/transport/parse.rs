//! Parse response header lines into the metadata fields a probe reports.

use chrono::{DateTime, Utc};

/// Header-derived fields; anything missing falls back to curl's transfer info.
#[derive(Debug, Default)]
pub(crate) struct HeaderFields {
    pub content_length: Option<u64>,
    pub content_type: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Parse collected header lines (one response block) into HeaderFields.
pub(crate) fn parse_headers(lines: &[String]) -> HeaderFields {
    let mut fields = HeaderFields::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.parse::<u64>() {
                    fields.content_length = Some(n);
                }
            }
            if name.eq_ignore_ascii_case("content-type") && !value.is_empty() {
                fields.content_type = Some(value.to_string());
            }
            if name.eq_ignore_ascii_case("last-modified") {
                fields.last_modified = parse_http_date(value);
            }
        }
    }

    fields
}

/// HTTP-date (IMF-fixdate, "GMT" zone) is a subset of RFC 2822.
fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_headers_length_and_type() {
        let r = parse_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Length: 649",
            "Content-Type: text/plain; charset=UTF-8",
        ]));
        assert_eq!(r.content_length, Some(649));
        assert_eq!(r.content_type.as_deref(), Some("text/plain; charset=UTF-8"));
        assert!(r.last_modified.is_none());
    }

    #[test]
    fn parse_headers_last_modified() {
        let r = parse_headers(&lines(&["Last-Modified: Wed, 21 Oct 2015 07:28:00 GMT"]));
        let t = r.last_modified.unwrap();
        assert_eq!(t.year(), 2015);
        assert_eq!(t.timestamp(), 1_445_412_480);
    }

    #[test]
    fn parse_headers_ignores_garbage_values() {
        let r = parse_headers(&lines(&[
            "content-length: lots",
            "last-modified: yesterday",
            "Content-Type:",
        ]));
        assert!(r.content_length.is_none());
        assert!(r.last_modified.is_none());
        assert!(r.content_type.is_none());
    }

    #[test]
    fn parse_headers_case_insensitive_names() {
        let r = parse_headers(&lines(&["CONTENT-TYPE: image/png", "content-length: 68643"]));
        assert_eq!(r.content_type.as_deref(), Some("image/png"));
        assert_eq!(r.content_length, Some(68643));
    }
}
