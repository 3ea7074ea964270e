//! `cinfo length|type|modified|location|available|kind <url>`

use super::with_probe;
use anyhow::Result;
use cinfo_core::{ContentKind, ContentProbe, TransportOptions};

pub async fn run_length(url: &str, opts: TransportOptions) -> Result<()> {
    let len = with_probe(url, opts, |p| p.content_length()).await?;
    println!("{}", len.as_i64());
    Ok(())
}

pub async fn run_type(url: &str, opts: TransportOptions) -> Result<()> {
    let ct = with_probe(url, opts, |p| p.content_type()).await?;
    println!("{}", ct.as_deref().unwrap_or("-"));
    Ok(())
}

pub async fn run_modified(url: &str, opts: TransportOptions) -> Result<()> {
    let t = with_probe(url, opts, |p| p.last_modified()).await?;
    println!("{}", t.to_rfc3339());
    Ok(())
}

pub fn run_location(url: &str) -> Result<()> {
    let probe = ContentProbe::parse(url)?;
    println!("{}", probe.location());
    Ok(())
}

pub async fn run_available(url: &str, opts: TransportOptions) -> Result<()> {
    let available = with_probe(url, opts, |p| Ok(p.is_available())).await?;
    println!("{}", available);
    Ok(())
}

pub async fn run_kind(url: &str, opts: TransportOptions) -> Result<()> {
    let kind = with_probe(url, opts, |p| p.kind()).await?;
    println!("{}", kind_label(kind));
    Ok(())
}

pub(crate) fn kind_label(kind: Option<ContentKind>) -> &'static str {
    match kind {
        Some(ContentKind::Image) => "image",
        Some(ContentKind::Text) => "text",
        Some(ContentKind::Audio) => "audio",
        None => "other",
    }
}
