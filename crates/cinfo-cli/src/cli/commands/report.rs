//! `cinfo report <url> [--json]` – everything at once.

use super::kind_label;
use super::with_probe;
use anyhow::Result;
use cinfo_core::{ProbeReport, TransportOptions};

fn print_report(r: &ProbeReport) {
    println!("  {:<14} {}", "Location", r.location);
    println!("  {:<14} {}", "Available", r.available);
    if !r.available {
        return;
    }
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
    println!(
        "  {:<14} {}",
        "Length",
        or_dash(r.content_length.map(|l| l.to_string()))
    );
    println!("  {:<14} {}", "Type", or_dash(r.content_type.clone()));
    println!(
        "  {:<14} {}",
        "Modified",
        or_dash(r.last_modified.map(|t| t.to_rfc3339()))
    );
    println!("  {:<14} {}", "Kind", kind_label(r.kind));
    if let Some(size) = r.image_size {
        println!("  {:<14} {}x{}", "Image size", size.width, size.height);
    }
    if let Some(n) = r.line_count {
        println!("  {:<14} {}", "Lines", n);
    }
    if let Some(d) = r.audio_duration_secs {
        println!("  {:<14} {:.3}s", "Duration", d);
    }
    if let Some(e) = &r.decode_error {
        println!("  {:<14} {}", "Decode error", e);
    }
}

pub async fn run_report(url: &str, opts: TransportOptions, json: bool) -> Result<()> {
    let report = with_probe(url, opts, ProbeReport::collect).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
