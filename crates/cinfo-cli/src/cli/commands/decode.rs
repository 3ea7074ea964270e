//! `cinfo image-size|lines|duration <url>`

use super::with_probe;
use anyhow::Result;
use cinfo_core::TransportOptions;

pub async fn run_image_size(url: &str, opts: TransportOptions) -> Result<()> {
    let size = with_probe(url, opts, |p| p.image_size()).await?;
    println!("{}x{}", size.width, size.height);
    Ok(())
}

pub async fn run_lines(url: &str, opts: TransportOptions) -> Result<()> {
    let lines = with_probe(url, opts, |p| p.line_count()).await?;
    println!("{}", lines);
    Ok(())
}

pub async fn run_duration(url: &str, opts: TransportOptions) -> Result<()> {
    let secs = with_probe(url, opts, |p| p.audio_duration()).await?;
    println!("{:.3}", secs);
    Ok(())
}
