//! Test bodies with known attributes.

use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Plain text of exactly 12 newline-terminated lines and 649 bytes.
pub fn twelve_lines() -> Vec<u8> {
    let mut out = String::new();
    for i in 0..11 {
        out.push_str(&format!("line {:02} {}\n", i + 1, "x".repeat(45)));
    }
    out.push_str(&format!("line 12 {}\n", "y".repeat(46)));
    let bytes = out.into_bytes();
    assert_eq!(bytes.len(), 649);
    bytes
}

/// PNG of the given pixel dimensions.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::new(width, height);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

/// PCM 16-bit mono WAV with `frames` silent frames.
pub fn wav(frames: u32, sample_rate: u32) -> Vec<u8> {
    let block_align: u16 = 2;
    let data_size = frames * block_align as u32;
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    out.resize(44 + data_size as usize, 0);
    out
}
