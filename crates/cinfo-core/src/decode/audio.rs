//! Audio duration via symphonia's container probe.

use super::DecodeError;
use std::io::Cursor;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Duration in seconds of the default track: frame count / frame rate.
///
/// `mime_type` and `extension` are probe hints only; the container is still
/// identified from the bytes. Fails when the container is unrecognized or
/// does not declare both a frame count and a non-zero sample rate.
pub fn audio_duration_secs(
    body: Vec<u8>,
    mime_type: Option<&str>,
    extension: Option<&str>,
) -> Result<f64, DecodeError> {
    let mss = MediaSourceStream::new(
        Box::new(Cursor::new(body)),
        MediaSourceStreamOptions::default(),
    );

    let mut hint = Hint::new();
    if let Some(mime) = mime_type {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        hint.mime_type(essence);
    }
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| DecodeError(format!("audio: {}", e)))?;

    let track = probed
        .format
        .default_track()
        .ok_or_else(|| DecodeError("audio: no default track".to_string()))?;
    let params = &track.codec_params;

    let frames = params
        .n_frames
        .ok_or_else(|| DecodeError("audio: frame count unknown".to_string()))?;
    let rate = params
        .sample_rate
        .filter(|r| *r > 0)
        .ok_or_else(|| DecodeError("audio: frame rate unknown".to_string()))?;

    Ok(frames as f64 / rate as f64)
}
