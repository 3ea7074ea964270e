//! Image dimensions via the `image` crate.

use super::DecodeError;
use ::image::ImageReader;
use serde::Serialize;
use std::io::Cursor;

/// Pixel dimensions of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Decodes pixel dimensions from an encoded image body.
///
/// The format is guessed from the body's signature; only the header is decoded.
pub fn image_dimensions(body: &[u8]) -> Result<ImageSize, DecodeError> {
    let reader = ImageReader::new(Cursor::new(body))
        .with_guessed_format()
        .map_err(|e| DecodeError(format!("image: {}", e)))?;
    if reader.format().is_none() {
        return Err(DecodeError("image: unrecognized format".to_string()));
    }
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| DecodeError(format!("image: {}", e)))?;
    Ok(ImageSize { width, height })
}
