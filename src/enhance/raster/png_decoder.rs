//! PNG decoder implementation using the png library.
//!
//! The enhancement core only ever consumes interleaved 8-bit R,G,B buffers,
//! so this decoder normalizes whatever the PNG container holds (palette,
//! grayscale, alpha, 16-bit samples) down to that layout. Other containers
//! (JPEG, BMP, GIF) are the presentation layer's job to decode.

use std::io::Cursor;

use tracing::debug;

use crate::enhance::common::error::{EnhanceError, Result};
use crate::enhance::raster::decoder::ImageDecoder;
use crate::enhance::raster::types::RasterImage;

/// Image decoder backed by the png crate.
pub struct PngDecoder;

impl ImageDecoder for PngDecoder {
    /// Decodes PNG bytes into an 8-bit RGB raster.
    ///
    /// Palette and sub-byte grayscale images are expanded and 16-bit samples
    /// reduced before conversion, so any valid PNG color type is accepted.
    /// Alpha channels are dropped; the tool has no transparency concept.
    fn decode(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding PNG image, {} bytes", data.len());

        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::normalize_to_color8());

        let mut reader = decoder
            .read_info()
            .map_err(|e| EnhanceError::DecodeError(e.to_string()))?;

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| EnhanceError::DecodeError(e.to_string()))?;
        buf.truncate(info.buffer_size());

        let width = info.width as usize;
        let height = info.height as usize;

        debug!(
            "Decoded PNG: {}x{}, color type {:?}",
            width, height, info.color_type
        );

        let pixels: Vec<u8> = match info.color_type {
            png::ColorType::Rgb => buf,
            png::ColorType::Rgba => buf
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v]).collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0]])
                .collect(),
            // Indexed images are expanded to RGB by the transformation above.
            other => {
                return Err(EnhanceError::DecodeError(format!(
                    "unexpected color type after expansion: {other:?}"
                )));
            }
        };

        RasterImage::new(width, height, pixels)
    }
}
