//! Point transforms
//!
//! Pure per-pixel operations. Each takes an image plus parameters, returns a
//! new image of identical dimensions, and runs in a single O(width*height)
//! pass. Single-value operations go through a 256-entry lookup table so the
//! float math runs once per value instead of once per byte.

use crate::enhance::common::error::{EnhanceError, Result};
use crate::enhance::raster::types::{CHANNELS, RasterImage};

/// Largest accepted brightness factor; the 0-200 slider maps onto
/// [0.0, 2.0] by dividing by 100.
pub const MAX_BRIGHTNESS_FACTOR: f32 = 2.0;

fn map_through_lut(image: &RasterImage, lut: &[u8; 256]) -> RasterImage {
    image.with_pixels(image.pixels().iter().map(|&v| lut[v as usize]).collect())
}

/// Scales every channel value by `factor`.
///
/// A factor of 1.0 is the identity; 0.0 yields black, 2.0 doubles each
/// value before clamping. Results round half away from zero.
pub fn brightness(image: &RasterImage, factor: f32) -> Result<RasterImage> {
    if !factor.is_finite() || !(0.0..=MAX_BRIGHTNESS_FACTOR).contains(&factor) {
        return Err(EnhanceError::OutOfRange {
            parameter: "brightness factor",
            value: factor as f64,
            range: "[0.0, 2.0]",
        });
    }

    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        *out = (v as f32 * factor).round().clamp(0.0, 255.0) as u8;
    }
    Ok(map_through_lut(image, &lut))
}

/// Scales each pixel's distance from its own gray level by `factor`.
///
/// The pivot is the rounded mean of the pixel's R, G and B values, so the
/// blend is local to each pixel. Factors above 1.0 push channels away from
/// gray, factors below pull them toward it; 1.0 is the identity.
pub fn contrast(image: &RasterImage, factor: f32) -> Result<RasterImage> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(EnhanceError::OutOfRange {
            parameter: "contrast factor",
            value: factor as f64,
            range: "(0.0, inf)",
        });
    }

    let pixels = image
        .pixels()
        .chunks_exact(CHANNELS)
        .flat_map(|px| {
            let gray =
                ((px[0] as u16 + px[1] as u16 + px[2] as u16) as f32 / CHANNELS as f32).round();
            px.iter()
                .map(move |&v| (gray + (v as f32 - gray) * factor).round().clamp(0.0, 255.0) as u8)
        })
        .collect();
    Ok(image.with_pixels(pixels))
}

/// Inverts every channel value. Applying twice restores the input exactly.
pub fn negative(image: &RasterImage) -> RasterImage {
    image.with_pixels(image.pixels().iter().map(|&v| 255 - v).collect())
}

/// Applies gamma correction with exponent `1/gamma` on normalized values.
///
/// `gamma` of 1.0 is the identity; values above 1.0 brighten midtones,
/// values below darken them.
pub fn gamma_correct(image: &RasterImage, gamma: f32) -> Result<RasterImage> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(EnhanceError::OutOfRange {
            parameter: "gamma",
            value: gamma as f64,
            range: "(0.0, inf)",
        });
    }

    let exponent = 1.0 / gamma;
    let mut lut = [0u8; 256];
    for (v, out) in lut.iter_mut().enumerate() {
        let normalized = v as f32 / 255.0;
        *out = (normalized.powf(exponent) * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    Ok(map_through_lut(image, &lut))
}
