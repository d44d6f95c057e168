//! Raster image model and decoding seam
//!
//! This module provides the 8-bit RGB pixel buffer every operation consumes
//! and produces, plus the decoder boundary the presentation layer plugs
//! file formats into.

mod decoder;
mod png_decoder;
pub mod types;

pub use decoder::ImageDecoder;
pub use png_decoder::PngDecoder;
pub use types::{Channel, RasterImage};
