//! Image enhancement module
//!
//! This module provides the pixel-level enhancement core behind the tool,
//! with separate modules for the raster data model, the enhancement
//! operations, and the pipeline façade that orchestrates them.

pub mod raster;
pub mod ops;
pub mod pipeline;
pub mod common;

pub use common::{
    EnhanceError,
    Result,
};

pub use raster::{
    RasterImage,
    Channel,
    ImageDecoder,
    PngDecoder,
};

pub use ops::ChannelHistogram;

pub use pipeline::{
    Operation,
    PipelineStage,
    PipelineState,
    EnhanceConfig,
    EnhanceConfigBuilder,
    EnhancementPipeline,
};
