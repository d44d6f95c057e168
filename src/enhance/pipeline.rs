//! Pipeline façade module
//!
//! This module provides the state machine the presentation layer drives:
//! load an image, apply catalog operations, read back the processed buffer
//! and its histogram.

mod enhancement;
pub mod types;

pub use enhancement::EnhancementPipeline;
pub use types::{
    EnhanceConfig, EnhanceConfigBuilder, Operation, PipelineStage, PipelineState,
};
