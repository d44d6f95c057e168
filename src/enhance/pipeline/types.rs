//! Pipeline state and configuration types

use crate::enhance::raster::types::RasterImage;

/// Default slider position; 100 maps to a brightness factor of 1.0.
pub const DEFAULT_BRIGHTNESS_LEVEL: u16 = 100;

/// Upper end of the brightness slider.
pub const MAX_BRIGHTNESS_LEVEL: u16 = 200;

/// One entry from the enhancement catalog.
///
/// Parameters are carried on the variant; the parameterless catalog buttons
/// fill them in from [`EnhanceConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Scale channel values by `factor` (slider level / 100).
    Brightness { factor: f32 },
    /// Blend each pixel away from its own gray level.
    Contrast { factor: f32 },
    /// Invert every channel value.
    Negative,
    /// Stretch each channel to the full [0, 255] range.
    ContrastStretch,
    /// Flatten each channel's histogram via its cumulative distribution.
    HistogramEqualize,
    /// Remap midtones with exponent `1/gamma`.
    GammaCorrect { gamma: f32 },
}

/// Lifecycle of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// No image loaded yet.
    Empty,
    /// An image is loaded and `processed` still equals `original`.
    Loaded,
    /// An operation has replaced `processed`; `original` is untouched.
    Modified,
}

/// Image state owned by the pipeline.
///
/// `processed` is present exactly when `original` is. Operations always
/// recompute from `original`, so edits never stack.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub(crate) original: Option<RasterImage>,
    pub(crate) processed: Option<RasterImage>,
    pub(crate) brightness_level: u16,
    pub(crate) stage: PipelineStage,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            original: None,
            processed: None,
            brightness_level: DEFAULT_BRIGHTNESS_LEVEL,
            stage: PipelineStage::Empty,
        }
    }
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Configuration for the enhancement pipeline
#[derive(Debug, Clone)]
pub struct EnhanceConfig {
    /// Factor used by the parameterless contrast button.
    pub contrast_factor: f32,
    /// Gamma used by the parameterless gamma-correction button.
    pub gamma: f32,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            contrast_factor: 1.5,
            gamma: 1.5,
        }
    }
}

impl EnhanceConfig {
    pub fn builder() -> EnhanceConfigBuilder {
        EnhanceConfigBuilder::default()
    }
}

/// Builder for EnhanceConfig
#[derive(Default)]
pub struct EnhanceConfigBuilder {
    contrast_factor: Option<f32>,
    gamma: Option<f32>,
}

impl EnhanceConfigBuilder {
    pub fn contrast_factor(mut self, factor: f32) -> Self {
        self.contrast_factor = Some(factor);
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn build(self) -> EnhanceConfig {
        let default = EnhanceConfig::default();
        EnhanceConfig {
            contrast_factor: self.contrast_factor.unwrap_or(default.contrast_factor),
            gamma: self.gamma.unwrap_or(default.gamma),
        }
    }
}
