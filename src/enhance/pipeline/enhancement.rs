use std::path::Path;

use tracing::{info, instrument};

use crate::enhance::{
    common::error::{EnhanceError, Result},
    ops::{histogram::ChannelHistogram, normalize, point},
    pipeline::types::{
        EnhanceConfig, MAX_BRIGHTNESS_LEVEL, Operation, PipelineStage, PipelineState,
    },
    raster::{ImageDecoder, PngDecoder, RasterImage},
};

/// Façade the presentation layer drives.
///
/// Owns the `original` and `processed` buffers exclusively; callers only
/// ever see shared references into them. Every catalog operation reads
/// `original`, so repeated button presses never compound.
pub struct EnhancementPipeline<D: ImageDecoder> {
    decoder: D,
    config: EnhanceConfig,
    state: PipelineState,
}

impl EnhancementPipeline<PngDecoder> {
    pub fn new(config: EnhanceConfig) -> Self {
        Self::with_custom(PngDecoder, config)
    }
}

impl<D: ImageDecoder> EnhancementPipeline<D> {
    pub fn with_custom(decoder: D, config: EnhanceConfig) -> Self {
        Self {
            decoder,
            config,
            state: PipelineState::new(),
        }
    }

    /// Replaces both buffers with a freshly decoded image.
    pub fn load(&mut self, image: RasterImage) {
        info!(
            width = image.width(),
            height = image.height(),
            "Image loaded"
        );
        self.state.processed = Some(image.clone());
        self.state.original = Some(image);
        self.state.stage = PipelineStage::Loaded;
    }

    /// Decodes encoded bytes through the injected decoder, then loads.
    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<()> {
        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.decoder.decode(data)?
        };
        self.load(image);
        Ok(())
    }

    #[instrument(skip(self, path))]
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        info!(input = %path.display(), "Loading image file");

        let data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                EnhanceError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        self.load_bytes(&data)
    }

    /// Recomputes `processed` from `original` with the given operation.
    ///
    /// Fails with [`EnhanceError::NoImageLoaded`] before the first load and
    /// with [`EnhanceError::OutOfRange`] for parameters outside their
    /// documented domain; failures leave the state untouched.
    #[instrument(skip(self))]
    pub fn apply(&mut self, operation: Operation) -> Result<&RasterImage> {
        let original = self
            .state
            .original
            .as_ref()
            .ok_or(EnhanceError::NoImageLoaded)?;

        let processed = {
            let _span = tracing::info_span!("apply_operation").entered();
            match operation {
                Operation::Brightness { factor } => point::brightness(original, factor)?,
                Operation::Contrast { factor } => point::contrast(original, factor)?,
                Operation::Negative => point::negative(original),
                Operation::ContrastStretch => normalize::contrast_stretch(original),
                Operation::HistogramEqualize => normalize::equalize_histogram(original),
                Operation::GammaCorrect { gamma } => point::gamma_correct(original, gamma)?,
            }
        };

        info!(?operation, "Operation applied");

        self.state.stage = PipelineStage::Modified;
        Ok(self.state.processed.insert(processed))
    }

    /// Contrast button: uses the configured factor.
    pub fn apply_contrast(&mut self) -> Result<&RasterImage> {
        self.apply(Operation::Contrast {
            factor: self.config.contrast_factor,
        })
    }

    /// Gamma-correction button: uses the configured gamma.
    pub fn apply_gamma(&mut self) -> Result<&RasterImage> {
        self.apply(Operation::GammaCorrect {
            gamma: self.config.gamma,
        })
    }

    /// Stores the slider level and applies the matching brightness factor.
    ///
    /// The level survives even when no image is loaded yet; the slider keeps
    /// its position and the next load picks it up.
    pub fn set_brightness_level(&mut self, level: u16) -> Result<&RasterImage> {
        if level > MAX_BRIGHTNESS_LEVEL {
            return Err(EnhanceError::OutOfRange {
                parameter: "brightness level",
                value: level as f64,
                range: "[0, 200]",
            });
        }

        self.state.brightness_level = level;
        self.apply(Operation::Brightness {
            factor: level as f32 / 100.0,
        })
    }

    pub fn brightness_level(&self) -> u16 {
        self.state.brightness_level
    }

    /// Frequency tables for the currently displayed image.
    pub fn histogram(&self) -> Result<ChannelHistogram> {
        let image = self
            .state
            .processed
            .as_ref()
            .or(self.state.original.as_ref())
            .ok_or(EnhanceError::NoImageLoaded)?;
        Ok(ChannelHistogram::compute(image))
    }

    pub fn stage(&self) -> PipelineStage {
        self.state.stage
    }

    pub fn original(&self) -> Option<&RasterImage> {
        self.state.original.as_ref()
    }

    pub fn processed(&self) -> Option<&RasterImage> {
        self.state.processed.as_ref()
    }

    pub fn config(&self) -> &EnhanceConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EnhanceConfig) {
        self.config = config;
    }
}
